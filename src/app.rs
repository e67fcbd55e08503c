//! Core application state and main loop for the maze game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    config::Difficulty,
    events,
    game::GameState,
    types::{MainMenuItem, Scene},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current scene being displayed to the user.
    ///
    /// This field holds the current scene of the game. It is used to determine which scene to
    /// render and what actions to take based on user input.
    pub(crate) scene: Scene,
    /// Currently active difficulty.
    ///
    /// This field holds the difficulty new mazes are generated with. It is changed from the
    /// difficulty menu or with the in-game number keys.
    pub(crate) difficulty: Difficulty,
    /// Current maze session.
    ///
    /// This field holds the game state: the maze, the player position, the move counter and the
    /// won flag. It is replaced wholesale whenever a new maze is requested.
    pub(crate) game: GameState,
}

impl App {
    /// Creates a new instance of the App structure with an initial maze session.
    ///
    /// The construction is fallible because it generates the first maze from the given
    /// difficulty profile.
    ///
    /// # Errors
    ///
    /// This function returns an error when maze generation rejects the configured dimensions,
    /// which cannot happen for the built-in profiles.
    pub fn new(difficulty: Difficulty) -> Result<Self> {
        Ok(Self {
            exit: false,
            scene: Scene::MainMenu(MainMenuItem::Play),
            difficulty,
            game: GameState::new(difficulty)?,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
