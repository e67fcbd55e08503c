//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    config::Difficulty,
    game::MoveStatus,
    types::{Direction, MainMenuItem, Scene, WinMenuItem},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the handler for the current
/// scene. It uses a timeout to avoid blocking the UI. The `q` key exits from any scene.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('q') {
                app.exit = true;
                return Ok(());
            }

            match app.scene {
                Scene::MainMenu(item) => handle_main_menu_key(app, item, key.code)?,
                Scene::DifficultyMenu(cursor) => handle_difficulty_key(app, cursor, key.code)?,
                Scene::InGame => handle_game_key(app, key.code)?,
                Scene::Won(item) => handle_win_key(app, item, key.code)?,
            }
        }
    }

    Ok(())
}

/// Handles key presses on the main menu.
///
/// Navigation follows the same convention as every other menu: `j` moves down, `k` moves up
/// and `l` selects the highlighted item.
fn handle_main_menu_key(app: &mut App, item: MainMenuItem, code: KeyCode) -> Result<()> {
    match (code, item) {
        (KeyCode::Char('j'), MainMenuItem::Play) => {
            app.scene = Scene::MainMenu(MainMenuItem::Difficulty);
        }
        (KeyCode::Char('j'), MainMenuItem::Difficulty) => {
            app.scene = Scene::MainMenu(MainMenuItem::Quit);
        }
        (KeyCode::Char('k'), MainMenuItem::Quit) => {
            app.scene = Scene::MainMenu(MainMenuItem::Difficulty);
        }
        (KeyCode::Char('k'), MainMenuItem::Difficulty) => {
            app.scene = Scene::MainMenu(MainMenuItem::Play);
        }
        (KeyCode::Char('l'), MainMenuItem::Play) => {
            app.game.reset(app.difficulty)?;
            app.scene = Scene::InGame;
        }
        (KeyCode::Char('l'), MainMenuItem::Difficulty) => {
            app.scene = Scene::DifficultyMenu(app.difficulty);
        }
        (KeyCode::Char('l'), MainMenuItem::Quit) => {
            app.exit = true;
        }
        _ => {}
    }

    Ok(())
}

/// Handles key presses on the difficulty menu.
///
/// The cursor moves over the three profiles with `j` and `k`, `l` commits the selection and
/// starts a fresh maze, and `h` returns to the main menu without changing anything.
fn handle_difficulty_key(app: &mut App, cursor: Difficulty, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('j') => {
            app.scene = Scene::DifficultyMenu(cursor.next());
        }
        KeyCode::Char('k') => {
            app.scene = Scene::DifficultyMenu(cursor.previous());
        }
        KeyCode::Char('l') => {
            app.difficulty = cursor;
            app.game.reset(cursor)?;
            app.scene = Scene::InGame;
        }
        KeyCode::Char('h') => {
            app.scene = Scene::MainMenu(MainMenuItem::Difficulty);
        }
        _ => {}
    }

    Ok(())
}

/// Handles key presses during play.
///
/// Arrow keys and WASD both map onto the same move attempt. The returned status is the seam
/// toward presentation: only a winning move changes the scene, every other status is ignored
/// here and merely re-rendered on the next frame.
fn handle_game_key(app: &mut App, code: KeyCode) -> Result<()> {
    let direction = match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        _ => None,
    };

    if let Some(direction) = direction {
        match app.game.attempt_move(direction) {
            MoveStatus::Won { .. } => {
                app.scene = Scene::Won(WinMenuItem::PlayAgain);
            }
            MoveStatus::Moved | MoveStatus::Blocked | MoveStatus::AlreadyWon => {}
        }
        return Ok(());
    }

    match code {
        KeyCode::Char('n') => {
            app.game.reset(app.difficulty)?;
        }
        KeyCode::Char('1') => switch_difficulty(app, Difficulty::Easy)?,
        KeyCode::Char('2') => switch_difficulty(app, Difficulty::Medium)?,
        KeyCode::Char('3') => switch_difficulty(app, Difficulty::Hard)?,
        KeyCode::Char('h') => {
            app.scene = Scene::MainMenu(MainMenuItem::Play);
        }
        _ => {}
    }

    Ok(())
}

/// Switches the active difficulty mid-game and starts a fresh maze with it.
fn switch_difficulty(app: &mut App, difficulty: Difficulty) -> Result<()> {
    app.difficulty = difficulty;
    app.game.reset(difficulty)?;

    Ok(())
}

/// Handles key presses on the win scene.
///
/// `j` and `k` toggle between the two follow-up options; `l` either starts a fresh maze at the
/// current difficulty or returns to the main menu.
fn handle_win_key(app: &mut App, item: WinMenuItem, code: KeyCode) -> Result<()> {
    match (code, item) {
        (KeyCode::Char('j' | 'k'), WinMenuItem::PlayAgain) => {
            app.scene = Scene::Won(WinMenuItem::MainMenu);
        }
        (KeyCode::Char('j' | 'k'), WinMenuItem::MainMenu) => {
            app.scene = Scene::Won(WinMenuItem::PlayAgain);
        }
        (KeyCode::Char('l'), WinMenuItem::PlayAgain) => {
            app.game.reset(app.difficulty)?;
            app.scene = Scene::InGame;
        }
        (KeyCode::Char('l'), WinMenuItem::MainMenu) => {
            app.scene = Scene::MainMenu(MainMenuItem::Play);
        }
        _ => {}
    }

    Ok(())
}
