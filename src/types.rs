//! Scene and input type definitions for the application state and navigation.

use crate::config::Difficulty;

/// The four unit directions a player can move in.
///
/// This enumeration covers every directional input the game accepts. Both arrow keys and WASD
/// keys resolve to the same variant, so the game state never knows which physical key produced
/// a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Movement toward the top of the grid.
    Up,
    /// Movement toward the bottom of the grid.
    Down,
    /// Movement toward the left edge of the grid.
    Left,
    /// Movement toward the right edge of the grid.
    Right,
}

impl Direction {
    /// Returns the unit offset of this direction in grid coordinates.
    ///
    /// The offset is expressed as `(dx, dy)` where the y axis grows downward, matching the
    /// row-major grid layout used by the maze.
    pub(crate) const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Enumeration of available application scenes.
///
/// This enumeration holds information about the current scene of the game. It is used to
/// determine which scene to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scene {
    /// Main menu scene of the game.
    ///
    /// This variant represents the entry scene with the "Play", "Difficulty" and "Quit"
    /// options, carrying the currently highlighted item.
    MainMenu(MainMenuItem),
    /// Difficulty selection scene.
    ///
    /// This variant represents the scene in which the user picks one of the three maze
    /// profiles, carrying the difficulty the cursor currently rests on.
    DifficultyMenu(Difficulty),
    /// In-game maze scene.
    ///
    /// This variant represents the scene where the maze is displayed and played.
    InGame,
    /// Win scene shown after reaching the goal.
    ///
    /// This variant represents the scene displayed once the player steps onto the goal cell,
    /// carrying the currently highlighted follow-up option.
    Won(WinMenuItem),
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which
/// items can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Play" menu option.
    Play,
    /// "Difficulty" menu option.
    Difficulty,
    /// "Quit" menu option.
    Quit,
}

/// Win scene navigation options.
///
/// This enumeration holds the different items offered once a maze has been solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WinMenuItem {
    /// "Play Again" option, which starts a fresh maze at the current difficulty.
    PlayAgain,
    /// "Main Menu" option, which returns to the entry scene.
    MainMenu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_vectors() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_scene_variants() {
        let main_menu = Scene::MainMenu(MainMenuItem::Play);
        let difficulty_menu = Scene::DifficultyMenu(Difficulty::Medium);
        let in_game = Scene::InGame;
        let won = Scene::Won(WinMenuItem::PlayAgain);

        assert_eq!(main_menu, Scene::MainMenu(MainMenuItem::Play));
        assert_eq!(difficulty_menu, Scene::DifficultyMenu(Difficulty::Medium));
        assert_eq!(in_game, Scene::InGame);
        assert_eq!(won, Scene::Won(WinMenuItem::PlayAgain));

        assert_ne!(main_menu, in_game);
        assert_ne!(won, Scene::Won(WinMenuItem::MainMenu));
    }

    #[test]
    fn test_menu_item_variants() {
        assert_ne!(MainMenuItem::Play, MainMenuItem::Difficulty);
        assert_ne!(MainMenuItem::Difficulty, MainMenuItem::Quit);
        assert_ne!(WinMenuItem::PlayAgain, WinMenuItem::MainMenu);
    }
}
