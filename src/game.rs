//! Game session state and move validation.
//!
//! This module contains the state of a single maze session: the maze itself, the player
//! position, the move counter and the won flag. Moves are pure state transitions that report
//! their outcome as a [`MoveStatus`]; rendering and scene switching are left entirely to the
//! caller inspecting that status.

use color_eyre::eyre::Result;

use crate::{
    config::Difficulty,
    maze::{Cell, Maze},
    types::Direction,
};

/// Player coordinates within the maze grid.
///
/// The position always refers to an in-bounds, non-wall cell; the move validation below never
/// commits a position that would violate this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    /// Column of the cell the player stands on.
    pub x: usize,
    /// Row of the cell the player stands on.
    pub y: usize,
}

/// The discrete outcome of a single move attempt.
///
/// Exactly one variant is returned per call to [`GameState::attempt_move`]. Blocked moves and
/// post-win input are ordinary outcomes rather than errors, because both are expected,
/// user-driven behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveStatus {
    /// The move was committed onto an ordinary open cell.
    Moved,
    /// The move targeted a wall or left the grid; nothing changed.
    Blocked,
    /// The move was committed onto the goal cell, carrying the final move count.
    Won {
        /// Total number of successful moves in the session, including this one.
        moves: u32,
    },
    /// The session was already won; nothing changed.
    AlreadyWon,
}

/// State of one maze session.
///
/// This structure owns the maze and tracks the player through it. A session is replaced
/// wholesale on [`reset`](GameState::reset); it is never partially mutated across sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GameState {
    /// The maze being played.
    maze: Maze,
    /// Current player position.
    player: Position,
    /// Number of successful moves so far.
    moves: u32,
    /// Whether the goal has been reached.
    won: bool,
}

impl GameState {
    /// Starts a fresh session at the given difficulty.
    ///
    /// This function resolves the difficulty profile, generates a new maze of the configured
    /// dimensions and places the player at the start cell `(1, 1)` with a zeroed move counter.
    ///
    /// # Errors
    ///
    /// This function returns an error when maze generation rejects the configured dimensions,
    /// which cannot happen for the built-in profiles.
    pub(crate) fn new(difficulty: Difficulty) -> Result<Self> {
        let profile = difficulty.profile();
        let maze = Maze::generate(profile.width, profile.height)?;

        Ok(Self {
            maze,
            player: Position { x: 1, y: 1 },
            moves: 0,
            won: false,
        })
    }

    /// Replaces this session with a fresh one at the given difficulty.
    ///
    /// The whole state is swapped at once, so no reader can observe a half-reset session.
    ///
    /// # Errors
    ///
    /// This function returns an error when maze generation rejects the configured dimensions,
    /// which cannot happen for the built-in profiles.
    pub(crate) fn reset(&mut self, difficulty: Difficulty) -> Result<()> {
        *self = Self::new(difficulty)?;

        Ok(())
    }

    /// Attempts to move the player one cell in the given direction.
    ///
    /// Won sessions ignore all input and report [`MoveStatus::AlreadyWon`]. Out-of-bounds and
    /// wall targets leave the state untouched and report [`MoveStatus::Blocked`]. Otherwise the
    /// move commits: the position updates, the counter increments by exactly one, and stepping
    /// onto the goal flips the session into its won state for good.
    pub(crate) fn attempt_move(&mut self, direction: Direction) -> MoveStatus {
        if self.won {
            return MoveStatus::AlreadyWon;
        }

        let (dx, dy) = direction.delta();
        let Some(new_x) = self.player.x.checked_add_signed(dx) else {
            return MoveStatus::Blocked;
        };
        let Some(new_y) = self.player.y.checked_add_signed(dy) else {
            return MoveStatus::Blocked;
        };

        match self.maze.cell(new_x, new_y) {
            None | Some(Cell::Wall) => MoveStatus::Blocked,
            Some(Cell::Path) => {
                self.player = Position { x: new_x, y: new_y };
                self.moves += 1;
                MoveStatus::Moved
            }
            Some(Cell::Goal) => {
                self.player = Position { x: new_x, y: new_y };
                self.moves += 1;
                self.won = true;
                MoveStatus::Won { moves: self.moves }
            }
        }
    }

    /// Returns the maze being played.
    pub(crate) const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the current player position.
    pub(crate) const fn player(&self) -> Position {
        self.player
    }

    /// Returns the number of successful moves so far.
    pub(crate) const fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns whether the goal has been reached.
    pub(crate) const fn won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Returns the unique shortest path from `start` to the goal, both endpoints included.
    fn path_to_goal(maze: &Maze, start: (usize, usize)) -> Vec<(usize, usize)> {
        let mut parents = vec![vec![None; maze.width()]; maze.height()];
        let mut visited = vec![vec![false; maze.width()]; maze.height()];
        let mut queue = VecDeque::new();
        let mut goal = None;

        visited[start.1][start.0] = true;
        queue.push_back(start);

        while let Some((x, y)) = queue.pop_front() {
            if maze.cell(x, y) == Some(Cell::Goal) {
                goal = Some((x, y));
                break;
            }

            for (dx, dy) in [(0_isize, -1_isize), (0, 1), (-1, 0), (1, 0)] {
                let Some(next_x) = x.checked_add_signed(dx) else {
                    continue;
                };
                let Some(next_y) = y.checked_add_signed(dy) else {
                    continue;
                };
                if visited
                    .get(next_y)
                    .and_then(|row| row.get(next_x))
                    .copied()
                    .unwrap_or(true)
                {
                    continue;
                }
                if maze.cell(next_x, next_y) != Some(Cell::Wall) {
                    visited[next_y][next_x] = true;
                    parents[next_y][next_x] = Some((x, y));
                    queue.push_back((next_x, next_y));
                }
            }
        }

        let mut path = Vec::new();
        let mut cursor = goal.expect("goal must be reachable from the start");
        while cursor != start {
            path.push(cursor);
            cursor = parents[cursor.1][cursor.0].expect("path cell must have a parent");
        }
        path.push(start);
        path.reverse();
        path
    }

    /// Returns the direction of a single step between two adjacent cells.
    fn step_direction(from: (usize, usize), to: (usize, usize)) -> Direction {
        if to.0 > from.0 {
            Direction::Right
        } else if to.0 < from.0 {
            Direction::Left
        } else if to.1 > from.1 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Drives a session along the shortest path and returns the final status.
    fn walk_to_goal(game: &mut GameState) -> MoveStatus {
        let path = path_to_goal(game.maze(), (game.player().x, game.player().y));
        let mut status = MoveStatus::Blocked;
        for pair in path.windows(2) {
            status = game.attempt_move(step_direction(pair[0], pair[1]));
        }
        status
    }

    #[test]
    fn test_new_session_starts_at_origin() {
        let game = GameState::new(Difficulty::Easy).expect("session should start");

        assert_eq!(game.player(), Position { x: 1, y: 1 });
        assert_eq!(game.moves(), 0);
        assert!(!game.won());
        assert_eq!(game.maze().width(), 9);
        assert_eq!(game.maze().height(), 9);
    }

    #[test]
    fn test_move_into_border_is_blocked() {
        let mut game = GameState::new(Difficulty::Easy).expect("session should start");

        // From (1, 1) both up and left lead straight into the border wall.
        assert_eq!(game.attempt_move(Direction::Up), MoveStatus::Blocked);
        assert_eq!(game.attempt_move(Direction::Left), MoveStatus::Blocked);

        assert_eq!(game.player(), Position { x: 1, y: 1 });
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_wall_bump_leaves_state_unchanged() {
        let mut game = GameState::new(Difficulty::Easy).expect("session should start");

        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let before = game.clone();
            if game.attempt_move(direction) == MoveStatus::Blocked {
                assert_eq!(
                    game, before,
                    "a blocked move must not change any part of the state"
                );
            } else {
                // Undo the successful move so every direction is tried from the start.
                game = GameState::new(Difficulty::Easy).expect("session should restart");
            }
        }
    }

    #[test]
    fn test_walking_shortest_path_wins_with_exact_count() {
        let mut game = GameState::new(Difficulty::Easy).expect("session should start");
        let steps = path_to_goal(game.maze(), (1, 1)).len() - 1;

        let status = walk_to_goal(&mut game);

        let expected = u32::try_from(steps).expect("step count fits in u32");
        assert_eq!(status, MoveStatus::Won { moves: expected });
        assert_eq!(game.moves(), expected);
        assert!(game.won());
    }

    #[test]
    fn test_win_is_final() {
        let mut game = GameState::new(Difficulty::Easy).expect("session should start");
        let _ = walk_to_goal(&mut game);
        assert!(game.won(), "walking the shortest path must win the session");

        let frozen = game.clone();
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(game.attempt_move(direction), MoveStatus::AlreadyWon);
            assert_eq!(game, frozen, "post-win input must be inert");
        }
    }

    #[test]
    fn test_successful_moves_count_exactly() {
        let mut game = GameState::new(Difficulty::Medium).expect("session should start");
        let path = path_to_goal(game.maze(), (1, 1));

        // Walk only the first few steps of the path and verify the counter tracks them.
        let steps = path.len().min(4) - 1;
        for pair in path.windows(2).take(steps) {
            assert_eq!(
                game.attempt_move(step_direction(pair[0], pair[1])),
                MoveStatus::Moved
            );
        }
        assert_eq!(game.moves(), u32::try_from(steps).expect("fits in u32"));
    }

    #[test]
    fn test_reset_replaces_the_session_wholesale() {
        let mut game = GameState::new(Difficulty::Easy).expect("session should start");
        let _ = walk_to_goal(&mut game);
        assert!(game.won(), "walking the shortest path must win the session");

        game.reset(Difficulty::Medium).expect("reset should succeed");

        assert_eq!(game.maze().width(), 13);
        assert_eq!(game.maze().height(), 13);
        assert_eq!(game.player(), Position { x: 1, y: 1 });
        assert_eq!(game.moves(), 0);
        assert!(!game.won());
    }
}
