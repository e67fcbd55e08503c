//! Terminal maze mini-game with randomly generated perfect mazes.
//!
//! Every maze is carved by recursive backtracking over a grid of odd dimensions, so there is
//! always exactly one path from the start cell to the goal. The player walks the maze with the
//! arrow keys or WASD while a move counter keeps score, and reaching the goal switches to a win
//! scene with the final count.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod game;
mod maze;
mod types;
mod ui;

pub use app::App;
pub use config::Difficulty;
