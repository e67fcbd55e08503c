//! This crate contains the source code for the binary for the game heartmaze.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser;
use color_eyre::{eyre::Result, install};
use heartmaze::{App, Difficulty};

/// Command-line options for the game.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty of the generated mazes.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    let mut app = App::new(cli.difficulty)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
