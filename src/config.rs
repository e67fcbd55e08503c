//! Difficulty configuration for maze generation.
//!
//! This module contains the fixed mapping from a difficulty label to the grid dimensions used by
//! the generator. The mapping is read-only configuration and is not part of the game state.

use std::fmt;

use clap::ValueEnum;

/// Difficulty of the generated mazes.
///
/// This enumeration holds the three supported difficulty labels. It doubles as the value type of
/// the `--difficulty` command-line flag and as the cursor of the in-game difficulty menu, so both
/// surfaces always agree on the available profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// Small 9x9 maze.
    Easy,
    /// Medium 13x13 maze.
    Medium,
    /// Large 17x17 maze.
    Hard,
}

/// Grid dimensions and display hint for one difficulty.
///
/// This structure bundles the maze dimensions handed to the generator with the display cell size
/// hint carried over for renderers. The dimensions are always odd so that the carving algorithm's
/// 2-step stride lines up with the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DifficultyProfile {
    /// Number of columns in the maze grid.
    pub width: usize,
    /// Number of rows in the maze grid.
    pub height: usize,
    /// Display size of a single cell, as a hint for renderers.
    ///
    /// Graphical front ends would read this as pixels per cell; the terminal renderer only uses
    /// it to pick a marker density.
    pub cell_size: u16,
}

impl Difficulty {
    /// All difficulties in ascending order, for menu rendering.
    pub(crate) const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the grid profile associated with this difficulty.
    ///
    /// This function resolves the static difficulty-to-dimensions mapping. Every profile has odd
    /// dimensions of at least 5, which the generator requires.
    pub(crate) const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                width: 9,
                height: 9,
                cell_size: 32,
            },
            Self::Medium => DifficultyProfile {
                width: 13,
                height: 13,
                cell_size: 28,
            },
            Self::Hard => DifficultyProfile {
                width: 17,
                height: 17,
                cell_size: 24,
            },
        }
    }

    /// Returns the lowercase label of this difficulty.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Returns the difficulty one step harder, saturating at the hardest.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium | Self::Hard => Self::Hard,
        }
    }

    /// Returns the difficulty one step easier, saturating at the easiest.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Easy | Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}
