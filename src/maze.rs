//! Maze grid representation and random generation.
//!
//! This module contains the maze data structure and the recursive backtracking generator that
//! fills it. Generation carves a spanning tree over the odd-coordinate "room center" cells of the
//! grid, so every maze is perfect: fully connected with exactly one simple path between any two
//! open cells.

use color_eyre::eyre::{bail, Result};
use rand::{rngs::ThreadRng, seq::SliceRandom as _};

/// Candidate neighbor offsets used while carving.
///
/// Room centers sit two cells apart on each axis; the cell between a room center and its chosen
/// neighbor is the wall that gets removed.
const CARVE_DIRECTIONS: [(isize, isize); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// A single cell of the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Solid cell the player cannot enter.
    Wall,
    /// Open cell the player can walk through.
    Path,
    /// The single open cell that wins the game when entered.
    Goal,
}

/// A generated maze grid.
///
/// This structure owns the cell grid in row-major order along with its dimensions. After
/// generation the grid satisfies three invariants: the start cell `(1, 1)` is open, the outer
/// border consists entirely of walls, and exactly one cell is the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Maze {
    /// Number of columns in the grid.
    width: usize,
    /// Number of rows in the grid.
    height: usize,
    /// Cell data indexed as `grid[y][x]`.
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    /// Generates a random perfect maze of the given dimensions.
    ///
    /// Both dimensions must be odd and at least 5; the carving algorithm moves in 2-step strides,
    /// so even dimensions would leave an unreachable strip along the border. The maze layout is
    /// randomized on every call, but the structural guarantees are deterministic: the start cell
    /// is open and a unique simple path connects it to the goal.
    ///
    /// # Errors
    ///
    /// This function returns an error if either dimension is even or smaller than 5.
    pub(crate) fn generate(width: usize, height: usize) -> Result<Self> {
        if width < 5 || height < 5 || width % 2 == 0 || height % 2 == 0 {
            bail!("maze dimensions must be odd and at least 5, got {width}x{height}");
        }

        let mut grid = vec![vec![Cell::Wall; width]; height];
        let mut rng = rand::thread_rng();

        Self::carve(&mut grid, 1, 1, &mut rng);
        Self::place_goal(&mut grid, width, height);

        Ok(Self {
            width,
            height,
            grid,
        })
    }

    /// Recursively carves open cells starting from the given room center.
    ///
    /// This function marks the current cell open, shuffles the four 2-step neighbor offsets into
    /// a uniformly random order, and for each neighbor that is still a wall strictly inside the
    /// border it opens the connecting wall cell and recurses into the neighbor. Backtracking
    /// happens implicitly when a cell runs out of unvisited neighbors.
    fn carve(grid: &mut [Vec<Cell>], x: usize, y: usize, rng: &mut ThreadRng) {
        let height = grid.len();
        let width = grid.first().map_or(0, Vec::len);

        if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = Cell::Path;
        }

        let mut directions = CARVE_DIRECTIONS;
        directions.shuffle(rng);

        for (dx, dy) in directions {
            let Some(neighbor_x) = x.checked_add_signed(dx) else {
                continue;
            };
            let Some(neighbor_y) = y.checked_add_signed(dy) else {
                continue;
            };

            // Neighbors must lie strictly inside the border.
            if neighbor_x == 0
                || neighbor_x >= width - 1
                || neighbor_y == 0
                || neighbor_y >= height - 1
            {
                continue;
            }
            if grid.get(neighbor_y).and_then(|row| row.get(neighbor_x)) != Some(&Cell::Wall) {
                continue;
            }

            // Open the wall between the current cell and the neighbor.
            let (wall_x, wall_y) = ((x + neighbor_x) / 2, (y + neighbor_y) / 2);
            if let Some(cell) = grid.get_mut(wall_y).and_then(|row| row.get_mut(wall_x)) {
                *cell = Cell::Path;
            }

            Self::carve(grid, neighbor_x, neighbor_y, rng);
        }
    }

    /// Converts the first open cell of the bottom-right quadrant into the goal.
    ///
    /// This function scans the quadrant `y > height / 2`, `x > width / 2` in decreasing row-major
    /// order starting from `(height - 2, width - 2)` and marks the first open cell it finds as
    /// the goal, then stops.
    fn place_goal(grid: &mut [Vec<Cell>], width: usize, height: usize) {
        for y in (height / 2 + 1..height - 1).rev() {
            for x in (width / 2 + 1..width - 1).rev() {
                if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
                    if *cell == Cell::Path {
                        *cell = Cell::Goal;
                        return;
                    }
                }
            }
        }

        // The carve always opens at least one cell in the bottom-right quadrant for supported
        // dimensions, so this fallback cannot trigger.
        debug_assert!(false, "no open cell found in the goal quadrant");
        if let Some(cell) = grid
            .get_mut(height - 2)
            .and_then(|row| row.get_mut(width - 2))
        {
            *cell = Cell::Goal;
        }
    }

    /// Returns the number of columns in the grid.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows in the grid.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at the given coordinates, or `None` when out of bounds.
    pub(crate) fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }
}
