//! Random maze generation.
//!
//! Every non-endpoint cell is independently blocked with probability
//! [`GenConfig::wall_chance`]. The RNG is owned by the generator and supplied
//! by the caller, so a seeded RNG reproduces the same mazes.

use mazepath_core::{Grid, Terrain};
use mazepath_paths::{Algorithm, Graph};
use rand::{Rng, RngExt};

use crate::error::GenError;

/// Default maze height.
pub const DEFAULT_ROWS: usize = 40;
/// Default maze width.
pub const DEFAULT_COLS: usize = 40;
/// Default probability of a cell being blocked.
pub const DEFAULT_WALL_CHANCE: f64 = 0.2;

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability in `[0, 1]` that a non-endpoint cell is blocked.
    pub wall_chance: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            wall_chance: DEFAULT_WALL_CHANCE,
        }
    }
}

impl GenConfig {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GenError::EmptyMaze {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_chance) {
            return Err(GenError::InvalidWallChance(self.wall_chance));
        }
        Ok(())
    }
}

/// Maze generator owning its RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    config: GenConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator; fails if `config` is out of range.
    pub fn new(config: GenConfig, rng: R) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    #[inline]
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Generate one maze.
    pub fn generate(&mut self) -> Result<Grid, GenError> {
        let GenConfig {
            rows,
            cols,
            wall_chance,
        } = self.config;
        let rng = &mut self.rng;
        let grid = Grid::from_terrain(rows, cols, |_| {
            if rng.random_bool(wall_chance) {
                Terrain::Blocked
            } else {
                Terrain::Open
            }
        })?;
        log::info!(
            "generated {rows}x{cols} maze with {} blocked cells",
            grid.count(Terrain::Blocked)
        );
        Ok(grid)
    }

    /// Generate mazes until the goal is reachable from the start.
    ///
    /// Returns the maze and the number of attempts it took, or
    /// [`GenError::Unsolvable`] after `max_attempts` failures.
    pub fn generate_solvable(&mut self, max_attempts: usize) -> Result<(Grid, usize), GenError> {
        for attempt in 1..=max_attempts {
            let grid = self.generate()?;
            let graph = Graph::from_grid(&grid);
            let reached = Algorithm::Dijkstra
                .search(&graph, grid.start(), grid.goal())?
                .reached();
            if reached {
                return Ok((grid, attempt));
            }
            log::debug!("attempt {attempt}: goal unreachable, regenerating");
        }
        Err(GenError::Unsolvable {
            attempts: max_attempts,
        })
    }

    /// Consume the generator, returning its RNG.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
