use mazepath_core::GridError;
use mazepath_paths::PathError;
use thiserror::Error;

/// Errors that can occur during maze generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    #[error("maze must be at least 1x1, got {rows}x{cols}")]
    EmptyMaze { rows: usize, cols: usize },
    #[error("wall chance must be within [0, 1], got {0}")]
    InvalidWallChance(f64),
    #[error("no solvable maze after {attempts} attempts")]
    Unsolvable { attempts: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Path(#[from] PathError),
}
