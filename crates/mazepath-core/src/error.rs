use thiserror::Error;

use crate::geom::Point;
use crate::terrain::Terrain;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },
    #[error("grid of {rows}x{cols} is too large")]
    TooLarge { rows: usize, cols: usize },
    #[error("grid of {rows}x{cols} needs {expected} cells, got {found}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        expected: usize,
        found: usize,
        row: usize,
    },
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("{terrain} cell not allowed at {pos}")]
    MisplacedTerrain { terrain: Terrain, pos: Point },
}
