use mazepath_core::CellId;
use thiserror::Error;

/// Errors reported by graph construction and search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The goal cannot be reached from the start.
    #[error("no path found from {start} to {goal}")]
    NoPath { start: CellId, goal: CellId },
    /// A start or goal id that is not a node of the graph.
    #[error("cell {0} is not a node of the graph")]
    UnknownCell(CellId),
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: CellId, to: CellId, weight: f64 },
    #[error("graph row width must be non-zero")]
    ZeroWidth,
}
