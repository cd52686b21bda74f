use std::fmt;

use mazepath_core::CellId;

use crate::distance::{Euclidean, Uniform};
use crate::error::PathError;
use crate::graph::{Graph, STEP_COST};
use crate::path::Path;
use crate::search::{Search, search};

/// Uniform-cost search from `start` to `goal`.
pub fn dijkstra(graph: &Graph, start: CellId, goal: CellId) -> Result<Path, PathError> {
    search(graph, start, goal, &Uniform)?.path()
}

/// A* search from `start` to `goal` guided by straight-line distance.
///
/// The route is only guaranteed shortest when every edge costs at least
/// [`STEP_COST`] and joins grid neighbours, as in [`Graph::from_grid`]. For
/// other graphs use [`dijkstra`], or [`search`] with a scaled [`Euclidean`].
pub fn astar(graph: &Graph, start: CellId, goal: CellId) -> Result<Path, PathError> {
    search(graph, start, goal, &Euclidean::default())?.path()
}

/// The two shipped search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    /// Same optimality condition as [`astar`].
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    /// Run the search, keeping the tables and stats.
    pub fn search(self, graph: &Graph, start: CellId, goal: CellId) -> Result<Search, PathError> {
        match self {
            Algorithm::Dijkstra => search(graph, start, goal, &Uniform),
            Algorithm::AStar => search(graph, start, goal, &Euclidean::default()),
        }
    }

    /// Human-readable name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::AStar => "A* Algorithm",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
