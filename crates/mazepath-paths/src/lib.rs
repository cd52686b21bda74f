//! Shortest-path search on grid mazes.
//!
//! A [`Graph`] is built once from a [`Grid`](mazepath_core::Grid) and then
//! searched with one generic best-first routine, [`search`], whose frontier
//! order is set by a [`Heuristic`]:
//!
//! - **Dijkstra** (uniform-cost): [`Uniform`], via [`dijkstra`]
//! - **A\***: [`Euclidean`] straight-line distance, via [`astar`]
//!
//! Dijkstra returns optimal routes for any non-negative weights. A* does
//! only while the heuristic never overestimates, which for [`astar`] means
//! edges of at least [`STEP_COST`] between grid neighbours.

mod algorithm;
mod distance;
mod error;
mod graph;
mod node;
mod path;
mod search;
mod traits;

pub use algorithm::{Algorithm, astar, dijkstra};
pub use distance::{Euclidean, Manhattan, Uniform};
pub use error::PathError;
pub use graph::{Edge, Graph, STEP_COST};
pub use path::{Path, reconstruct};
pub use search::{Search, SearchStats, search};
pub use traits::Heuristic;
