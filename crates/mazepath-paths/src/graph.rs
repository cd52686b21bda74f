//! Adjacency graph built from a [`Grid`].

use std::collections::HashMap;

use mazepath_core::{CellId, Grid, Point};

use crate::error::PathError;

/// Cost of one step between adjacent open cells.
pub const STEP_COST: f64 = 1.0;

/// A directed edge towards `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: CellId,
    pub weight: f64,
}

/// Mapping from cell id to its outgoing edges. Only passable cells are
/// keys. Read-only once built.
#[derive(Debug, Clone)]
pub struct Graph {
    cols: usize,
    adjacency: HashMap<CellId, Vec<Edge>>,
}

impl Graph {
    /// Connect every passable cell to its passable 4-neighbours with
    /// [`STEP_COST`] edges.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut adjacency = HashMap::with_capacity(grid.len());
        for cell in grid.iter().filter(|c| c.terrain.is_passable()) {
            let edges: Vec<Edge> = cell
                .pos
                .neighbors_4()
                .into_iter()
                .filter(|&n| grid.terrain(n).is_passable())
                .filter_map(|n| grid.id_of(n))
                .map(|to| Edge {
                    to,
                    weight: STEP_COST,
                })
                .collect();
            adjacency.insert(cell.id, edges);
        }
        let graph = Self {
            cols: grid.cols(),
            adjacency,
        };
        log::debug!(
            "built graph: {} nodes, {} edges from {}x{} grid",
            graph.node_count(),
            graph.edge_count(),
            grid.rows(),
            grid.cols()
        );
        graph
    }

    /// Build a graph from explicit nodes and `(from, to, weight)` edges.
    /// Edge endpoints become nodes automatically. `cols` is the row width
    /// used to recover coordinates for heuristics.
    ///
    /// Fails on a zero `cols` or a negative, infinite or NaN weight.
    pub fn with_edges(
        cols: usize,
        nodes: impl IntoIterator<Item = CellId>,
        edges: impl IntoIterator<Item = (CellId, CellId, f64)>,
    ) -> Result<Self, PathError> {
        if cols == 0 {
            return Err(PathError::ZeroWidth);
        }
        let mut adjacency: HashMap<CellId, Vec<Edge>> = HashMap::new();
        for id in nodes {
            adjacency.entry(id).or_default();
        }
        for (from, to, weight) in edges {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(PathError::InvalidWeight { from, to, weight });
            }
            adjacency.entry(to).or_default();
            adjacency.entry(from).or_default().push(Edge { to, weight });
        }
        Ok(Self { cols, adjacency })
    }

    /// Whether `id` is a node.
    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Outgoing edges of `id`, or `None` if it is not a node.
    #[inline]
    pub fn edges(&self, id: CellId) -> Option<&[Edge]> {
        self.adjacency.get(&id).map(Vec::as_slice)
    }

    /// Node ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid coordinates of `id`.
    #[inline]
    pub fn point_of(&self, id: CellId) -> Point {
        Point::at((id / self.cols) as i32, (id % self.cols) as i32)
    }
}
