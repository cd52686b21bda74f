//! Route reconstruction from a predecessor table.

use std::collections::HashMap;

use mazepath_core::CellId;

use crate::error::PathError;

/// An ordered route from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<CellId>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(cells: Vec<CellId>, cost: f64) -> Self {
        Self { cells, cost }
    }

    /// Cell ids from start to goal.
    #[inline]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<CellId> {
        self.cells
    }

    /// Total edge weight along the route.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of edges walked.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<CellId> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<CellId> {
        self.cells.last().copied()
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains(&id)
    }
}

/// Walk predecessor links back from `goal` to `start` and return the route
/// in forward order.
///
/// Fails with [`PathError::NoPath`] as soon as a cell other than `start` has
/// no predecessor. The walk is bounded by the table size, so a corrupt table
/// with a cycle also reports `NoPath` instead of looping.
pub fn reconstruct(
    predecessors: &HashMap<CellId, CellId>,
    start: CellId,
    goal: CellId,
) -> Result<Vec<CellId>, PathError> {
    let no_path = PathError::NoPath { start, goal };
    let mut route = vec![goal];
    let mut at = goal;
    while at != start {
        if route.len() > predecessors.len() {
            return Err(no_path);
        }
        at = *predecessors.get(&at).ok_or_else(|| no_path.clone())?;
        route.push(at);
    }
    route.reverse();
    Ok(route)
}
