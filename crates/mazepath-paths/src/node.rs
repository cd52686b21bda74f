use std::cmp::Ordering;

use mazepath_core::CellId;

/// Frontier entry, ordered by `priority` for use in `BinaryHeap`.
///
/// `cost` is the accumulated cost at push time; an entry whose cost is
/// larger than the cell's recorded best is stale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) id: CellId,
    pub(crate) cost: f64,
    pub(crate) priority: f64,
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other.priority.total_cmp(&self.priority)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_priority() {
        let mut heap = BinaryHeap::new();
        for (id, priority) in [(1, 3.5), (2, 0.5), (3, 2.0)] {
            heap.push(SearchNode {
                id,
                cost: 0.0,
                priority,
            });
        }
        let order: Vec<CellId> = std::iter::from_fn(|| heap.pop().map(|n| n.id)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
