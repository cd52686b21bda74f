//! The shared best-first relaxation loop behind Dijkstra and A*.
//!
//! The frontier uses lazy deletion: an improved cell is pushed again rather
//! than re-keyed, and outdated entries are skipped when popped. The heap can
//! therefore hold one entry per successful relaxation, not one per cell.
//! Stopping at the first pop of the goal is only sound because edge weights
//! are non-negative, which [`Graph`] enforces.

use std::collections::{BinaryHeap, HashMap};

use mazepath_core::CellId;

use crate::error::PathError;
use crate::graph::Graph;
use crate::node::SearchNode;
use crate::path::{Path, reconstruct};
use crate::traits::Heuristic;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells whose edges were relaxed.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
    /// Outdated entries popped and skipped.
    pub stale: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// Outcome of one search: the per-run cost and predecessor tables.
#[derive(Debug, Clone)]
pub struct Search {
    start: CellId,
    goal: CellId,
    reached: bool,
    costs: HashMap<CellId, f64>,
    predecessors: HashMap<CellId, CellId>,
    stats: SearchStats,
}

impl Search {
    /// Whether the goal was popped from the frontier.
    #[inline]
    pub fn reached(&self) -> bool {
        self.reached
    }

    #[inline]
    pub fn start(&self) -> CellId {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> CellId {
        self.goal
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best known cost to `id`; `None` if never reached.
    pub fn cost_to(&self, id: CellId) -> Option<f64> {
        self.costs.get(&id).copied().filter(|c| c.is_finite())
    }

    pub fn predecessors(&self) -> &HashMap<CellId, CellId> {
        &self.predecessors
    }

    /// Rebuild the start-to-goal route.
    pub fn path(&self) -> Result<Path, PathError> {
        let no_path = PathError::NoPath {
            start: self.start,
            goal: self.goal,
        };
        if !self.reached {
            return Err(no_path);
        }
        let cells = reconstruct(&self.predecessors, self.start, self.goal)?;
        let cost = self.cost_to(self.goal).ok_or(no_path)?;
        Ok(Path::new(cells, cost))
    }
}

/// Best-first search from `start` to `goal`, ordering the frontier by
/// accumulated cost plus `heuristic`'s estimate.
///
/// Fails fast with [`PathError::UnknownCell`] when either endpoint is not a
/// node. An unreachable goal is not an error here; it shows up as
/// [`Search::reached`] being false and [`Search::path`] returning
/// [`PathError::NoPath`].
pub fn search<H: Heuristic + ?Sized>(
    graph: &Graph,
    start: CellId,
    goal: CellId,
    heuristic: &H,
) -> Result<Search, PathError> {
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(PathError::UnknownCell(id));
        }
    }

    let goal_pos = graph.point_of(goal);
    let priority = |id: CellId, cost: f64| cost + heuristic.estimate(graph.point_of(id), goal_pos);

    let mut costs: HashMap<CellId, f64> = graph.ids().map(|id| (id, f64::INFINITY)).collect();
    costs.insert(start, 0.0);
    let mut predecessors: HashMap<CellId, CellId> = HashMap::new();
    let mut stats = SearchStats::default();

    let mut open: BinaryHeap<SearchNode> = BinaryHeap::new();
    open.push(SearchNode {
        id: start,
        cost: 0.0,
        priority: priority(start, 0.0),
    });
    stats.pushed += 1;
    stats.peak_frontier = 1;

    let mut reached = false;
    while let Some(current) = open.pop() {
        let best = costs.get(&current.id).copied().unwrap_or(f64::INFINITY);
        if current.cost > best {
            stats.stale += 1;
            continue;
        }

        if current.id == goal {
            reached = true;
            break;
        }

        stats.expanded += 1;
        let Some(edges) = graph.edges(current.id) else {
            continue;
        };
        for edge in edges {
            let candidate = current.cost + edge.weight;
            let known = costs.entry(edge.to).or_insert(f64::INFINITY);
            if candidate < *known {
                *known = candidate;
                predecessors.insert(edge.to, current.id);
                open.push(SearchNode {
                    id: edge.to,
                    cost: candidate,
                    priority: priority(edge.to, candidate),
                });
                stats.pushed += 1;
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(open.len());
    }

    log::debug!(
        "search {start} -> {goal}: reached={reached} expanded={} pushed={} stale={} peak={}",
        stats.expanded,
        stats.pushed,
        stats.stale,
        stats.peak_frontier
    );

    Ok(Search {
        start,
        goal,
        reached,
        costs,
        predecessors,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Euclidean, Manhattan, Uniform};
    use mazepath_core::Grid;

    fn grid_graph(layout: &str) -> (Grid, Graph) {
        let grid = Grid::parse(layout).unwrap();
        let graph = Graph::from_grid(&grid);
        (grid, graph)
    }

    /// Exhaustive simple-path enumeration for small graphs.
    fn brute_force(graph: &Graph, at: CellId, goal: CellId, seen: &mut Vec<CellId>) -> f64 {
        if at == goal {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for edge in graph.edges(at).unwrap_or_default() {
            if seen.contains(&edge.to) {
                continue;
            }
            seen.push(edge.to);
            best = best.min(edge.weight + brute_force(graph, edge.to, goal, seen));
            seen.pop();
        }
        best
    }

    fn is_valid_route(graph: &Graph, cells: &[CellId]) -> bool {
        cells.windows(2).all(|w| {
            graph
                .edges(w[0])
                .is_some_and(|edges| edges.iter().any(|e| e.to == w[1]))
        })
    }

    #[test]
    fn open_3x3_matches_brute_force() {
        let (grid, graph) = grid_graph("S..\n...\n..E");
        let expected = brute_force(&graph, grid.start(), grid.goal(), &mut vec![grid.start()]);
        assert_eq!(expected, 4.0);
        for path in [
            search(&graph, 0, 8, &Uniform).unwrap().path().unwrap(),
            search(&graph, 0, 8, &Euclidean::default()).unwrap().path().unwrap(),
        ] {
            assert_eq!(path.cost(), expected);
            assert_eq!(path.len(), 5);
            assert!(is_valid_route(&graph, path.cells()));
        }
    }

    #[test]
    fn two_by_two() {
        let (_, graph) = grid_graph("S.\n.E");
        let path = search(&graph, 0, 3, &Uniform).unwrap().path().unwrap();
        assert_eq!(path.cost(), 2.0);
        assert_eq!(path.len(), 3);
        assert!(path.cells() == [0, 1, 3] || path.cells() == [0, 2, 3]);
    }

    #[test]
    fn routes_around_blocked_center() {
        let (_, graph) = grid_graph("S..\n.#.\n..E");
        for path in [
            search(&graph, 0, 8, &Uniform).unwrap().path().unwrap(),
            search(&graph, 0, 8, &Euclidean::default()).unwrap().path().unwrap(),
        ] {
            assert_eq!(path.cost(), 4.0);
            assert_eq!(path.len(), 5);
            assert!(!path.contains(4));
        }
    }

    #[test]
    fn start_is_goal() {
        let (_, graph) = grid_graph("S.\n.E");
        let result = search(&graph, 2, 2, &Euclidean::default()).unwrap();
        let path = result.path().unwrap();
        assert_eq!(path.cells(), [2]);
        assert_eq!(path.cost(), 0.0);
        assert_eq!(result.stats().expanded, 0);
    }

    #[test]
    fn enclosed_goal_is_no_path() {
        let (_, graph) = grid_graph("S...\n....\n...#\n..#E");
        let result = search(&graph, 0, 15, &Uniform).unwrap();
        assert!(!result.reached());
        assert_eq!(result.path(), Err(PathError::NoPath { start: 0, goal: 15 }));
        // Every reachable cell was settled before giving up.
        assert_eq!(result.stats().expanded, 13);
    }

    #[test]
    fn unknown_endpoints_fail_fast() {
        let (_, graph) = grid_graph("S#\n.E");
        assert_eq!(
            search(&graph, 1, 3, &Uniform).unwrap_err(),
            PathError::UnknownCell(1)
        );
        assert_eq!(
            search(&graph, 0, 99, &Uniform).unwrap_err(),
            PathError::UnknownCell(99)
        );
    }

    #[test]
    fn weighted_graph_prefers_cheaper_detour() {
        // 0 -> 1 -> 3 costs 10, 0 -> 2 -> 3 costs 3.
        let graph =
            Graph::with_edges(2, [0], [(0, 1, 1.0), (1, 3, 9.0), (0, 2, 2.0), (2, 3, 1.0)])
                .unwrap();
        let result = search(&graph, 0, 3, &Uniform).unwrap();
        let path = result.path().unwrap();
        assert_eq!(path.cells(), [0, 2, 3]);
        assert_eq!(path.cost(), 3.0);
        assert_eq!(result.cost_to(1), Some(1.0));
    }

    #[test]
    fn improved_cells_leave_stale_entries() {
        // 1 is first reached at cost 5, then improved to 2 via 2.
        let graph = Graph::with_edges(
            3,
            [0],
            [(0, 1, 5.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0), (2, 4, 10.0)],
        )
        .unwrap();
        let result = search(&graph, 0, 4, &Uniform).unwrap();
        assert_eq!(result.path().unwrap().cost(), 11.0);
        assert_eq!(result.stats().stale, 1);
        assert!(result.stats().pushed > result.stats().expanded);
    }

    #[test]
    fn heuristics_agree_on_cost() {
        let (grid, graph) = grid_graph(
            "S....#....\n\
             .###.#.##.\n\
             ...#...#..\n\
             #.#####.#.\n\
             ..#.....#.\n\
             .##.###.#.\n\
             .........E\n",
        );
        let base = search(&graph, grid.start(), grid.goal(), &Uniform).unwrap();
        let base_cost = base.path().unwrap().cost();
        for h in [&Euclidean::default() as &dyn Heuristic, &Manhattan::default()] {
            let guided = search(&graph, grid.start(), grid.goal(), h).unwrap();
            let path = guided.path().unwrap();
            assert_eq!(path.cost(), base_cost);
            assert!(is_valid_route(&graph, path.cells()));
            assert!(guided.stats().expanded <= base.stats().expanded);
        }
    }

    #[test]
    fn predecessor_table_backs_the_route() {
        let (_, graph) = grid_graph("S..\n.#.\n..E");
        let result = search(&graph, 0, 8, &Uniform).unwrap();
        let preds = result.predecessors();
        assert!(!preds.contains_key(&0));
        assert!(!preds.contains_key(&4));
        let cells = result.path().unwrap().into_cells();
        for pair in cells.windows(2) {
            assert_eq!(preds.get(&pair[1]), Some(&pair[0]));
        }

        // Each run starts from fresh tables.
        let other = search(&graph, 2, 6, &Uniform).unwrap();
        assert!(!other.predecessors().contains_key(&2));
        assert_eq!(other.path().unwrap().first(), Some(2));
    }

    #[test]
    fn repeated_runs_are_identical_in_cost() {
        let (_, graph) = grid_graph("S...\n.#..\n..#.\n...E");
        let first = search(&graph, 0, 15, &Euclidean::default()).unwrap().path().unwrap();
        for _ in 0..5 {
            let again = search(&graph, 0, 15, &Euclidean::default()).unwrap().path().unwrap();
            assert_eq!(again.cost(), first.cost());
        }
    }
}
