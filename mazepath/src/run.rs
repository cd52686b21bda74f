//! Timed search runs and their console report.

use std::io::Write;
use std::time::{Duration, Instant};

use mazepath_core::Grid;
use mazepath_paths::{Algorithm, Graph, Path, PathError, SearchStats};

use crate::error::AppError;
use crate::render::Renderer;

/// Result of one timed search.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Wall-clock time for search and route reconstruction.
    pub elapsed: Duration,
    pub stats: SearchStats,
    /// `None` when the goal is unreachable.
    pub path: Option<Path>,
}

/// Search from the grid's start to its goal, timing the search and the
/// reconstruction together.
///
/// An unreachable goal is part of the report; any other search error is
/// returned.
pub fn run_timed(algorithm: Algorithm, grid: &Grid, graph: &Graph) -> Result<RunReport, AppError> {
    let started = Instant::now();
    let search = algorithm.search(graph, grid.start(), grid.goal())?;
    let path = match search.path() {
        Ok(path) => Some(path),
        Err(PathError::NoPath { .. }) => None,
        Err(e) => return Err(e.into()),
    };
    let elapsed = started.elapsed();

    match &path {
        Some(p) => log::info!(
            "{algorithm}: cost {} over {} cells in {elapsed:?}",
            p.cost(),
            p.len()
        ),
        None => log::warn!("{algorithm}: goal {} unreachable", grid.point_of(grid.goal())),
    }

    Ok(RunReport {
        algorithm,
        elapsed,
        stats: search.stats(),
        path,
    })
}

/// Print a report: heading, timing, summary and the rendered maze.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    grid: &Grid,
    renderer: &Renderer,
) -> Result<(), AppError> {
    writeln!(out, "{} Results:", report.algorithm)?;
    writeln!(
        out,
        "Time Taken: {:.5} seconds",
        report.elapsed.as_secs_f64()
    )?;
    match &report.path {
        Some(path) => writeln!(
            out,
            "Path cost: {} ({} cells), expanded {} nodes",
            path.cost(),
            path.len(),
            report.stats.expanded
        )?,
        None => writeln!(
            out,
            "No path found from {} to {} (expanded {} nodes)",
            grid.point_of(grid.start()),
            grid.point_of(grid.goal()),
            report.stats.expanded
        )?,
    }
    out.write_all(renderer.render(grid, report.path.as_ref()).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_text(report: &RunReport, grid: &Grid) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, grid, &Renderer::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_for_reachable_goal() {
        let grid = Grid::parse("S..\n.#.\n..E").unwrap();
        let graph = Graph::from_grid(&grid);
        let report = run_timed(Algorithm::AStar, &grid, &graph).unwrap();
        assert_eq!(report.path.as_ref().unwrap().cost(), 4.0);

        let text = report_text(&report, &grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "A* Algorithm Results:");
        let secs = lines[1]
            .strip_prefix("Time Taken: ")
            .and_then(|s| s.strip_suffix(" seconds"))
            .unwrap();
        assert_eq!(secs.split('.').nth(1).map(str::len), Some(5));
        assert!(lines[2].starts_with("Path cost: 4 (5 cells), expanded "));
        assert_eq!(lines.len(), 3 + 3);
        assert!(lines[3].starts_with('S'));
        assert!(lines[5].ends_with("E "));
    }

    #[test]
    fn report_for_unreachable_goal() {
        let grid = Grid::parse("S.#\n.#.\n#.E").unwrap();
        let graph = Graph::from_grid(&grid);
        let report = run_timed(Algorithm::Dijkstra, &grid, &graph).unwrap();
        assert!(report.path.is_none());
        assert_eq!(report.stats.expanded, 3);

        let text = report_text(&report, &grid);
        assert!(text.starts_with("Dijkstra's Algorithm Results:\n"));
        assert!(text.contains("No path found from (0, 0) to (2, 2)"));
        assert!(!text.contains('*'));
    }
}
