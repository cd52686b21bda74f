//! Ties the pieces together: obtain a maze, pick the searches, report.

use std::fs;
use std::io::{BufRead, Write};

use mazepath_core::Grid;
use mazepath_gen::MazeGen;
use mazepath_paths::Graph;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::cli::Args;
use crate::error::AppError;
use crate::menu::{self, Choice};
use crate::run::{RunReport, run_timed, write_report};

/// Load the maze from `--layout`, or generate one from the size flags.
pub fn build_grid(args: &Args) -> Result<Grid, AppError> {
    if let Some(path) = &args.layout {
        let text = fs::read_to_string(path).map_err(|source| AppError::Layout {
            path: path.clone(),
            source,
        })?;
        let grid = Grid::parse(&text)?;
        log::info!(
            "loaded {}x{} maze from {}",
            grid.rows(),
            grid.cols(),
            path.display()
        );
        return Ok(grid);
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("maze seed {seed}");
    let mut mg = MazeGen::new(args.gen_config(), StdRng::seed_from_u64(seed))?;
    if args.solvable {
        let (grid, attempts) = mg.generate_solvable(args.attempts)?;
        log::info!("solvable maze found after {attempts} attempt(s)");
        Ok(grid)
    } else {
        Ok(mg.generate()?)
    }
}

/// Run the whole program against the given input and output.
///
/// The menu is only shown when `--algorithm` is absent.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<RunReport>, AppError> {
    let grid = build_grid(args)?;
    let graph = Graph::from_grid(&grid);

    let choice = match args.algorithm {
        Some(choice) => choice,
        None => menu::prompt(input, out)?,
    };

    let renderer = args.renderer();
    let mut reports = Vec::new();
    for &algorithm in Choice::algorithms(choice) {
        let report = run_timed(algorithm, &grid, &graph)?;
        write_report(out, &report, &grid, &renderer)?;
        reports.push(report);
    }
    out.flush()?;
    Ok(reports)
}
