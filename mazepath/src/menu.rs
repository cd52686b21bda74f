//! Console menu for picking which searches to run.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use mazepath_paths::Algorithm;

use crate::error::AppError;

pub const BANNER: &str = "\
------------------------------------------------------------------
|  GRAPH PATHFINDING PERFORMANCE                                 |
------------------------------------------------------------------
|     Choose Pathfinding Algorithm:                             |
|   1) Dijkstra's Algorithm                                     |
|   2) A* Algorithm                                             |
|   3) Compare Both                                             |
------------------------------------------------------------------
";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Choice {
    Dijkstra,
    #[value(name = "astar")]
    AStar,
    Both,
}

impl Choice {
    /// Parse a menu answer. Only the first non-whitespace character counts.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim_start().chars().next() {
            Some('1') => Ok(Choice::Dijkstra),
            Some('2') => Ok(Choice::AStar),
            Some('3') => Ok(Choice::Both),
            _ => Err(AppError::InvalidChoice(input.trim().to_string())),
        }
    }

    /// Searches to run, in display order.
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Choice::Dijkstra => &[Algorithm::Dijkstra],
            Choice::AStar => &[Algorithm::AStar],
            Choice::Both => &Algorithm::ALL,
        }
    }
}

/// Print the banner to `out` and read one answer line from `input`.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Choice, AppError> {
    out.write_all(BANNER.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Choice::parse(&line)
}
