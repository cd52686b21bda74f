//! Command-line flags.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use mazepath_gen::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WALL_CHANCE, GenConfig};

use crate::menu::Choice;
use crate::render::Renderer;

/// Default number of mazes tried by `--solvable`.
pub const DEFAULT_ATTEMPTS: usize = 100;

#[derive(Parser, Debug, Clone)]
#[clap(version, about, name = "mazepath")]
pub struct Args {
    #[clap(long, default_value_t = DEFAULT_ROWS, help = "Maze height in cells")]
    pub rows: usize,
    #[clap(long, default_value_t = DEFAULT_COLS, help = "Maze width in cells")]
    pub cols: usize,
    #[clap(
        short,
        long,
        default_value_t = DEFAULT_WALL_CHANCE,
        help = "Probability that a cell is a wall"
    )]
    pub wall_chance: f64,
    #[clap(short, long, help = "Seed for the maze generator (random if omitted)")]
    pub seed: Option<u64>,
    #[clap(short, long, value_enum, help = "Run this selection instead of showing the menu")]
    pub algorithm: Option<Choice>,
    #[clap(short, long, help = "Load the maze from a text layout instead of generating one")]
    pub layout: Option<PathBuf>,
    #[clap(long, action, help = "Regenerate until the goal is reachable")]
    pub solvable: bool,
    #[clap(long, default_value_t = DEFAULT_ATTEMPTS, help = "Attempts allowed for --solvable")]
    pub attempts: usize,
    #[clap(long, action, help = "Draw walls like open cells")]
    pub plain: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
    #[clap(short, long, action, conflicts_with = "verbose", help = "Disable logging")]
    pub quiet: bool,
}

impl Args {
    pub fn gen_config(&self) -> GenConfig {
        GenConfig {
            rows: self.rows,
            cols: self.cols,
            wall_chance: self.wall_chance,
        }
    }

    pub fn renderer(&self) -> Renderer {
        if self.plain {
            Renderer::plain()
        } else {
            Renderer::default()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Stderr logger filtered at [`Args::log_level`].
    pub fn logger(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(self.log_level())
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            });
        builder
    }
}
