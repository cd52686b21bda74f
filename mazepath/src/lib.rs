//! mazepath — compare Dijkstra and A* on a random grid maze.

pub mod app;
pub mod cli;
pub mod error;
pub mod menu;
pub mod render;
pub mod run;

pub use app::{build_grid, run};
pub use cli::Args;
pub use error::AppError;
pub use menu::Choice;
pub use render::{Glyphs, Renderer};
pub use run::{RunReport, run_timed, write_report};
