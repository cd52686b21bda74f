//! Random maze generation for mazepath.

pub mod error;
pub mod mapgen;

pub use error::GenError;
pub use mapgen::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WALL_CHANCE, GenConfig, MazeGen};
