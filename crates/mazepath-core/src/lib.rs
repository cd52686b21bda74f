//! **mazepath-core** — grid maze model.
//!
//! This crate provides the data types shared by the rest of *mazepath*: the
//! [`Point`] coordinate, the closed [`Terrain`] classification, and the
//! immutable [`Grid`] of [`Cell`]s with row-major [`CellId`]s.

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;

pub use error::GridError;
pub use geom::Point;
pub use grid::{Cell, CellId, Grid, MAX_SIDE};
pub use terrain::Terrain;
