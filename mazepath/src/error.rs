use std::io;
use std::path::PathBuf;

use mazepath_core::GridError;
use mazepath_gen::GenError;
use mazepath_paths::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid menu selection \u{201c}{0}\u{201d}, expected 1, 2 or 3")]
    InvalidChoice(String),
    #[error("cannot read layout {path}: {source}")]
    Layout { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Gen(#[from] GenError),
    #[error(transparent)]
    Path(#[from] PathError),
}
