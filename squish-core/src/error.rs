use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquishError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid root directory: {0}")]
    InvalidRoot(PathBuf),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SquishError>;
