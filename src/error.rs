// ABOUTME: Application-wide error types for coco.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("container engine not found on PATH: {0}")]
    MissingEngine(#[from] which::Error),

    #[error("no compose file found in {0}")]
    ComposeNotFound(PathBuf),

    #[error("compose resolution failed: {0}")]
    Resolution(String),

    #[error("invalid compose document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("images file not found: {0}")]
    ImageListNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
