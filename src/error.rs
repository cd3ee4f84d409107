//! Error types for tree walking and artifact rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::OutputFormat;

/// Errors that can occur while walking a directory or writing artifacts.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A single output format failed to write. Never fatal to sibling
    /// formats; collected into a [`RenderReport`](crate::render::RenderReport).
    #[error("failed to write {format} output to {}: {source}", .path.display())]
    Write {
        format: OutputFormat,
        path: PathBuf,
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    /// Shorthand for a per-format write failure.
    pub fn write(format: OutputFormat, path: impl Into<PathBuf>, source: io::Error) -> Self {
        TreeError::Write {
            format,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for walker and renderer operations
pub type Result<T> = std::result::Result<T, TreeError>;
