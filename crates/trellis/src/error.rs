//! Error and result types.
//!
//! Errors arise only at the terminal boundary. The container core is total:
//! layout, drawing into a buffer, and entry mutation never fail - degenerate
//! input is clamped or skipped instead.

use std::io;

use thiserror::Error;

use crate::geom;

/// Result alias used throughout trellis.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by trellis.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A terminal backend operation failed.
    #[error("backend: {0}")]
    Backend(String),
    /// A geometry constraint was violated.
    #[error("geometry: {0}")]
    Geometry(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Backend(e.to_string())
    }
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Error::Geometry(e.to_string())
    }
}
