//! Error handling for LevelKit
//!
//! Provides error types for the two fallible corners of the subsystem:
//! - Grid errors (probe-grid planning)
//! - Height-map errors (load/save of measured samples)
//!
//! All error types use `thiserror` for ergonomic error handling. Probe-event
//! handling itself is infallible by design; bad input degrades data quality
//! instead of raising (see the data model's `Option` columns).

use thiserror::Error;

/// Grid planning error type
///
/// Represents errors detected while computing the ordered sequence of probe
/// targets from a rectangular region and step sizes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Step value would never advance toward the bound
    #[error("Invalid {axis} step {step}: step must be positive")]
    InvalidStep {
        /// The axis with the bad step ('X' or 'Y').
        axis: char,
        /// The offending step value.
        step: f64,
    },
}

/// Height-map store error type
///
/// Represents I/O faults at the load/save boundary. Malformed file content is
/// never an error here; short or unparsable lines degrade into absent fields
/// per the tolerant-parse policy.
#[derive(Error, Debug)]
pub enum HeightmapError {
    /// Failed to read the height-map file
    #[error("Failed to read height map {path}: {source}")]
    Read {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the height-map file
    #[error("Failed to write height map {path}: {source}")]
    Write {
        /// The path that could not be written.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Main error type for LevelKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid planning error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Height-map store error
    #[error(transparent)]
    Heightmap(#[from] HeightmapError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a grid planning error
    pub fn is_grid_error(&self) -> bool {
        matches!(self, Error::Grid(_))
    }

    /// Check if this is a height-map store error
    pub fn is_heightmap_error(&self) -> bool {
        matches!(self, Error::Heightmap(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
