//! Error types for the registry crate.
//!
//! Only one query can fail against an in-memory registry: asking for the
//! cast of a movie that was never released. The remaining variants come from
//! seeding a registry out of a credits file.

use crate::types::Movie;
use thiserror::Error;

/// Errors that can occur when querying or seeding a [`Registry`](crate::Registry)
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The movie is not a key in the registry.
    ///
    /// This is distinct from a movie that was released with an empty cast,
    /// which is a successful query returning an empty set.
    #[error("Movie is not released: {0}")]
    MovieNotFound(Movie),

    /// Credits file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a credits file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a credits file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RegistryError>;
