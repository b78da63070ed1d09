//! Persistence for the shoe inventory.
//!
//! # Data file
//!
//! A comma-separated UTF-8 file with a header row and one row per pair of
//! shoes:
//!
//! ```text
//! shoes_id,brand,model,category,color,size_eu,price_idr
//! NK-01,Nike,Mercurial,Football,Red,42,1500000
//! ```
//!
//! The file is the source of truth across restarts. It has no index and no
//! cross-process locking: every append rewrites the whole file, so two
//! processes writing at once can lose an update.

pub mod shoes;

use std::path::PathBuf;

use thiserror::Error;

pub use shoes::{COLUMNS, ShoeRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The data file does not exist.
    ///
    /// Callers loading the initial inventory treat this as an empty store.
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the data file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is malformed or a value does not parse.
    #[error("malformed data file: {0}")]
    Csv(#[from] csv::Error),
}

impl RepositoryError {
    /// Whether this error only means the data file is missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
