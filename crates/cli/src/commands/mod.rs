//! Subcommand implementations.

pub mod inventory;
pub mod report;

use thiserror::Error;

use shoe_inventory_core::DraftError;
use shoe_inventory_dashboard::storage::RepositoryError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing the data file failed.
    #[error("Data file error: {0}")]
    Repository(#[from] RepositoryError),

    /// The shoe given to `add` was rejected.
    #[error("Invalid shoe: {0}")]
    Draft(#[from] DraftError),
}
