//! Error types for polypack.

use thiserror::Error;

/// Result type alias for polypack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building presents, spaces or solver configuration.
///
/// The feasibility search itself never fails: an infeasible space is a
/// normal `false` outcome, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid shape definition (empty, duplicated cells, outside the window).
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Invalid space definition.
    #[error("Invalid space: {0}")]
    InvalidSpace(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
