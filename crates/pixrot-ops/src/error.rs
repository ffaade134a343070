//! Error types for rotation operations.

use thiserror::Error;

/// Error type for rotation operations.
///
/// Every variant aborts the pass before the output is considered valid.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffers have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// `filter()` was called before an input image was bound.
    #[error("no input image bound to the filter")]
    MissingInput,

    /// The pass was cancelled between rows.
    #[error("rotation pass cancelled")]
    Cancelled,

    /// Error from the core buffer types.
    #[error(transparent)]
    Core(#[from] pixrot_core::Error),
}

/// Result type for rotation operations.
pub type OpsResult<T> = Result<T, OpsError>;
