//! Pipeline error composition.

use std::path::PathBuf;
use thiserror::Error;

use onsets_mat::MatError;
use onsets_model::DesignError;

/// Errors from the per-run onset pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Semantic validation failure (short condition, NaN onsets).
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Output file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: MatError,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
