//! Semantic validation errors for onset extraction.

use thiserror::Error;

/// Errors raised while turning a design table into onset records.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A mandatory condition has no onsets in a run.
    #[error("condition '{condition}' has no onsets in run {run} (from {filename})")]
    ShortCondition {
        condition: String,
        run: u32,
        filename: String,
    },

    /// A condition's onset vector contains NaN.
    #[error("onsets for condition '{condition}' in run {run} contain NaN (from {filename})")]
    NanOnsets {
        condition: String,
        run: u32,
        filename: String,
    },
}

/// Result type alias for design validation.
pub type Result<T> = std::result::Result<T, DesignError>;

impl DesignError {
    /// Create a ShortCondition error.
    pub fn short_condition(condition: impl Into<String>, run: u32, filename: impl Into<String>) -> Self {
        Self::ShortCondition {
            condition: condition.into(),
            run,
            filename: filename.into(),
        }
    }

    /// Create a NanOnsets error.
    pub fn nan_onsets(condition: impl Into<String>, run: u32, filename: impl Into<String>) -> Self {
        Self::NanOnsets {
            condition: condition.into(),
            run,
            filename: filename.into(),
        }
    }
}
