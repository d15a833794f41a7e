//! Error types for design-table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading design files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file could not be read or parsed as delimited text.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input file has no header row.
    #[error("{path} has no header row")]
    EmptyInput { path: PathBuf },

    /// A required or explicitly mapped column is missing.
    #[error("{path} is missing the {role} column '{name}'")]
    MissingColumn {
        path: PathBuf,
        role: &'static str,
        name: String,
    },

    /// A cell could not be parsed as a number.
    #[error("invalid {column} value '{value}' at {path} row {row}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    /// Input files resolved different modulator column sets.
    #[error("{path} resolves modulator columns [{found}], but earlier inputs resolved [{expected}]")]
    ModulatorMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// A run cell is empty or not a positive integer.
    #[error("invalid run number '{value}' at {path} row {row}")]
    InvalidRun {
        path: PathBuf,
        row: usize,
        value: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// Create a MissingColumn error.
    pub fn missing_column(
        path: impl Into<PathBuf>,
        role: &'static str,
        name: impl Into<String>,
    ) -> Self {
        Self::MissingColumn {
            path: path.into(),
            role,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = LoadError::missing_column("design.csv", "onset", "StimOnset");
        let message = format!("{err}");
        assert!(message.contains("design.csv"));
        assert!(message.contains("onset"));
        assert!(message.contains("StimOnset"));
    }
}
