//! Error types for MAT-file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing MAT-files.
#[derive(Debug, Error)]
pub enum MatError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid MAT-file structure.
    #[error("invalid MAT-file: {message}")]
    InvalidFormat { message: String },

    /// Big-endian files are not supported.
    #[error("big-endian MAT-files are not supported")]
    BigEndian,

    /// Compressed data elements are not supported.
    #[error("compressed MAT-file elements are not supported")]
    Compressed,

    /// Array class this reader does not handle.
    #[error("unsupported array class {class}")]
    UnsupportedClass { class: u8 },

    /// Storage type this reader does not handle.
    #[error("unsupported data type {mdtype} in {context}")]
    UnsupportedType { mdtype: u32, context: &'static str },

    /// Variable name is not a valid MATLAB identifier.
    #[error("variable name '{name}' is not a valid MATLAB identifier (ASCII letter start, alphanumeric/underscore, max 63 chars)")]
    InvalidVariableName { name: String },

    /// Struct field name exceeds the 31-character format limit.
    #[error("struct field name '{name}' exceeds 31 characters")]
    FieldNameTooLong { name: String },

    /// Struct record arity does not match the field list.
    #[error("struct record has {actual} values, expected {expected}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// Numeric data length does not match the declared dimensions.
    #[error("array '{name}' has {actual} values for {rows}x{cols} dimensions")]
    DimensionMismatch {
        name: String,
        rows: usize,
        cols: usize,
        actual: usize,
    },

    /// Element extends past the end of the file.
    #[error("element out of bounds at offset {offset}")]
    OutOfBounds { offset: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MAT-file operations.
pub type Result<T> = std::result::Result<T, MatError>;

impl MatError {
    /// Create an InvalidFormat error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an InvalidVariableName error.
    pub fn invalid_variable_name(name: impl Into<String>) -> Self {
        Self::InvalidVariableName { name: name.into() }
    }

    /// Create a FieldNameTooLong error.
    pub fn field_name_too_long(name: impl Into<String>) -> Self {
        Self::FieldNameTooLong { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatError::invalid_format("truncated header");
        assert_eq!(format!("{err}"), "invalid MAT-file: truncated header");

        let err = MatError::UnsupportedClass { class: 5 };
        assert_eq!(format!("{err}"), "unsupported array class 5");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let mat_err: MatError = io_err.into();
        assert!(matches!(mat_err, MatError::Io(_)));
    }
}
