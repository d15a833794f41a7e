//! MAT-file (MATLAB Level 5 format) writer and reader.
//!
//! This crate serializes onset structures — ragged cell arrays and struct
//! arrays of double/char data — to the uncompressed little-endian Level 5
//! MAT-file layout consumed by SPM-style modeling tools, and parses the
//! same subset back for verification.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use onsets_mat::{MatDocument, MatValue, read_mat, write_mat};
//!
//! let mut doc = MatDocument::new();
//! doc.push(
//!     "names",
//!     MatValue::Cell(vec![MatValue::string("face"), MatValue::string("house")]),
//! );
//! doc.push(
//!     "onsets",
//!     MatValue::Cell(vec![
//!         MatValue::row(vec![1.0, 3.0, 5.0]),
//!         MatValue::row(vec![2.0, 4.0, 6.0]),
//!     ]),
//! );
//! write_mat(Path::new("design_run1.mat"), &doc).unwrap();
//!
//! let round = read_mat(Path::new("design_run1.mat")).unwrap();
//! assert!(round.get("names").is_some());
//! ```
//!
//! 1-D numeric data is written in row orientation (1 x N); empty arrays are
//! 0 x 0. Compressed elements and big-endian files are rejected on read.

mod error;
pub mod header;
mod reader;
mod types;
mod writer;

pub use error::{MatError, Result};
pub use reader::{MatReader, read_mat};
pub use types::{
    MAX_FIELD_NAME_LEN, MAX_NAME_LEN, MatDocument, MatStruct, MatValue, MatVariable,
    MatWriterOptions,
};
pub use writer::{MatWriter, write_mat, write_mat_with_options};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
