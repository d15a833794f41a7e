//! Design-table ingestion.
//!
//! Turns one or more delimited design files into a typed
//! [`onsets_model::DesignTable`]: raw reading with header normalization,
//! one-shot column-role resolution, typed trial parsing, and long-format
//! re-export.

pub mod csv_table;
pub mod design_csv;
pub mod error;
pub mod loader;
pub mod schema;

pub use csv_table::{CsvTable, read_csv_table};
pub use design_csv::write_design_csv;
pub use error::{LoadError, Result};
pub use loader::load_design;
pub use schema::{ModulatorColumn, ResolvedSchema, resolve_schema};
