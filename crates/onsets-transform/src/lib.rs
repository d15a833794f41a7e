//! Onset transformation: condition resolution, per-condition extraction,
//! and per-run MAT document assembly.
//!
//! The entry point for embedding is [`generate_onset_files`]: design table
//! in, one written MAT-file per run out. Every stage takes its
//! configuration as explicit arguments; there is no ambient state.

pub mod conditions;
pub mod error;
pub mod extract;
pub mod matdoc;
pub mod naming;
pub mod pipeline;

pub use conditions::resolve_conditions;
pub use error::{PipelineError, Result};
pub use extract::{condition_record, extract_run};
pub use matdoc::run_document;
pub use naming::OutputNaming;
pub use pipeline::generate_onset_files;
