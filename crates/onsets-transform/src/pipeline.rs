//! Per-run onset-file generation.

use std::path::PathBuf;

use tracing::{info, warn};

use onsets_mat::write_mat;
use onsets_model::{DesignTable, ExtractionOptions};

use crate::conditions::resolve_conditions;
use crate::error::{PipelineError, Result};
use crate::extract::extract_run;
use crate::matdoc::run_document;
use crate::naming::{OutputNaming, absolute};

/// Generate one MAT-file per run from a loaded design table.
///
/// Conditions are resolved once for the whole table and runs are processed
/// sequentially in ascending run order. Every run is extracted (and so
/// policy-validated) before the first file is written: under a `raise`
/// policy a semantic error anywhere in the table aborts the invocation with
/// no output at all. Returns the absolute paths of the written files, in
/// run order.
pub fn generate_onset_files(
    table: &DesignTable,
    options: &ExtractionOptions,
    naming: &OutputNaming,
) -> Result<Vec<PathBuf>> {
    if table.is_empty() {
        warn!("design table has no trials, nothing to write");
        return Ok(Vec::new());
    }

    let conditions = resolve_conditions(table, &options.conditions);

    let mut prepared = Vec::new();
    for (run, trials) in table.runs() {
        let records = extract_run(table, run, &trials, &conditions, options)?;
        prepared.push((run, records));
    }

    let mut written = Vec::new();
    for (run, records) in prepared {
        let document = run_document(&records);
        let path = naming.path_for_run(run);
        write_mat(&path, &document).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            run,
            conditions = records.len(),
            path = %path.display(),
            "wrote onset file"
        );
        written.push(absolute(&path));
    }

    Ok(written)
}
