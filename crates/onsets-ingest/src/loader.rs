//! Design-table loading.
//!
//! Reads one or more delimited design files, resolves column roles, parses
//! typed trials, and concatenates everything into one long-format
//! [`DesignTable`] tagged with run numbers and source-file provenance.

use std::path::{Path, PathBuf};

use tracing::debug;

use onsets_model::{DesignTable, LoadOptions, Trial};

use crate::csv_table::read_csv_table;
use crate::error::{LoadError, Result};
use crate::schema::resolve_schema;

/// Load and concatenate design files into one table.
///
/// Each file contributes its rows in order; files without a run column get
/// `run = file index + 1`. Modulator columns that end up entirely null are
/// pruned from the result.
pub fn load_design(paths: &[PathBuf], options: &LoadOptions) -> Result<DesignTable> {
    let mut table = DesignTable::default();
    for (file_index, path) in paths.iter().enumerate() {
        load_file(path, file_index, options, &mut table)?;
    }
    prune_empty_modulators(&mut table);
    Ok(table)
}

fn load_file(
    path: &Path,
    file_index: usize,
    options: &LoadOptions,
    table: &mut DesignTable,
) -> Result<()> {
    let raw = read_csv_table(path)?;
    let schema = resolve_schema(&raw.headers, options, path)?;

    // Modulator columns must agree across files; first file wins the list.
    let names: Vec<String> = schema.modulators.iter().map(|m| m.name.clone()).collect();
    if file_index == 0 {
        table.modulators = names;
    } else if table.modulators != names {
        return Err(LoadError::ModulatorMismatch {
            path: path.to_path_buf(),
            expected: table.modulators.join(", "),
            found: names.join(", "),
        });
    }

    let filename = path.display().to_string();
    let default_run = (file_index + 1) as u32;
    let mut dropped = 0usize;

    for (row_index, row) in raw.rows.iter().enumerate() {
        // Header is row 1; data rows are 1-based after it.
        let row_number = row_index + 2;

        let condition = row[schema.condition].clone();
        if condition.is_empty() {
            dropped += 1;
            continue;
        }

        let run = match schema.run {
            Some(index) => parse_run(&row[index], path, row_number)?,
            None => default_run,
        };
        let onset = parse_optional(&row[schema.onset], "onset", path, row_number)?;
        let duration = match schema.duration {
            Some(index) => parse_optional(&row[index], "duration", path, row_number)?,
            None => Some(0.0),
        };
        let mut values = Vec::with_capacity(schema.modulators.len());
        for modulator in &schema.modulators {
            values.push(parse_optional(
                &row[modulator.index],
                &modulator.name,
                path,
                row_number,
            )?);
        }

        table.trials.push(Trial {
            run,
            onset,
            duration,
            condition,
            values,
            filename: filename.clone(),
        });
    }

    if dropped > 0 {
        debug!(file = %filename, rows = dropped, "dropped rows without a condition label");
    }
    Ok(())
}

/// Parse a nullable numeric cell. Empty means null; `NaN` parses to IEEE NaN.
fn parse_optional(
    value: &str,
    column: &str,
    path: &Path,
    row: usize,
) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| LoadError::InvalidValue {
            path: path.to_path_buf(),
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Parse a run cell: a positive integer, or an integral float like `2.0`.
fn parse_run(value: &str, path: &Path, row: usize) -> Result<u32> {
    let invalid = || LoadError::InvalidRun {
        path: path.to_path_buf(),
        row,
        value: value.to_string(),
    };
    if value.is_empty() {
        return Err(invalid());
    }
    if let Ok(run) = value.parse::<u32>() {
        return Ok(run);
    }
    let float = value.parse::<f64>().map_err(|_| invalid())?;
    if float.fract() == 0.0 && float >= 0.0 && float <= f64::from(u32::MAX) {
        Ok(float as u32)
    } else {
        Err(invalid())
    }
}

/// Drop modulator columns with no data anywhere in the table.
fn prune_empty_modulators(table: &mut DesignTable) {
    let keep: Vec<bool> = (0..table.modulators.len())
        .map(|idx| {
            table
                .trials
                .iter()
                .any(|trial| trial.values.get(idx).copied().flatten().is_some())
        })
        .collect();
    if keep.iter().all(|&k| k) {
        return;
    }
    for (idx, kept) in keep.iter().enumerate() {
        if !kept {
            debug!(column = %table.modulators[idx], "dropped all-null modulator column");
        }
    }
    table.modulators = table
        .modulators
        .iter()
        .zip(&keep)
        .filter(|&(_, &k)| k)
        .map(|(name, _)| name.clone())
        .collect();
    for trial in &mut table.trials {
        trial.values = trial
            .values
            .iter()
            .zip(&keep)
            .filter(|&(_, &k)| k)
            .map(|(value, _)| *value)
            .collect();
    }
}
