//! Conversion command.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use onsets_ingest::{load_design, write_design_csv};
use onsets_model::{ColumnMap, ExtractionOptions, LoadOptions};
use onsets_transform::{OutputNaming, generate_onset_files};

use crate::cli::Cli;

/// Outcome of one conversion, for the summary printer.
pub struct ConvertResult {
    /// Total trials loaded across all inputs.
    pub trials: usize,
    /// Long-format design CSV, when requested.
    pub design_csv: Option<PathBuf>,
    /// One entry per written run file, in run order.
    pub runs: Vec<RunReport>,
}

/// One written run file.
pub struct RunReport {
    pub run: u32,
    pub trials: usize,
    pub path: PathBuf,
}

/// Load the design table, optionally export it, and write one MAT-file per
/// run.
pub fn run_convert(cli: &Cli) -> anyhow::Result<ConvertResult> {
    let load_options = LoadOptions {
        columns: ColumnMap {
            onset: cli.onset_col.clone(),
            duration: cli.duration_col.clone(),
            condition: cli.condition_col.clone(),
            run: cli.run_col.clone(),
            modulators: cli.pmods_col.clone(),
            drop_existing: cli.drop_cols,
        },
        pmod_name: cli.pmod_name.clone(),
    };

    let table = load_design(&cli.onsets_files, &load_options).context("load design files")?;
    info!(trials = table.len(), files = cli.onsets_files.len(), "loaded design table");

    if let Some(path) = &cli.design_csv {
        write_design_csv(&table, path)
            .with_context(|| format!("write design csv {}", path.display()))?;
        info!(path = %path.display(), "wrote long-format design table");
    }

    let extraction = ExtractionOptions {
        conditions: cli.conditions.clone(),
        short_condition: cli.short_condition.into(),
        nan: cli.nan.into(),
    };

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output directory {}", cli.out_dir.display()))?;
    let naming = OutputNaming::new(&cli.out_dir, &cli.out);
    let written = generate_onset_files(&table, &extraction, &naming)?;

    let runs = table
        .runs()
        .into_iter()
        .zip(written)
        .map(|((run, trials), path)| RunReport {
            run,
            trials: trials.len(),
            path,
        })
        .collect();

    Ok(ConvertResult {
        trials: table.len(),
        design_csv: cli.design_csv.clone(),
        runs,
    })
}
