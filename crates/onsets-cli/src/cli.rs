//! CLI argument definitions for the onset converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use onsets_model::{NanPolicy, ShortConditionPolicy};

#[derive(Parser)]
#[command(
    name = "onsets2mat",
    version,
    about = "Convert tabular experimental-design files to per-run SPM onset MAT-files",
    long_about = "Convert tabular experimental-design files (CSV with a header row)\n\
                  into one 'multiple conditions' MAT-file per run, with names,\n\
                  onsets, durations and optional parametric modulators."
)]
pub struct Cli {
    /// Design/onset files to convert, one or more.
    #[arg(value_name = "ONSETS_FILE", required = true)]
    pub onsets_files: Vec<PathBuf>,

    /// Output stem; each run is written as <stem>_run<N>.mat.
    #[arg(long = "out", short = 'o', default_value = "onsets_", value_name = "STEM")]
    pub out: String,

    /// Output directory for the MAT-files (created if missing).
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Name given to the auto-detected value/amplitude column's modulator.
    #[arg(long = "pmod-name", default_value = "pmod", value_name = "NAME")]
    pub pmod_name: String,

    /// Explicit condition list; conditions are emitted in this order for
    /// every run, even when some have no trials in a run.
    #[arg(long = "conditions", short = 'c', num_args = 1.., value_name = "CONDITION")]
    pub conditions: Vec<String>,

    /// Header of the condition-label column.
    #[arg(long = "condition-col", value_name = "COLUMN")]
    pub condition_col: Option<String>,

    /// Header of the duration column.
    #[arg(long = "duration-col", value_name = "COLUMN")]
    pub duration_col: Option<String>,

    /// Header of the onset column.
    #[arg(long = "onset-col", value_name = "COLUMN")]
    pub onset_col: Option<String>,

    /// Headers of parametric-modulator columns.
    #[arg(long = "pmods-col", num_args = 1.., value_name = "COLUMN")]
    pub pmods_col: Vec<String>,

    /// Header of the run-number column.
    #[arg(long = "run-col", value_name = "COLUMN")]
    pub run_col: Option<String>,

    /// Drop pre-named canonical columns when an explicit mapping is given.
    #[arg(
        long = "drop-cols",
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub drop_cols: bool,

    /// Handling of an explicitly listed condition with no onsets in a run.
    #[arg(long = "short-condition", value_enum, default_value = "raise")]
    pub short_condition: ShortConditionArg,

    /// Handling of onset vectors containing NaN.
    #[arg(long = "nan", value_enum, default_value = "raise")]
    pub nan: NanArg,

    /// Also write the concatenated long-format design table to this path.
    #[arg(long = "design-csv", value_name = "PATH")]
    pub design_csv: Option<PathBuf>,
}

/// CLI short-condition policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ShortConditionArg {
    Raise,
    Remove,
    Ignore,
}

impl From<ShortConditionArg> for ShortConditionPolicy {
    fn from(arg: ShortConditionArg) -> Self {
        match arg {
            ShortConditionArg::Raise => Self::Raise,
            ShortConditionArg::Remove => Self::Remove,
            ShortConditionArg::Ignore => Self::Ignore,
        }
    }
}

/// CLI NaN policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum NanArg {
    Raise,
    Ignore,
}

impl From<NanArg> for NanPolicy {
    fn from(arg: NanArg) -> Self {
        match arg {
            NanArg::Raise => Self::Raise,
            NanArg::Ignore => Self::Ignore,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_conversion_flags() {
        let cli = Cli::parse_from([
            "onsets2mat",
            "block1.csv",
            "block2.csv",
            "--out",
            "localizer",
            "--onset-col",
            "StimOnset",
            "--condition-col",
            "TrialType",
            "--pmods-col",
            "RT",
            "--conditions",
            "face",
            "house",
            "--short-condition",
            "remove",
            "--drop-cols",
            "false",
        ]);
        assert_eq!(cli.onsets_files.len(), 2);
        assert_eq!(cli.out, "localizer");
        assert_eq!(cli.onset_col.as_deref(), Some("StimOnset"));
        assert_eq!(cli.pmods_col, vec!["RT".to_string()]);
        assert_eq!(cli.conditions, vec!["face".to_string(), "house".to_string()]);
        assert!(matches!(cli.short_condition, ShortConditionArg::Remove));
        assert!(!cli.drop_cols);
    }
}
