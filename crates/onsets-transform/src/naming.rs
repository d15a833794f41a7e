//! Output file naming.

use std::path::{Path, PathBuf};

/// Where output files go and what they are called.
///
/// A run's file is `<stem>_run<N>.mat`; a stem that already ends in a
/// separator (`_` or `-`) gets `run<N>.mat` appended directly, so the
/// classic `onsets_` prefix produces `onsets_run1.mat`.
#[derive(Debug, Clone)]
pub struct OutputNaming {
    pub directory: PathBuf,
    pub stem: String,
}

impl OutputNaming {
    /// Create a naming scheme.
    pub fn new(directory: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            stem: stem.into(),
        }
    }

    /// Output path for one run.
    #[must_use]
    pub fn path_for_run(&self, run: u32) -> PathBuf {
        let file = if self.stem.ends_with('_') || self.stem.ends_with('-') {
            format!("{}run{}.mat", self.stem, run)
        } else {
            format!("{}_run{}.mat", self.stem, run)
        };
        self.directory.join(file)
    }
}

/// Best-effort absolute form of a path.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
