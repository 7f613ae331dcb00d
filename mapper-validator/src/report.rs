//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::FileError;

/// Outcome of validating one file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
#[non_exhaustive]
pub enum FileOutcome {
    /// The file parsed as a single YAML document.
    Valid,
    /// The file could not be read or parsed.
    Invalid(FileError),
}

/// Result for a single enumerated file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileResult {
    /// Full path of the file.
    pub path: PathBuf,
    /// Base file name, as printed in status lines.
    pub name: String,
    /// Whether the file passed, and why not if it failed.
    pub outcome: FileOutcome,
}

impl FileResult {
    /// Whether the file is well-formed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, FileOutcome::Valid)
    }
}

/// Result of a validation run.
///
/// `files` is in directory listing order. Every entry with the target
/// extension appears exactly once.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Directory that was validated.
    pub dir: PathBuf,
    /// Whether every file is valid. True for an empty run.
    pub ok: bool,
    /// One entry per matching file.
    pub files: Vec<FileResult>,
}

impl ValidationReport {
    /// Build a report, deriving `ok` from the file outcomes.
    #[must_use]
    pub fn new(dir: PathBuf, files: Vec<FileResult>) -> Self {
        let ok = files.iter().all(FileResult::is_valid);
        Self { dir, ok, files }
    }

    /// Number of files that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_valid()).count()
    }
}
