//! # mapper-validator
//!
//! YAML syntax validator for onboarding command mapper files.
//!
//! Every `.yml` entry directly inside a directory is parsed. Only syntactic
//! well-formedness is checked; parsed content is discarded. A broken file
//! never stops its siblings from being checked.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mapper_validator::{SourceConfig, validate_dir};
//!
//! let config = SourceConfig::for_dir("onboarding_command_mappers");
//! let report = validate_dir(&config).unwrap();
//! println!("Files checked: {}", report.files.len());
//! println!("Files failed: {}", report.failed_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod format;
pub mod output;
mod report;
mod strategy;

pub use config::{DEFAULT_EXTENSION, MAPPER_DIR_NAME, SourceConfig};
pub use error::{FileError, FileErrorKind, ValidatorError};
pub use report::{FileOutcome, FileResult, ValidationReport};

use std::path::{Path, PathBuf};

use strategy::fs::{find_files, read_file_bounded};

/// Validate every matching file in `config.dir`.
///
/// Files are processed sequentially in listing order. Per-file failures are
/// recorded in the report and never abort the run.
///
/// # Errors
///
/// Returns an error if the directory does not exist, is not a directory, or
/// cannot be listed. No file is read in that case.
pub fn validate_dir(config: &SourceConfig) -> Result<ValidationReport, ValidatorError> {
    let files = find_files(config)?;
    tracing::info!(
        dir = %config.dir.display(),
        count = files.len(),
        "validating mapper files"
    );

    let results = files
        .into_iter()
        .map(|path| validate_file(path, config.max_file_size))
        .collect();

    Ok(ValidationReport::new(config.dir.clone(), results))
}

/// Validate a single file: bounded read, then YAML parse.
fn validate_file(path: PathBuf, max_file_size: u64) -> FileResult {
    let outcome = match check_file(&path, max_file_size) {
        Ok(()) => FileOutcome::Valid,
        Err(err) => {
            tracing::debug!(path = %path.display(), kind = ?err.kind, "{}", err.message);
            FileOutcome::Invalid(err)
        }
    };

    let name = path
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());

    FileResult {
        path,
        name,
        outcome,
    }
}

fn check_file(path: &Path, max_file_size: u64) -> Result<(), FileError> {
    let content = read_file_bounded(path, max_file_size)?;
    format::yaml::check_yaml_content(&content)
}
