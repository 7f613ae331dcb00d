//! Filesystem validation source.
//!
//! Lists the mapper directory and reads candidate files for the validation
//! pipeline. Only direct entries are considered; the directory is never
//! descended into.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::SourceConfig;
use crate::error::{FileError, FileErrorKind, ValidatorError};

/// Check if an entry name carries the configured suffix.
///
/// Case-sensitive, exact suffix match. Non-UTF-8 names never match.
#[must_use]
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|name| name.ends_with(extension))
}

/// Find all entries of `config.dir` whose name ends with `config.extension`.
///
/// Entries are returned in listing order. Subdirectories with a matching name
/// are returned too, so they surface as unreadable files instead of being
/// silently skipped.
///
/// # Errors
///
/// Returns `MissingDirectory` if the directory does not exist, `NotADirectory`
/// if it is something else, and `ReadDirectory` if it cannot be listed.
pub fn find_files(config: &SourceConfig) -> Result<Vec<PathBuf>, ValidatorError> {
    let root = &config.dir;
    if !root.exists() {
        return Err(ValidatorError::MissingDirectory(root.clone()));
    }
    if !root.is_dir() {
        return Err(ValidatorError::NotADirectory(root.clone()));
    }

    let mut files = Vec::new();
    for entry_result in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = entry_result.map_err(|source| ValidatorError::ReadDirectory {
            path: root.clone(),
            source,
        })?;

        if matches_extension(entry.path(), &config.extension) {
            files.push(entry.into_path());
        } else {
            tracing::debug!(path = %entry.path().display(), "skipping entry without matching extension");
        }
    }

    Ok(files)
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// The handle is dropped before this function returns, whatever the outcome.
///
/// # Errors
///
/// Returns a `FileError` if the file is gone (`NotFound`), cannot be opened or
/// read (`Unreadable`), exceeds `max_file_size` (`FileTooLarge`) or is not valid
/// UTF-8 (`InvalidEncoding`).
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, FileError> {
    let file = std::fs::File::open(path).map_err(|e| io_error(path, &e, "open"))?;

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| io_error(path, &e, "read"))?;

    if buffer.len() as u64 > max_file_size {
        return Err(FileError::new(
            FileErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer)
        .map_err(|_| FileError::new(FileErrorKind::InvalidEncoding, "File is not valid UTF-8"))
}

fn io_error(path: &Path, err: &io::Error, action: &str) -> FileError {
    if err.kind() == io::ErrorKind::NotFound {
        FileError::new(FileErrorKind::NotFound, format!("{} not found", path.display()))
    } else {
        FileError::new(
            FileErrorKind::Unreadable,
            format!("Failed to {action} file: {err}"),
        )
    }
}
