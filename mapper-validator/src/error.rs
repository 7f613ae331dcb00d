//! Error types for mapper validation.

use std::path::PathBuf;

use serde::Serialize;

/// A directory-level failure that aborts the run before any file is validated.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The target directory does not exist.
    #[error("{} not found", .0.display())]
    MissingDirectory(PathBuf),
    /// The target path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// The target directory could not be listed.
    #[error("Failed to list {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// The kind of failure that made a single file invalid.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum FileErrorKind {
    /// The file vanished between listing and opening.
    NotFound,
    /// Any other I/O failure (permission denied, entry is a directory, ...).
    Unreadable,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The file content is not well-formed YAML.
    YamlSyntax,
}

/// Why a single file failed validation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileError {
    /// The kind of failure.
    pub kind: FileErrorKind,
    /// Human-readable description; for `YamlSyntax` this is the parser message.
    pub message: String,
}

impl FileError {
    /// Build a file error of the given kind.
    #[must_use]
    pub fn new(kind: FileErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
