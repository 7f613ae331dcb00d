//! Configuration for a validation run.
//!
//! The library only knows about a directory, a file-name suffix and a read
//! limit. Where the directory comes from (executable location, CLI flag) is
//! decided by [`SourceConfig::beside_executable`] or by the caller.

use std::path::PathBuf;

use anyhow::Context;

/// Name of the directory holding the command mapper files, next to the executable.
pub const MAPPER_DIR_NAME: &str = "onboarding_command_mappers";

/// File-name suffix of the files that get validated.
pub const DEFAULT_EXTENSION: &str = ".yml";

/// Filesystem source options for [`crate::validate_dir`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SourceConfig {
    /// Directory whose direct entries are validated. Not searched recursively.
    pub dir: PathBuf,
    /// Case-sensitive suffix an entry name must end with (default: `.yml`).
    pub extension: String,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(MAPPER_DIR_NAME),
            extension: DEFAULT_EXTENSION.to_owned(),
            max_file_size: 10_485_760,
        }
    }
}

impl SourceConfig {
    /// Config targeting `dir`, with every other option at its default.
    #[must_use]
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Config targeting the mapper directory that sits next to the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable's path cannot be determined.
    pub fn beside_executable() -> anyhow::Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let base = exe
            .parent()
            .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);
        Ok(Self::for_dir(base.join(MAPPER_DIR_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_yml() {
        let cfg = SourceConfig::default();
        assert_eq!(cfg.extension, ".yml");
        assert_eq!(cfg.dir, PathBuf::from(MAPPER_DIR_NAME));
    }

    #[test]
    fn test_beside_executable_ends_with_mapper_dir() {
        let cfg = SourceConfig::beside_executable().unwrap();
        assert!(cfg.dir.ends_with(MAPPER_DIR_NAME));
        assert!(cfg.dir.is_absolute());
    }
}
