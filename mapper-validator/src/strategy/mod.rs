//! Validation source strategies.
//!
//! Only the filesystem source exists; `validate_dir()` calls it directly.

pub mod fs;
