//! Format-specific checks.
//!
//! - `yaml`: single-document YAML well-formedness

pub mod yaml;
