//! Output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`, plus the
//! matching renderings of a fatal `ValidatorError`.

use std::io::Write;

use crate::error::{FileErrorKind, ValidatorError};
use crate::report::{FileOutcome, FileResult, ValidationReport};

/// Banner printed before the per-file lines in human mode.
pub const HEADER: &str = "Validating YAML files...";

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable status lines to a writer.
///
/// The header is not included; see [`write_header`].
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for file in &report.files {
        write_file_line(file, writer)?;
    }

    writeln!(writer)?;
    if report.ok {
        writeln!(writer, "[SUCCESS] All YAML files are valid")?;
    } else {
        writeln!(writer, "[ERROR] Some YAML files have errors")?;
    }
    Ok(())
}

/// Write the banner and blank line that precede a human-mode run.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_header(writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "{HEADER}")?;
    writeln!(writer)?;
    Ok(())
}

fn write_file_line(file: &FileResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    match &file.outcome {
        FileOutcome::Valid => writeln!(writer, "[OK] {} is valid YAML", file.name)?,
        FileOutcome::Invalid(err) => match err.kind {
            FileErrorKind::NotFound => {
                writeln!(writer, "[ERROR] {} not found", file.path.display())?;
            }
            FileErrorKind::YamlSyntax => {
                writeln!(writer, "[ERROR] {} has YAML syntax errors:", file.name)?;
                writeln!(writer, "  {}", err.message)?;
            }
            FileErrorKind::Unreadable
            | FileErrorKind::FileTooLarge
            | FileErrorKind::InvalidEncoding => {
                writeln!(writer, "[ERROR] {} could not be read:", file.name)?;
                writeln!(writer, "  {}", err.message)?;
            }
        },
    }
    Ok(())
}

/// Format a fatal error as a single human-readable line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_fatal_human(err: &ValidatorError, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "[ERROR] {err}")?;
    Ok(())
}

/// Format a fatal error as a JSON object with `ok: false`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_fatal_json(err: &ValidatorError, writer: &mut dyn Write) -> anyhow::Result<()> {
    let value = serde_json::json!({
        "ok": false,
        "error": err.to_string(),
    });
    writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use std::path::PathBuf;

    fn file(name: &str, outcome: FileOutcome) -> FileResult {
        FileResult {
            path: PathBuf::from("mappers").join(name),
            name: name.to_owned(),
            outcome,
        }
    }

    fn render(report: &ValidationReport) -> String {
        let mut buf = Vec::new();
        write_human(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_all_valid() {
        let report = ValidationReport::new(
            PathBuf::from("mappers"),
            vec![file("a.yml", FileOutcome::Valid)],
        );
        assert_eq!(
            render(&report),
            "[OK] a.yml is valid YAML\n\n[SUCCESS] All YAML files are valid\n"
        );
    }

    #[test]
    fn test_human_syntax_error_has_indented_detail() {
        let report = ValidationReport::new(
            PathBuf::from("mappers"),
            vec![
                file("a.yml", FileOutcome::Valid),
                file(
                    "b.yml",
                    FileOutcome::Invalid(FileError::new(
                        FileErrorKind::YamlSyntax,
                        "unexpected end of stream",
                    )),
                ),
            ],
        );
        assert_eq!(
            render(&report),
            "[OK] a.yml is valid YAML\n\
             [ERROR] b.yml has YAML syntax errors:\n  unexpected end of stream\n\
             \n[ERROR] Some YAML files have errors\n"
        );
    }

    #[test]
    fn test_human_not_found_uses_full_path() {
        let report = ValidationReport::new(
            PathBuf::from("mappers"),
            vec![file(
                "gone.yml",
                FileOutcome::Invalid(FileError::new(FileErrorKind::NotFound, "gone")),
            )],
        );
        let expected = format!(
            "[ERROR] {} not found\n",
            PathBuf::from("mappers").join("gone.yml").display()
        );
        assert!(render(&report).starts_with(&expected));
    }

    #[test]
    fn test_human_empty_report() {
        let report = ValidationReport::new(PathBuf::from("mappers"), vec![]);
        assert_eq!(render(&report), "\n[SUCCESS] All YAML files are valid\n");
    }

    #[test]
    fn test_fatal_human_missing_directory() {
        let mut buf = Vec::new();
        write_fatal_human(
            &ValidatorError::MissingDirectory(PathBuf::from("mappers")),
            &mut buf,
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[ERROR] mappers not found\n");
    }

    #[test]
    fn test_json_report_shape() {
        let report = ValidationReport::new(
            PathBuf::from("mappers"),
            vec![file("a.yml", FileOutcome::Valid)],
        );
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["files"][0]["name"], "a.yml");
        assert_eq!(value["files"][0]["outcome"]["status"], "valid");
    }
}
