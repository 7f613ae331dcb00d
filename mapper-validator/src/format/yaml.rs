//! YAML well-formedness check.
//!
//! Content is parsed into `IgnoredAny`: the full document is consumed so every
//! syntax error surfaces, but nothing is retained.

use serde::de::IgnoredAny;
use serde_saphyr::{DuplicateKeyPolicy, Options};

use crate::error::{FileError, FileErrorKind};

/// Whether `line` is the document marker `marker` (`---` or `...`), possibly
/// followed by inline content or a comment.
fn is_marker(line: &str, marker: &str) -> bool {
    line.strip_prefix(marker)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}

/// Count the documents in a stream, including explicit empty ones.
///
/// A column-0 `---` always opens a new document. Any other content opens one
/// only when no document is open (start of stream, or after `...`).
/// Blank lines, comments and directives never open a document.
fn count_documents(content: &str) -> usize {
    let mut documents = 0;
    let mut open = false;

    for line in content.trim_start_matches('\u{feff}').lines() {
        if is_marker(line, "---") {
            documents += 1;
            open = true;
        } else if is_marker(line, "...") {
            open = false;
        } else {
            let trimmed = line.trim();
            let ignorable = trimmed.is_empty()
                || trimmed.starts_with('#')
                || (!open && line.starts_with('%'));
            if !open && !ignorable {
                documents += 1;
                open = true;
            }
        }
    }

    documents
}

/// Check that `content` is a single well-formed YAML document.
///
/// An empty stream (empty file, or only comments) counts as one empty
/// document and is accepted. Repeated mapping keys are accepted; the last
/// value wins.
///
/// # Errors
///
/// Returns a `YamlSyntax` error carrying the parser message if the content is
/// malformed, or if the stream holds more than one document.
pub fn check_yaml_content(content: &str) -> Result<(), FileError> {
    let options = Options {
        duplicate_keys: DuplicateKeyPolicy::LastWins,
        ..Options::default()
    };
    serde_saphyr::from_multiple_with_options::<IgnoredAny>(content, options)
        .map_err(|e| FileError::new(FileErrorKind::YamlSyntax, e.to_string()))?;

    let documents = count_documents(content);
    if documents > 1 {
        return Err(FileError::new(
            FileErrorKind::YamlSyntax,
            format!("expected a single document in the stream, but found {documents}"),
        ));
    }

    Ok(())
}
