//! Structured parsing of normalized generator output.

use hokusai_error::{ComposeError, ComposeErrorKind};
use serde_yaml::Value;

/// Parses normalized text into a generic YAML value.
///
/// The top level must be a mapping; scalars and sequences are rejected
/// rather than coerced, since a presentation document is always an
/// object. Recovery from a parse failure belongs to the caller; the
/// parser reports the diagnostic and stops.
///
/// # Errors
///
/// * [`ComposeErrorKind::EmptyInput`] when the text is empty or
///   whitespace-only.
/// * [`ComposeErrorKind::Parse`] on a syntax error, carrying the parser
///   message and, when available, the offending line and column; also
///   when the top-level value is not a mapping.
#[tracing::instrument(skip_all, fields(len = text.len()))]
pub fn parse_document(text: &str) -> Result<Value, ComposeError> {
    if text.trim().is_empty() {
        return Err(ComposeError::new(ComposeErrorKind::EmptyInput));
    }

    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        let location = e.location();
        tracing::debug!(error = %e, "Payload failed to parse");
        ComposeError::new(ComposeErrorKind::Parse {
            message: e.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        })
    })?;

    if !value.is_mapping() {
        return Err(ComposeError::new(ComposeErrorKind::Parse {
            message: "top-level value is not a mapping".to_string(),
            line: None,
            column: None,
        }));
    }

    Ok(value)
}
