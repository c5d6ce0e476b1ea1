//! Compose pipeline error types.

use crate::{Violation, ViolationKind};

/// Specific error conditions for the compose pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeErrorKind {
    /// Normalized input is empty or whitespace-only
    EmptyInput,
    /// Structured-text syntax error, with the parser diagnostic
    Parse {
        /// Parser error message
        message: String,
        /// Line of the offending token, when the parser reports one
        line: Option<usize>,
        /// Column of the offending token, when the parser reports one
        column: Option<usize>,
    },
    /// One or more field-level schema violations, always the full list
    Schema(Vec<Violation>),
}

impl std::fmt::Display for ComposeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeErrorKind::EmptyInput => {
                write!(f, "input is empty after normalization")
            }
            ComposeErrorKind::Parse {
                message,
                line,
                column,
            } => match (line, column) {
                (Some(line), Some(column)) => {
                    write!(f, "parse failure at line {line}, column {column}: {message}")
                }
                _ => write!(f, "parse failure: {message}"),
            },
            ComposeErrorKind::Schema(violations) => {
                write!(f, "{} schema violation(s):", violations.len())?;
                for violation in violations {
                    write!(f, "\n  {violation}")?;
                }
                Ok(())
            }
        }
    }
}

/// Compose pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{ComposeError, ComposeErrorKind};
///
/// let err = ComposeError::new(ComposeErrorKind::EmptyInput);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone)]
pub struct ComposeError {
    /// The specific error condition
    pub kind: ComposeErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// Source file where the error was created
    pub file: &'static str,
}

impl ComposeError {
    /// Create a new ComposeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The aggregated violation list, empty unless this is a schema error.
    pub fn violations(&self) -> &[Violation] {
        match &self.kind {
            ComposeErrorKind::Schema(violations) => violations,
            _ => &[],
        }
    }

    /// True if any violation names a pattern absent from the registry.
    ///
    /// Callers branch on this to surface an "unsupported pattern" message
    /// instead of a raw validation dump.
    pub fn has_unknown_pattern(&self) -> bool {
        self.violations()
            .iter()
            .any(|v| v.kind == ViolationKind::UnknownPattern)
    }
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Compose Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ComposeError {}
