//! Pattern registry integrity error types.

/// Integrity violations in the pattern registry.
///
/// These indicate a programming error, not a data error: every pattern
/// must be registered with both a schema and a renderer before any
/// document is processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryErrorKind {
    /// Pattern registered with a renderer but no content schema
    MissingSchema(String),
    /// Pattern registered with a schema but no renderer
    MissingRenderer(String),
}

impl std::fmt::Display for RegistryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryErrorKind::MissingSchema(pattern) => {
                write!(f, "pattern '{pattern}' has no registered content schema")
            }
            RegistryErrorKind::MissingRenderer(pattern) => {
                write!(f, "pattern '{pattern}' has no registered renderer")
            }
        }
    }
}

/// Registry integrity error with source location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{RegistryError, RegistryErrorKind};
///
/// let err = RegistryError::new(RegistryErrorKind::MissingRenderer(
///     "linear_process".to_string(),
/// ));
/// assert!(format!("{}", err).contains("linear_process"));
/// ```
#[derive(Debug, Clone)]
pub struct RegistryError {
    /// The specific error condition
    pub kind: RegistryErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// Source file where the error was created
    pub file: &'static str,
}

impl RegistryError {
    /// Create a new RegistryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RegistryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Registry Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for RegistryError {}
