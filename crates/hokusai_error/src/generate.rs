//! Generation session error types.

/// Specific error conditions for a generation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerateErrorKind {
    /// Session request cap reached
    RequestLimitReached {
        /// The configured per-session request limit
        limit: u32,
    },
    /// Generator returned an empty payload
    EmptyResponse,
    /// Failure reported by the generation backend
    Backend(String),
}

impl std::fmt::Display for GenerateErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateErrorKind::RequestLimitReached { limit } => {
                write!(f, "session request limit of {limit} reached")
            }
            GenerateErrorKind::EmptyResponse => {
                write!(f, "generation service returned an empty payload")
            }
            GenerateErrorKind::Backend(msg) => write!(f, "generation backend failed: {msg}"),
        }
    }
}

/// Generation session error with source location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{GenerateError, GenerateErrorKind};
///
/// let err = GenerateError::new(GenerateErrorKind::RequestLimitReached { limit: 50 });
/// assert!(format!("{}", err).contains("50"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerateError {
    /// The specific error condition
    pub kind: GenerateErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// Source file where the error was created
    pub file: &'static str,
}

impl GenerateError {
    /// Create a new GenerateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generate Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerateError {}
