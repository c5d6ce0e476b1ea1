//! Error types for the Hokusai library.
//!
//! This crate provides the foundation error types used throughout the
//! Hokusai workspace: the compose pipeline taxonomy, the field-level
//! violation vocabulary, generation session failures, and registry
//! integrity errors.

mod compose;
mod generate;
mod registry;
mod violation;

pub use compose::{ComposeError, ComposeErrorKind};
pub use generate::{GenerateError, GenerateErrorKind};
pub use registry::{RegistryError, RegistryErrorKind};
pub use violation::{Violation, ViolationKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum HokusaiErrorKind {
    /// Compose pipeline error
    Compose(ComposeError),
    /// Generation session error
    Generate(GenerateError),
    /// Pattern registry integrity error
    Registry(RegistryError),
}

impl std::fmt::Display for HokusaiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HokusaiErrorKind::Compose(e) => write!(f, "{}", e),
            HokusaiErrorKind::Generate(e) => write!(f, "{}", e),
            HokusaiErrorKind::Registry(e) => write!(f, "{}", e),
        }
    }
}

/// Hokusai error with kind discrimination.
#[derive(Debug)]
pub struct HokusaiError(Box<HokusaiErrorKind>);

impl HokusaiError {
    /// Create a new error from a kind.
    pub fn new(kind: HokusaiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HokusaiErrorKind {
        &self.0
    }
}

impl std::fmt::Display for HokusaiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hokusai Error: {}", self.0)
    }
}

impl std::error::Error for HokusaiError {}

// Generic From implementation for any type that converts to HokusaiErrorKind
impl<T> From<T> for HokusaiError
where
    T: Into<HokusaiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hokusai operations.
pub type HokusaiResult<T> = std::result::Result<T, HokusaiError>;
