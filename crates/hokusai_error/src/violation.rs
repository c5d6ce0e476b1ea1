//! Field-level schema violation vocabulary.

use serde::{Deserialize, Serialize};

/// Categories of field-level schema violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Required field missing or null
    RequiredFieldMissing,
    /// Value has a different type than the schema expects
    WrongType,
    /// String exceeds its inclusive maximum length
    MaxLengthExceeded,
    /// Sequence length outside its inclusive bounds
    ArraySizeOutOfBounds,
    /// Number outside its allowed range
    NumberOutOfRange,
    /// Discriminator value not present in the pattern registry
    UnknownPattern,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::RequiredFieldMissing => write!(f, "required field missing"),
            ViolationKind::WrongType => write!(f, "wrong type"),
            ViolationKind::MaxLengthExceeded => write!(f, "max length exceeded"),
            ViolationKind::ArraySizeOutOfBounds => write!(f, "array size out of bounds"),
            ViolationKind::NumberOutOfRange => write!(f, "number out of range"),
            ViolationKind::UnknownPattern => write!(f, "unknown pattern"),
        }
    }
}

/// A single field-level schema failure.
///
/// Validation aggregates every violation in a document before returning,
/// so a caller always sees the complete diagnostic rather than the first
/// failing field.
///
/// # Examples
///
/// ```
/// use hokusai_error::{Violation, ViolationKind};
///
/// let violation = Violation::new(
///     "slides[0].content.comparison",
///     ViolationKind::MaxLengthExceeded,
///     "string is 130 characters, maximum is 120",
/// );
/// assert!(format!("{}", violation).contains("comparison"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the offending field, e.g. `slides[0].content.left_pane.content`
    pub path: String,
    /// Violation category
    pub kind: ViolationKind,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    /// Create a new violation at the given field path.
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.kind)
    }
}
