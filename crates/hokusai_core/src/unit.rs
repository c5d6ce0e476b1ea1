//! UI-agnostic render output model.
//!
//! Renderers produce a small serializable element tree rather than
//! pixels; how a target UI lays the tree out is outside the pipeline.

use crate::PatternId;
use serde::{Deserialize, Serialize};

/// One column of a multi-column element.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Column {
    /// Column heading
    heading: String,
    /// Bulleted points in display order
    bullets: Vec<String>,
}

impl Column {
    /// Creates a column with the given heading and bullets.
    pub fn new(heading: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            bullets,
        }
    }
}

/// One rendered step of an ordered process.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct StepElement {
    /// Step number as authored, starting at 1
    number: u32,
    /// Step heading
    heading: String,
    /// Step body text
    body: String,
    /// Supporting notes in display order
    notes: Vec<String>,
}

impl StepElement {
    /// Creates a rendered step.
    pub fn new(
        number: u32,
        heading: impl Into<String>,
        body: impl Into<String>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            number,
            heading: heading.into(),
            body: body.into(),
            notes,
        }
    }
}

/// A single element of a rendered slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Element {
    /// Slide-level heading
    Title(String),
    /// Free-running text
    Paragraph(String),
    /// Side-by-side columns
    Columns(Vec<Column>),
    /// Ordered process steps
    NumberedSteps(Vec<StepElement>),
    /// Emphasized closing remark (comparison, summary, conclusion)
    Callout(String),
    /// Diagnostic dump for content that could not be dispatched
    Diagnostic {
        /// What went wrong, including the raw pattern identifier
        label: String,
        /// Serialized dump of the undispatchable content
        body: String,
    },
}

/// A rendered slide as a UI-agnostic element tree.
///
/// # Examples
///
/// ```
/// use hokusai_core::{Element, PatternId, PresentationUnit};
///
/// let unit = PresentationUnit::rendered(
///     PatternId::LinearProcess,
///     vec![Element::Title("Onboarding".to_string())],
/// );
/// assert!(!*unit.fallback());
/// assert_eq!(unit.elements().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PresentationUnit {
    /// Pattern the slide was authored with
    pattern: PatternId,
    /// True when this unit is a diagnostic fallback view rather than the
    /// pattern's registered rendering
    fallback: bool,
    /// Ordered elements of the rendered slide
    elements: Vec<Element>,
}

impl PresentationUnit {
    /// Creates a unit produced by a registered renderer.
    pub fn rendered(pattern: PatternId, elements: Vec<Element>) -> Self {
        Self {
            pattern,
            fallback: false,
            elements,
        }
    }

    /// Creates a clearly labeled fallback unit for a slide whose pattern
    /// had no registered renderer.
    pub fn fallback_view(pattern: PatternId, elements: Vec<Element>) -> Self {
        Self {
            pattern,
            fallback: true,
            elements,
        }
    }
}
