//! The validated presentation document model.

use crate::{PatternContent, PatternId};
use serde::{Deserialize, Serialize};

/// A single validated slide.
///
/// The `pattern_type` discriminator and `content` body serialize as
/// sibling fields of the slide, matching the generator's wire shape.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Slide {
    /// Positive slide identifier, unique within the presentation
    slide_id: u32,
    /// Pattern-discriminated slide content
    #[serde(flatten)]
    content: PatternContent,
}

impl Slide {
    /// Creates a new slide from validated content.
    pub fn new(slide_id: u32, content: PatternContent) -> Self {
        Self { slide_id, content }
    }

    /// The pattern this slide renders with.
    pub fn pattern(&self) -> PatternId {
        self.content.pattern()
    }
}

/// A validated presentation document.
///
/// Constructed once per generation round and immutable afterward; a
/// presentation is never partially valid. Re-generation produces a
/// brand-new value rather than mutating this one.
///
/// # Examples
///
/// ```
/// use hokusai_core::{
///     LinearProcessContent, LinearProcessStep, PatternContent, Presentation, Slide,
/// };
///
/// let content = LinearProcessContent::new(
///     "Onboarding",
///     vec![LinearProcessStep::new(1, "Sign up", "Create an account", vec![])],
///     "Three simple steps",
/// );
/// let presentation = Presentation::new(
///     "Getting started",
///     "How onboarding works",
///     vec![Slide::new(1, PatternContent::LinearProcess(content))],
/// );
/// assert_eq!(presentation.slides().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Presentation {
    /// Presentation title, at most 50 characters
    title: String,
    /// Presentation description, at most 100 characters
    description: String,
    /// Ordered slides, between one and ten
    slides: Vec<Slide>,
}

impl Presentation {
    /// Creates a new presentation from validated parts.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        slides: Vec<Slide>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            slides,
        }
    }

    /// Returns a builder for constructing a Presentation.
    pub fn builder() -> PresentationBuilder {
        PresentationBuilder::default()
    }
}
