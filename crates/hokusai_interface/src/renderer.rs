//! Slide renderer trait.

use hokusai_core::{PatternId, PresentationUnit, Slide};

/// Trait for per-pattern slide renderers.
///
/// A renderer converts one validated slide into a UI-agnostic
/// [`PresentationUnit`]. Exactly one renderer is registered per pattern
/// in the pattern registry; rendering must never fail, so a renderer
/// handed content it does not recognize produces a diagnostic unit
/// rather than panicking or returning an error.
pub trait SlideRenderer: Send + Sync {
    /// The pattern this renderer is registered for.
    fn pattern(&self) -> PatternId;

    /// Renders a validated slide into an element tree.
    fn render(&self, slide: &Slide) -> PresentationUnit;

    /// Returns a human-readable name for this renderer.
    ///
    /// Used for logging and error messages.
    fn name(&self) -> &str;
}
