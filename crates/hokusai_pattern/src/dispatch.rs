//! Renderer dispatch for validated slides.

use crate::registry::PatternRegistry;
use hokusai_core::{Element, Presentation, PresentationUnit, Slide};

/// Renders one validated slide via its registered renderer.
///
/// A pattern missing from the registry yields a clearly labeled
/// diagnostic unit instead of an error. Validation would have rejected
/// such a document, but render pipelines also run over cached or
/// foreign documents, and rendering must never crash a UI over stale
/// data.
#[tracing::instrument(skip_all, fields(slide_id = *slide.slide_id(), pattern = %slide.pattern()))]
pub fn render_slide(slide: &Slide, registry: &PatternRegistry) -> PresentationUnit {
    match registry.renderer_for(slide.pattern()) {
        Some(renderer) => {
            tracing::debug!(renderer = renderer.name(), "Dispatching slide");
            renderer.render(slide)
        }
        None => {
            tracing::warn!("No renderer registered, producing fallback view");
            fallback_unit(slide)
        }
    }
}

/// Renders every slide of a presentation in document order.
pub fn render_presentation(
    presentation: &Presentation,
    registry: &PatternRegistry,
) -> Vec<PresentationUnit> {
    presentation
        .slides()
        .iter()
        .map(|slide| render_slide(slide, registry))
        .collect()
}

/// Builds the diagnostic view for a slide with no registered renderer.
fn fallback_unit(slide: &Slide) -> PresentationUnit {
    let body = serde_yaml::to_string(slide.content())
        .unwrap_or_else(|_| "<content unavailable>".to_string());
    PresentationUnit::fallback_view(
        slide.pattern(),
        vec![Element::Diagnostic {
            label: format!("unregistered pattern '{}'", slide.pattern()),
            body,
        }],
    )
}
