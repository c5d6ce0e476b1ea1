//! Built-in renderers for the standard patterns.
//!
//! Each renderer turns its pattern's typed content into a
//! [`PresentationUnit`] element tree. Layout, theming, and pixels are a
//! target-UI concern and never appear here.

use hokusai_core::{
    Column, Element, PatternContent, PatternId, PresentationUnit, Slide, StepElement,
};
use hokusai_interface::SlideRenderer;

/// Renderer for the two-pane comparison pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPaneComparisonRenderer;

impl SlideRenderer for TwoPaneComparisonRenderer {
    fn pattern(&self) -> PatternId {
        PatternId::TwoPaneComparison
    }

    fn render(&self, slide: &Slide) -> PresentationUnit {
        match slide.content() {
            PatternContent::TwoPaneComparison(content) => PresentationUnit::rendered(
                self.pattern(),
                vec![
                    Element::Columns(vec![
                        Column::new(
                            content.left_pane().pane_title().clone(),
                            content.left_pane().content().clone(),
                        ),
                        Column::new(
                            content.right_pane().pane_title().clone(),
                            content.right_pane().content().clone(),
                        ),
                    ]),
                    Element::Callout(content.comparison().clone()),
                ],
            ),
            other => mismatched_content(self.name(), self.pattern(), other),
        }
    }

    fn name(&self) -> &str {
        "TwoPaneComparisonRenderer"
    }
}

/// Renderer for the three-pane parallel pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreePaneParallelRenderer;

impl SlideRenderer for ThreePaneParallelRenderer {
    fn pattern(&self) -> PatternId {
        PatternId::ThreePaneParallel
    }

    fn render(&self, slide: &Slide) -> PresentationUnit {
        match slide.content() {
            PatternContent::ThreePaneParallel(content) => {
                let columns = content
                    .panes()
                    .iter()
                    .map(|pane| Column::new(pane.pane_title().clone(), pane.content().clone()))
                    .collect();
                PresentationUnit::rendered(
                    self.pattern(),
                    vec![
                        Element::Title(content.main_title().clone()),
                        Element::Columns(columns),
                        Element::Callout(content.summary().clone()),
                    ],
                )
            }
            other => mismatched_content(self.name(), self.pattern(), other),
        }
    }

    fn name(&self) -> &str {
        "ThreePaneParallelRenderer"
    }
}

/// Renderer for the linear process pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProcessRenderer;

impl SlideRenderer for LinearProcessRenderer {
    fn pattern(&self) -> PatternId {
        PatternId::LinearProcess
    }

    fn render(&self, slide: &Slide) -> PresentationUnit {
        match slide.content() {
            PatternContent::LinearProcess(content) => {
                let steps = content
                    .steps()
                    .iter()
                    .map(|step| {
                        StepElement::new(
                            *step.step_number(),
                            step.step_title().clone(),
                            step.description().clone(),
                            step.details().clone(),
                        )
                    })
                    .collect();
                PresentationUnit::rendered(
                    self.pattern(),
                    vec![
                        Element::Title(content.process_title().clone()),
                        Element::NumberedSteps(steps),
                        Element::Callout(content.conclusion().clone()),
                    ],
                )
            }
            other => mismatched_content(self.name(), self.pattern(), other),
        }
    }

    fn name(&self) -> &str {
        "LinearProcessRenderer"
    }
}

/// Diagnostic unit for content handed to the wrong renderer.
///
/// Unreachable after validation, but rendering must never panic over a
/// mis-wired registry.
fn mismatched_content(
    renderer: &str,
    expected: PatternId,
    content: &PatternContent,
) -> PresentationUnit {
    tracing::warn!(
        renderer,
        expected = %expected,
        actual = %content.pattern(),
        "Renderer received content for a different pattern"
    );
    let body = serde_yaml::to_string(content)
        .unwrap_or_else(|_| "<content unavailable>".to_string());
    PresentationUnit::fallback_view(
        content.pattern(),
        vec![Element::Diagnostic {
            label: format!(
                "renderer {renderer} expected pattern '{expected}', received '{}'",
                content.pattern()
            ),
            body,
        }],
    )
}
