//! Pattern content variants for slides.

use crate::PatternId;
use serde::{Deserialize, Serialize};

/// One pane of a two-pane comparison.
///
/// # Examples
///
/// ```
/// use hokusai_core::PaneContent;
///
/// let pane = PaneContent::new("Strengths", vec!["Fast".to_string()]);
/// assert_eq!(pane.pane_title(), "Strengths");
/// assert_eq!(pane.content().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PaneContent {
    /// Pane heading, at most 30 characters
    pane_title: String,
    /// One to four points, at most 60 characters each
    content: Vec<String>,
}

impl PaneContent {
    /// Creates a new pane with the given heading and points.
    pub fn new(pane_title: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            pane_title: pane_title.into(),
            content,
        }
    }
}

/// Content of a two-pane comparison slide.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TwoPaneComparisonContent {
    /// Left-hand pane
    left_pane: PaneContent,
    /// Right-hand pane
    right_pane: PaneContent,
    /// Closing comparison, at most 120 characters
    comparison: String,
}

impl TwoPaneComparisonContent {
    /// Creates two-pane comparison content.
    pub fn new(left_pane: PaneContent, right_pane: PaneContent, comparison: impl Into<String>) -> Self {
        Self {
            left_pane,
            right_pane,
            comparison: comparison.into(),
        }
    }
}

/// One pane of a three-pane parallel slide.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ParallelPane {
    /// Pane heading, at most 25 characters
    pane_title: String,
    /// One to three points, at most 50 characters each
    content: Vec<String>,
}

impl ParallelPane {
    /// Creates a new parallel pane with the given heading and points.
    pub fn new(pane_title: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            pane_title: pane_title.into(),
            content,
        }
    }
}

/// Content of a three-pane parallel slide.
///
/// The pane count is fixed at three by the type itself rather than a
/// runtime check.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ThreePaneParallelContent {
    /// Main heading, at most 40 characters
    main_title: String,
    /// Exactly three parallel panes
    panes: [ParallelPane; 3],
    /// Closing summary, at most 100 characters
    summary: String,
}

impl ThreePaneParallelContent {
    /// Creates three-pane parallel content.
    pub fn new(
        main_title: impl Into<String>,
        panes: [ParallelPane; 3],
        summary: impl Into<String>,
    ) -> Self {
        Self {
            main_title: main_title.into(),
            panes,
            summary: summary.into(),
        }
    }
}

/// One step of a linear process slide.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct LinearProcessStep {
    /// Position in the process, starting at 1
    step_number: u32,
    /// Step heading, at most 30 characters
    step_title: String,
    /// Step body, at most 80 characters
    description: String,
    /// Zero to two supporting details, at most 60 characters each
    details: Vec<String>,
}

impl LinearProcessStep {
    /// Creates a new process step.
    pub fn new(
        step_number: u32,
        step_title: impl Into<String>,
        description: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            step_number,
            step_title: step_title.into(),
            description: description.into(),
            details,
        }
    }
}

/// Content of a linear process slide.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct LinearProcessContent {
    /// Process heading, at most 40 characters
    process_title: String,
    /// Ordered steps, at least one
    steps: Vec<LinearProcessStep>,
    /// Closing conclusion, at most 120 characters
    conclusion: String,
}

impl LinearProcessContent {
    /// Creates linear process content.
    pub fn new(
        process_title: impl Into<String>,
        steps: Vec<LinearProcessStep>,
        conclusion: impl Into<String>,
    ) -> Self {
        Self {
            process_title: process_title.into(),
            steps,
            conclusion: conclusion.into(),
        }
    }
}

/// Slide content discriminated by layout pattern.
///
/// The variant is fully determined by the slide's `pattern_type`
/// discriminator; a validated slide can never carry content shaped for a
/// different pattern. Serialized form uses the discriminator as the tag:
///
/// ```yaml
/// pattern_type: "linear_process"
/// content:
///   process_title: "..."
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From,
)]
#[serde(tag = "pattern_type", content = "content")]
pub enum PatternContent {
    /// Two panes compared side by side
    #[serde(rename = "2pane_comparison")]
    TwoPaneComparison(TwoPaneComparisonContent),
    /// Three parallel panes under a main title
    #[serde(rename = "3pane_parallel")]
    ThreePaneParallel(ThreePaneParallelContent),
    /// An ordered step-by-step process
    #[serde(rename = "linear_process")]
    LinearProcess(LinearProcessContent),
}

impl PatternContent {
    /// The pattern this content is shaped for.
    pub fn pattern(&self) -> PatternId {
        match self {
            PatternContent::TwoPaneComparison(_) => PatternId::TwoPaneComparison,
            PatternContent::ThreePaneParallel(_) => PatternId::ThreePaneParallel,
            PatternContent::LinearProcess(_) => PatternId::LinearProcess,
        }
    }
}
