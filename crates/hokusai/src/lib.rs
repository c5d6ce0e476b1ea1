//! # Hokusai
//!
//! Unified interface for the Hokusai presentation pipeline: submit
//! free-form natural-language input to an LLM behind the
//! [`TextGenerator`] seam, and receive a validated, strongly-typed
//! presentation where every slide conforms to one of a closed set of
//! layout patterns.
//!
//! ## Quick Start
//!
//! ```rust
//! use hokusai::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = PatternRegistry::standard()?;
//!
//!     let payload = r#"
//! title: "Getting started"
//! description: "How onboarding works"
//! slides:
//!   - slide_id: 1
//!     pattern_type: "linear_process"
//!     content:
//!       process_title: "Onboarding"
//!       steps:
//!         - step_number: 1
//!           step_title: "Sign up"
//!           description: "Create an account"
//!           details: []
//!       conclusion: "Three simple steps"
//! "#;
//!
//!     let composed = compose(payload, &registry).map_err(|e| e.into_error())?;
//!     let units = render_presentation(composed.presentation(), &registry);
//!     assert_eq!(units.len(), 1);
//!     Ok(())
//! }
//! ```

pub use hokusai_core::{
    Column, Element, GenerateRequest, GenerateResponse, Input, LinearProcessContent,
    LinearProcessStep, MediaSource, Message, Output, PaneContent, ParallelPane, PatternContent,
    PatternId, Presentation, PresentationUnit, Role, Slide, StepElement, UsageMetrics, limits,
};
pub use hokusai_error::{
    ComposeError, ComposeErrorKind, GenerateError, GenerateErrorKind, HokusaiError,
    HokusaiErrorKind, HokusaiResult, RegistryError, RegistryErrorKind, Violation, ViolationKind,
};
pub use hokusai_interface::{SlideRenderer, TextGenerator};
pub use hokusai_pattern::{
    Composed, ComposeRejection, ContentSchema, GenerationFailure, GenerationSession,
    LinearProcessRenderer, LinearProcessSchema, PatternRegistry, ThreePaneParallelRenderer,
    ThreePaneParallelSchema, TwoPaneComparisonRenderer, TwoPaneComparisonSchema, compose,
    parse_document, render_presentation, render_slide, strip_code_fence, validate_document,
};

/// Prelude module for convenient importing.
pub mod prelude {
    pub use crate::{
        Composed, ComposeError, ComposeErrorKind, ComposeRejection, GenerationFailure,
        GenerationSession, HokusaiError, HokusaiResult, PatternContent, PatternId,
        PatternRegistry, Presentation, PresentationUnit, Slide, SlideRenderer, TextGenerator,
        Violation, ViolationKind, compose, render_presentation, render_slide, strip_code_fence,
    };
}
