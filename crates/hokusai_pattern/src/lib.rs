//! Pattern-typed content pipeline for Hokusai.
//!
//! Raw generator output flows through four stateless stages:
//!
//! 1. [`strip_code_fence`] removes an optional markdown fence wrapper.
//! 2. [`parse_document`] turns the text into a generic YAML value.
//! 3. [`validate_document`] checks the value against the per-pattern
//!    schemas selected by each slide's discriminator, aggregating every
//!    violation, and builds the typed [`Presentation`].
//! 4. [`render_slide`] dispatches each validated slide to the renderer
//!    registered for its pattern.
//!
//! [`compose`] wires the first three stages together;
//! [`GenerationSession`] adds the asynchronous generation call in
//! front.
//!
//! [`Presentation`]: hokusai_core::Presentation

mod compose;
mod dispatch;
mod normalize;
mod parse;
mod registry;
mod render;
mod schema;
mod validate;

pub use compose::{Composed, ComposeRejection, GenerationFailure, GenerationSession, compose};
pub use dispatch::{render_presentation, render_slide};
pub use normalize::strip_code_fence;
pub use parse::parse_document;
pub use registry::PatternRegistry;
pub use render::{LinearProcessRenderer, ThreePaneParallelRenderer, TwoPaneComparisonRenderer};
pub use schema::{
    ContentSchema, LinearProcessSchema, ThreePaneParallelSchema, TwoPaneComparisonSchema,
};
pub use validate::validate_document;
