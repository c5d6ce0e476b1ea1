//! Trait seams between the Hokusai pipeline and its collaborators.
//!
//! The pipeline consumes exactly two external capabilities: a
//! generation service that turns prompts into candidate payload text,
//! and one renderer per pattern. Both are trait objects so callers can
//! swap implementations without touching the pipeline.

mod generator;
mod renderer;

pub use generator::TextGenerator;
pub use renderer::SlideRenderer;
