//! Core data types for the Hokusai presentation pipeline.
//!
//! This crate provides the foundation data types used across the
//! workspace: the closed pattern enumeration, the validated document
//! model, the UI-agnostic render tree, field bounds, and the message
//! vocabulary for the external generation service.

pub mod limits;

mod content;
mod generate;
mod pattern;
mod presentation;
mod unit;
mod usage;

pub use content::{
    LinearProcessContent, LinearProcessStep, PaneContent, ParallelPane, PatternContent,
    ThreePaneParallelContent, TwoPaneComparisonContent,
};
pub use generate::{GenerateRequest, GenerateResponse, Input, MediaSource, Message, Output, Role};
pub use pattern::PatternId;
pub use presentation::{Presentation, PresentationBuilder, Slide};
pub use unit::{Column, Element, PresentationUnit, StepElement};
pub use usage::UsageMetrics;
