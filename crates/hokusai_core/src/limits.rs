//! Field bounds for presentation content.
//!
//! All string bounds are inclusive maxima counted in Unicode scalar
//! values; all sequence bounds are inclusive.

/// Presentation title, at most 50 characters.
pub const PRESENTATION_TITLE_MAX: usize = 50;
/// Presentation description, at most 100 characters.
pub const PRESENTATION_DESCRIPTION_MAX: usize = 100;
/// A presentation carries at least one slide.
pub const SLIDES_MIN: usize = 1;
/// A presentation carries at most ten slides.
pub const SLIDES_MAX: usize = 10;

/// Two-pane comparison: pane title, at most 30 characters.
pub const PANE_TITLE_MAX: usize = 30;
/// Two-pane comparison: each pane point, at most 60 characters.
pub const PANE_POINT_MAX: usize = 60;
/// Two-pane comparison: a pane carries at least one point.
pub const PANE_POINTS_MIN: usize = 1;
/// Two-pane comparison: a pane carries at most four points.
pub const PANE_POINTS_MAX: usize = 4;
/// Two-pane comparison: closing summary, at most 120 characters.
pub const COMPARISON_MAX: usize = 120;

/// Three-pane parallel: main title, at most 40 characters.
pub const MAIN_TITLE_MAX: usize = 40;
/// Three-pane parallel: pane title, at most 25 characters.
pub const PARALLEL_PANE_TITLE_MAX: usize = 25;
/// Three-pane parallel: each pane point, at most 50 characters.
pub const PARALLEL_PANE_POINT_MAX: usize = 50;
/// Three-pane parallel: a pane carries at least one point.
pub const PARALLEL_PANE_POINTS_MIN: usize = 1;
/// Three-pane parallel: a pane carries at most three points.
pub const PARALLEL_PANE_POINTS_MAX: usize = 3;
/// Three-pane parallel: exactly three panes.
pub const PARALLEL_PANE_COUNT: usize = 3;
/// Three-pane parallel: closing summary, at most 100 characters.
pub const SUMMARY_MAX: usize = 100;

/// Linear process: process title, at most 40 characters.
pub const PROCESS_TITLE_MAX: usize = 40;
/// Linear process: at least one step.
pub const STEPS_MIN: usize = 1;
/// Linear process: step title, at most 30 characters.
pub const STEP_TITLE_MAX: usize = 30;
/// Linear process: step description, at most 80 characters.
pub const STEP_DESCRIPTION_MAX: usize = 80;
/// Linear process: each step detail, at most 60 characters.
pub const STEP_DETAIL_MAX: usize = 60;
/// Linear process: at most two details per step.
pub const STEP_DETAILS_MAX: usize = 2;
/// Linear process: closing conclusion, at most 120 characters.
pub const CONCLUSION_MAX: usize = 120;

/// Raw prompt text is truncated to this many characters before a
/// generation request is issued.
pub const PROMPT_MAX: usize = 5000;
/// Default per-session cap on generation requests.
pub const SESSION_REQUEST_LIMIT: u32 = 50;
