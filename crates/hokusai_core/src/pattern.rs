//! Closed enumeration of slide layout patterns.

use serde::{Deserialize, Serialize};

/// The closed set of slide layout patterns.
///
/// Each pattern pairs a content schema with a renderer in the pattern
/// registry; this enumeration is the single source of truth for which
/// patterns exist. Adding a variant here forces every exhaustive match
/// in the registry and dispatcher to be extended before the workspace
/// compiles again.
///
/// # Examples
///
/// ```
/// use hokusai_core::PatternId;
/// use std::str::FromStr;
///
/// let id = PatternId::from_str("2pane_comparison").unwrap();
/// assert_eq!(id, PatternId::TwoPaneComparison);
/// assert_eq!(id.to_string(), "2pane_comparison");
///
/// assert!(PatternId::from_str("nonexistent_pattern").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum PatternId {
    /// Two panes compared side by side
    #[serde(rename = "2pane_comparison")]
    #[strum(serialize = "2pane_comparison")]
    TwoPaneComparison,
    /// Three parallel panes under a main title
    #[serde(rename = "3pane_parallel")]
    #[strum(serialize = "3pane_parallel")]
    ThreePaneParallel,
    /// An ordered step-by-step process
    #[serde(rename = "linear_process")]
    #[strum(serialize = "linear_process")]
    LinearProcess,
}
