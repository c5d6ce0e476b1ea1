//! Per-pattern content schemas.
//!
//! Each pattern's schema checks field presence, types, inclusive length
//! bounds, and sequence bounds for that pattern's content shape.
//! Schemas append every violation they find to the caller's sink rather
//! than stopping at the first, so validation of a whole document yields
//! one complete diagnostic.

use hokusai_core::{PatternId, limits};
use hokusai_error::{Violation, ViolationKind};
use serde_yaml::Value;

/// Schema for one pattern's slide content.
pub trait ContentSchema: Send + Sync {
    /// The pattern this schema validates.
    fn pattern(&self) -> PatternId;

    /// Validates `content` at `path`, appending violations to `sink`.
    fn validate(&self, content: &Value, path: &str, sink: &mut Vec<Violation>);

    /// Returns a human-readable name for this schema.
    ///
    /// Used for logging and error messages.
    fn name(&self) -> &str;
}

/// Counts Unicode scalar values.
///
/// Length bounds are inclusive maxima over this count, not bytes or
/// UTF-16 code units.
pub(crate) fn count_scalars(text: &str) -> usize {
    text.chars().count()
}

/// YAML type name for diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Checks a required, bounded string field.
pub(crate) fn expect_string(
    value: Option<&Value>,
    path: &str,
    max: usize,
    sink: &mut Vec<Violation>,
) {
    match value {
        None | Some(Value::Null) => sink.push(Violation::new(
            path,
            ViolationKind::RequiredFieldMissing,
            "required field is missing",
        )),
        Some(Value::String(text)) => {
            let len = count_scalars(text);
            if len > max {
                sink.push(Violation::new(
                    path,
                    ViolationKind::MaxLengthExceeded,
                    format!("string is {len} characters, maximum is {max}"),
                ));
            }
        }
        Some(other) => sink.push(Violation::new(
            path,
            ViolationKind::WrongType,
            format!("expected a string, found {}", type_name(other)),
        )),
    }
}

/// Checks a required sequence of bounded strings.
pub(crate) fn expect_string_list(
    value: Option<&Value>,
    path: &str,
    min_items: usize,
    max_items: usize,
    item_max: usize,
    sink: &mut Vec<Violation>,
) {
    match value {
        None | Some(Value::Null) => sink.push(Violation::new(
            path,
            ViolationKind::RequiredFieldMissing,
            "required field is missing",
        )),
        Some(Value::Sequence(items)) => {
            if items.len() < min_items || items.len() > max_items {
                sink.push(Violation::new(
                    path,
                    ViolationKind::ArraySizeOutOfBounds,
                    format!(
                        "sequence has {} items, expected between {min_items} and {max_items}",
                        items.len()
                    ),
                ));
            }
            for (idx, item) in items.iter().enumerate() {
                expect_string(Some(item), &format!("{path}[{idx}]"), item_max, sink);
            }
        }
        Some(other) => sink.push(Violation::new(
            path,
            ViolationKind::WrongType,
            format!("expected a sequence, found {}", type_name(other)),
        )),
    }
}

/// Checks a required positive integer field.
pub(crate) fn expect_positive_integer(
    value: Option<&Value>,
    path: &str,
    sink: &mut Vec<Violation>,
) {
    match value {
        None | Some(Value::Null) => sink.push(Violation::new(
            path,
            ViolationKind::RequiredFieldMissing,
            "required field is missing",
        )),
        Some(Value::Number(number)) => match number.as_u64() {
            Some(n) if n >= 1 => {}
            _ => sink.push(Violation::new(
                path,
                ViolationKind::NumberOutOfRange,
                "expected a positive integer",
            )),
        },
        Some(other) => sink.push(Violation::new(
            path,
            ViolationKind::WrongType,
            format!("expected a number, found {}", type_name(other)),
        )),
    }
}

/// Checks a required mapping field, returning it for nested descent.
pub(crate) fn expect_mapping<'a>(
    value: Option<&'a Value>,
    path: &str,
    sink: &mut Vec<Violation>,
) -> Option<&'a Value> {
    match value {
        None | Some(Value::Null) => {
            sink.push(Violation::new(
                path,
                ViolationKind::RequiredFieldMissing,
                "required field is missing",
            ));
            None
        }
        Some(mapping @ Value::Mapping(_)) => Some(mapping),
        Some(other) => {
            sink.push(Violation::new(
                path,
                ViolationKind::WrongType,
                format!("expected a mapping, found {}", type_name(other)),
            ));
            None
        }
    }
}

/// Reports the value itself as a mapping, for positions where the
/// container is already in hand (slide entries, content bodies).
pub(crate) fn require_mapping<'a>(
    value: &'a Value,
    path: &str,
    sink: &mut Vec<Violation>,
) -> Option<&'a Value> {
    if value.is_mapping() {
        Some(value)
    } else {
        sink.push(Violation::new(
            path,
            ViolationKind::WrongType,
            format!("expected a mapping, found {}", type_name(value)),
        ));
        None
    }
}

/// Schema for the two-pane comparison pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPaneComparisonSchema;

impl ContentSchema for TwoPaneComparisonSchema {
    fn pattern(&self) -> PatternId {
        PatternId::TwoPaneComparison
    }

    fn validate(&self, content: &Value, path: &str, sink: &mut Vec<Violation>) {
        let Some(map) = require_mapping(content, path, sink) else {
            return;
        };
        for pane_key in ["left_pane", "right_pane"] {
            let pane_path = format!("{path}.{pane_key}");
            if let Some(pane) = expect_mapping(map.get(pane_key), &pane_path, sink) {
                expect_string(
                    pane.get("pane_title"),
                    &format!("{pane_path}.pane_title"),
                    limits::PANE_TITLE_MAX,
                    sink,
                );
                expect_string_list(
                    pane.get("content"),
                    &format!("{pane_path}.content"),
                    limits::PANE_POINTS_MIN,
                    limits::PANE_POINTS_MAX,
                    limits::PANE_POINT_MAX,
                    sink,
                );
            }
        }
        expect_string(
            map.get("comparison"),
            &format!("{path}.comparison"),
            limits::COMPARISON_MAX,
            sink,
        );
    }

    fn name(&self) -> &str {
        "TwoPaneComparisonSchema"
    }
}

/// Schema for the three-pane parallel pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreePaneParallelSchema;

impl ContentSchema for ThreePaneParallelSchema {
    fn pattern(&self) -> PatternId {
        PatternId::ThreePaneParallel
    }

    fn validate(&self, content: &Value, path: &str, sink: &mut Vec<Violation>) {
        let Some(map) = require_mapping(content, path, sink) else {
            return;
        };
        expect_string(
            map.get("main_title"),
            &format!("{path}.main_title"),
            limits::MAIN_TITLE_MAX,
            sink,
        );
        let panes_path = format!("{path}.panes");
        match map.get("panes") {
            None | Some(Value::Null) => sink.push(Violation::new(
                &panes_path,
                ViolationKind::RequiredFieldMissing,
                "required field is missing",
            )),
            Some(Value::Sequence(panes)) => {
                if panes.len() != limits::PARALLEL_PANE_COUNT {
                    sink.push(Violation::new(
                        &panes_path,
                        ViolationKind::ArraySizeOutOfBounds,
                        format!(
                            "sequence has {} panes, expected exactly {}",
                            panes.len(),
                            limits::PARALLEL_PANE_COUNT
                        ),
                    ));
                }
                // Every provided pane is still validated so the caller
                // sees all field problems alongside the count problem.
                for (idx, pane_value) in panes.iter().enumerate() {
                    let pane_path = format!("{panes_path}[{idx}]");
                    if let Some(pane) = require_mapping(pane_value, &pane_path, sink) {
                        expect_string(
                            pane.get("pane_title"),
                            &format!("{pane_path}.pane_title"),
                            limits::PARALLEL_PANE_TITLE_MAX,
                            sink,
                        );
                        expect_string_list(
                            pane.get("content"),
                            &format!("{pane_path}.content"),
                            limits::PARALLEL_PANE_POINTS_MIN,
                            limits::PARALLEL_PANE_POINTS_MAX,
                            limits::PARALLEL_PANE_POINT_MAX,
                            sink,
                        );
                    }
                }
            }
            Some(other) => sink.push(Violation::new(
                &panes_path,
                ViolationKind::WrongType,
                format!("expected a sequence, found {}", type_name(other)),
            )),
        }
        expect_string(
            map.get("summary"),
            &format!("{path}.summary"),
            limits::SUMMARY_MAX,
            sink,
        );
    }

    fn name(&self) -> &str {
        "ThreePaneParallelSchema"
    }
}

/// Schema for the linear process pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProcessSchema;

impl ContentSchema for LinearProcessSchema {
    fn pattern(&self) -> PatternId {
        PatternId::LinearProcess
    }

    fn validate(&self, content: &Value, path: &str, sink: &mut Vec<Violation>) {
        let Some(map) = require_mapping(content, path, sink) else {
            return;
        };
        expect_string(
            map.get("process_title"),
            &format!("{path}.process_title"),
            limits::PROCESS_TITLE_MAX,
            sink,
        );
        let steps_path = format!("{path}.steps");
        match map.get("steps") {
            None | Some(Value::Null) => sink.push(Violation::new(
                &steps_path,
                ViolationKind::RequiredFieldMissing,
                "required field is missing",
            )),
            Some(Value::Sequence(steps)) => {
                if steps.len() < limits::STEPS_MIN {
                    sink.push(Violation::new(
                        &steps_path,
                        ViolationKind::ArraySizeOutOfBounds,
                        "sequence is empty, expected at least one step",
                    ));
                }
                for (idx, step_value) in steps.iter().enumerate() {
                    let step_path = format!("{steps_path}[{idx}]");
                    if let Some(step) = require_mapping(step_value, &step_path, sink) {
                        expect_positive_integer(
                            step.get("step_number"),
                            &format!("{step_path}.step_number"),
                            sink,
                        );
                        expect_string(
                            step.get("step_title"),
                            &format!("{step_path}.step_title"),
                            limits::STEP_TITLE_MAX,
                            sink,
                        );
                        expect_string(
                            step.get("description"),
                            &format!("{step_path}.description"),
                            limits::STEP_DESCRIPTION_MAX,
                            sink,
                        );
                        expect_string_list(
                            step.get("details"),
                            &format!("{step_path}.details"),
                            0,
                            limits::STEP_DETAILS_MAX,
                            limits::STEP_DETAIL_MAX,
                            sink,
                        );
                    }
                }
            }
            Some(other) => sink.push(Violation::new(
                &steps_path,
                ViolationKind::WrongType,
                format!("expected a sequence, found {}", type_name(other)),
            )),
        }
        expect_string(
            map.get("conclusion"),
            &format!("{path}.conclusion"),
            limits::CONCLUSION_MAX,
            sink,
        );
    }

    fn name(&self) -> &str {
        "LinearProcessSchema"
    }
}
