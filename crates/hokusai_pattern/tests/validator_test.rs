//! Tests for document validation.

use hokusai_core::PatternContent;
use hokusai_error::ViolationKind;
use hokusai_pattern::{PatternRegistry, parse_document, validate_document};

fn registry() -> PatternRegistry {
    PatternRegistry::standard().expect("standard registry")
}

fn validate(yaml: &str) -> Result<hokusai_core::Presentation, Vec<hokusai_error::Violation>> {
    let value = parse_document(yaml).expect("document should parse");
    validate_document(&value, &registry())
}

const VALID_TWO_PANE: &str = r#"
title: "Trains vs planes"
description: "Comparing two ways to travel"
slides:
  - slide_id: 1
    pattern_type: "2pane_comparison"
    content:
      left_pane:
        pane_title: "Trains"
        content: ["City centre to city centre", "Low emissions"]
      right_pane:
        pane_title: "Planes"
        content: ["Fastest over long distances"]
      comparison: "Trains win under four hours of travel time"
"#;

const VALID_THREE_PANE: &str = r#"
title: "Product phases"
description: "Three phases in parallel"
slides:
  - slide_id: 1
    pattern_type: "3pane_parallel"
    content:
      main_title: "Delivery phases"
      panes:
        - pane_title: "Discover"
          content: ["Interviews", "Market sizing"]
        - pane_title: "Build"
          content: ["Prototype"]
        - pane_title: "Launch"
          content: ["Beta rollout", "Pricing"]
      summary: "Each phase feeds the next"
"#;

const VALID_LINEAR: &str = r#"
title: "Onboarding"
description: "How onboarding works"
slides:
  - slide_id: 1
    pattern_type: "linear_process"
    content:
      process_title: "Account onboarding"
      steps:
        - step_number: 1
          step_title: "Sign up"
          description: "Create an account with an email address"
          details: ["Takes two minutes"]
        - step_number: 2
          step_title: "Verify"
          description: "Confirm the address"
          details: []
      conclusion: "Most users finish in under five minutes"
"#;

#[test]
fn test_valid_two_pane_document() {
    let presentation = validate(VALID_TWO_PANE).expect("document should validate");
    assert_eq!(presentation.title(), "Trains vs planes");
    assert_eq!(presentation.slides().len(), 1);
    match presentation.slides()[0].content() {
        PatternContent::TwoPaneComparison(content) => {
            assert_eq!(content.left_pane().pane_title(), "Trains");
            assert_eq!(content.right_pane().content().len(), 1);
        }
        other => panic!("expected two-pane content, got {:?}", other),
    }
}

#[test]
fn test_valid_three_pane_document() {
    let presentation = validate(VALID_THREE_PANE).expect("document should validate");
    match presentation.slides()[0].content() {
        PatternContent::ThreePaneParallel(content) => {
            assert_eq!(content.panes().len(), 3);
            assert_eq!(content.panes()[1].pane_title(), "Build");
        }
        other => panic!("expected three-pane content, got {:?}", other),
    }
}

#[test]
fn test_valid_linear_process_document() {
    let presentation = validate(VALID_LINEAR).expect("document should validate");
    match presentation.slides()[0].content() {
        PatternContent::LinearProcess(content) => {
            assert_eq!(content.steps().len(), 2);
            assert_eq!(*content.steps()[0].step_number(), 1);
            assert!(content.steps()[1].details().is_empty());
        }
        other => panic!("expected linear process content, got {:?}", other),
    }
}

#[test]
fn test_presentation_envelope_unwrapped() {
    let wrapped = format!(
        "presentation:\n{}",
        VALID_LINEAR
            .trim_start_matches('\n')
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    let presentation = validate(&wrapped).expect("wrapped document should validate");
    assert_eq!(presentation.slides().len(), 1);
}

#[test]
fn test_oversized_pane_and_title_report_exactly_two_violations() {
    let yaml = r#"
title: "Trains vs planes"
description: "Comparing two ways to travel"
slides:
  - slide_id: 1
    pattern_type: "2pane_comparison"
    content:
      left_pane:
        pane_title: "Trains"
        content: ["One", "Two", "Three", "Four", "Five"]
      right_pane:
        pane_title: "abcdefghijklmnopqrstuvwxyzabcde"
        content: ["Fastest over long distances"]
      comparison: "Trains win under four hours of travel time"
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert_eq!(violations.len(), 2, "violations: {:?}", violations);

    let pane_size = &violations[0];
    assert_eq!(pane_size.path, "slides[0].content.left_pane.content");
    assert_eq!(pane_size.kind, ViolationKind::ArraySizeOutOfBounds);

    let title_len = &violations[1];
    assert_eq!(title_len.path, "slides[0].content.right_pane.pane_title");
    assert_eq!(title_len.kind, ViolationKind::MaxLengthExceeded);
}

#[test]
fn test_all_errors_reported_across_independent_fields() {
    let long_title = "t".repeat(51);
    let yaml = format!(
        r#"
title: "{long_title}"
description: "Comparing two ways to travel"
slides:
  - slide_id: 1
    pattern_type: "2pane_comparison"
    content:
      left_pane:
        pane_title: "Trains"
        content: ["One", "Two", "Three", "Four", "Five"]
      right_pane:
        pane_title: "Planes"
        content: ["Fastest"]
      comparison: "Short"
  - slide_id: 2
    pattern_type: "nonexistent_pattern"
    content:
      anything: true
"#
    );
    let violations = validate(&yaml).expect_err("document should be rejected");
    assert!(
        violations.len() >= 3,
        "expected at least three violations, got {:?}",
        violations
    );
    assert!(violations.iter().any(|v| v.path == "title"));
    assert!(
        violations
            .iter()
            .any(|v| v.path == "slides[0].content.left_pane.content")
    );
    assert!(
        violations
            .iter()
            .any(|v| v.kind == ViolationKind::UnknownPattern)
    );
}

#[test]
fn test_unknown_pattern_is_distinct_category() {
    let yaml = r#"
title: "Mystery"
description: "A slide with an unknown pattern"
slides:
  - slide_id: 1
    pattern_type: "nonexistent_pattern"
    content:
      anything: true
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert_eq!(violations.len(), 1, "violations: {:?}", violations);
    assert_eq!(violations[0].kind, ViolationKind::UnknownPattern);
    assert_eq!(violations[0].path, "slides[0].pattern_type");
    assert!(violations[0].message.contains("nonexistent_pattern"));
}

#[test]
fn test_empty_slides_rejected() {
    let yaml = r#"
title: "Empty"
description: "No slides at all"
slides: []
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert!(
        violations
            .iter()
            .any(|v| v.path == "slides" && v.kind == ViolationKind::ArraySizeOutOfBounds)
    );
}

#[test]
fn test_too_many_slides_rejected() {
    let slide = r#"
  - slide_id: 1
    pattern_type: "linear_process"
    content:
      process_title: "P"
      steps:
        - step_number: 1
          step_title: "S"
          description: "D"
          details: []
      conclusion: "C"
"#;
    let yaml = format!(
        "title: \"Big deck\"\ndescription: \"Eleven slides\"\nslides:{}",
        slide.repeat(11)
    );
    let violations = validate(&yaml).expect_err("document should be rejected");
    assert!(
        violations
            .iter()
            .any(|v| v.path == "slides" && v.kind == ViolationKind::ArraySizeOutOfBounds)
    );
}

#[test]
fn test_missing_required_fields() {
    let yaml = r#"
title: "Missing bits"
description: "Comparison without a comparison"
slides:
  - slide_id: 1
    pattern_type: "2pane_comparison"
    content:
      left_pane:
        pane_title: "Trains"
        content: ["One"]
      right_pane:
        content: ["Two"]
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert!(paths.contains(&"slides[0].content.right_pane.pane_title"));
    assert!(paths.contains(&"slides[0].content.comparison"));
    assert!(
        violations
            .iter()
            .all(|v| v.kind == ViolationKind::RequiredFieldMissing)
    );
}

#[test]
fn test_wrong_type_reported() {
    let yaml = r#"
title: 42
description: "Numeric title"
slides:
  - slide_id: 1
    pattern_type: "linear_process"
    content:
      process_title: "P"
      steps:
        - step_number: 1
          step_title: "S"
          description: "D"
          details: []
      conclusion: "C"
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert_eq!(violations.len(), 1, "violations: {:?}", violations);
    assert_eq!(violations[0].path, "title");
    assert_eq!(violations[0].kind, ViolationKind::WrongType);
}

#[test]
fn test_pane_count_must_be_exactly_three() {
    let yaml = r#"
title: "Short deck"
description: "Only two panes"
slides:
  - slide_id: 1
    pattern_type: "3pane_parallel"
    content:
      main_title: "Phases"
      panes:
        - pane_title: "One"
          content: ["A"]
        - pane_title: "Two"
          content: ["B"]
      summary: "Incomplete"
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert_eq!(violations.len(), 1, "violations: {:?}", violations);
    assert_eq!(violations[0].path, "slides[0].content.panes");
    assert_eq!(violations[0].kind, ViolationKind::ArraySizeOutOfBounds);
}

#[test]
fn test_too_many_step_details_rejected() {
    let yaml = r#"
title: "Onboarding"
description: "Too much detail"
slides:
  - slide_id: 1
    pattern_type: "linear_process"
    content:
      process_title: "P"
      steps:
        - step_number: 1
          step_title: "S"
          description: "D"
          details: ["One", "Two", "Three"]
      conclusion: "C"
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert_eq!(violations.len(), 1, "violations: {:?}", violations);
    assert_eq!(violations[0].path, "slides[0].content.steps[0].details");
    assert_eq!(violations[0].kind, ViolationKind::ArraySizeOutOfBounds);
}

#[test]
fn test_step_number_must_be_positive() {
    let yaml = r#"
title: "Onboarding"
description: "Zeroth step"
slides:
  - slide_id: 1
    pattern_type: "linear_process"
    content:
      process_title: "P"
      steps:
        - step_number: 0
          step_title: "S"
          description: "D"
          details: []
      conclusion: "C"
"#;
    let violations = validate(yaml).expect_err("document should be rejected");
    assert_eq!(violations.len(), 1, "violations: {:?}", violations);
    assert_eq!(violations[0].path, "slides[0].content.steps[0].step_number");
    assert_eq!(violations[0].kind, ViolationKind::NumberOutOfRange);
}

#[test]
fn test_length_bounds_count_scalars_not_bytes() {
    // 30 Japanese characters are 90 bytes but within the 30-char bound.
    let pane_title = "あ".repeat(30);
    let yaml = format!(
        r#"
title: "Trains vs planes"
description: "Multibyte pane title"
slides:
  - slide_id: 1
    pattern_type: "2pane_comparison"
    content:
      left_pane:
        pane_title: "{pane_title}"
        content: ["One"]
      right_pane:
        pane_title: "Planes"
        content: ["Two"]
      comparison: "Comparison"
"#
    );
    assert!(validate(&yaml).is_ok());
}
