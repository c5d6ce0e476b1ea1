//! Tests for the wire shape of the document model.

use hokusai_core::{
    GenerateResponse, LinearProcessContent, LinearProcessStep, Output, PaneContent, PatternContent,
    PatternId, Slide, TwoPaneComparisonContent,
};
use std::str::FromStr;

#[test]
fn test_pattern_id_string_forms() {
    assert_eq!(PatternId::TwoPaneComparison.to_string(), "2pane_comparison");
    assert_eq!(PatternId::ThreePaneParallel.to_string(), "3pane_parallel");
    assert_eq!(PatternId::LinearProcess.to_string(), "linear_process");

    assert_eq!(
        PatternId::from_str("3pane_parallel").unwrap(),
        PatternId::ThreePaneParallel
    );
    assert!(PatternId::from_str("spiral_timeline").is_err());
}

#[test]
fn test_slide_serializes_discriminator_beside_content() {
    let slide = Slide::new(
        1,
        PatternContent::TwoPaneComparison(TwoPaneComparisonContent::new(
            PaneContent::new("Left", vec!["One".to_string()]),
            PaneContent::new("Right", vec!["Two".to_string()]),
            "A comparison",
        )),
    );

    let yaml = serde_yaml::to_string(&slide).expect("slide serializes");
    assert!(yaml.contains("slide_id"), "yaml: {yaml}");
    assert!(yaml.contains("pattern_type"), "yaml: {yaml}");
    assert!(yaml.contains("2pane_comparison"), "yaml: {yaml}");
    assert!(yaml.contains("left_pane"), "yaml: {yaml}");

    let back: Slide = serde_yaml::from_str(&yaml).expect("slide deserializes");
    assert_eq!(back, slide);
}

#[test]
fn test_slide_pattern_follows_content_variant() {
    let slide = Slide::new(
        2,
        PatternContent::LinearProcess(LinearProcessContent::new(
            "Process",
            vec![LinearProcessStep::new(1, "Start", "Begin here", vec![])],
            "Done",
        )),
    );
    assert_eq!(slide.pattern(), PatternId::LinearProcess);
    assert_eq!(slide.content().pattern(), PatternId::LinearProcess);
}

#[test]
fn test_generate_response_text_concatenates_text_outputs() {
    let response = GenerateResponse {
        outputs: vec![
            Output::Text("title: ".to_string()),
            Output::Json(serde_json::json!({"ignored": true})),
            Output::Text("\"Hello\"".to_string()),
        ],
    };
    assert_eq!(response.text(), "title: \"Hello\"");
}
