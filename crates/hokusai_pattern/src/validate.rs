//! Two-phase document validation.
//!
//! Phase one walks the generic parsed value and aggregates every
//! field-level violation across all slides before returning. Phase two
//! deserializes the clean document into the typed model. A presentation
//! is never partially valid.

use crate::registry::PatternRegistry;
use crate::schema::{
    expect_positive_integer, expect_string, require_mapping, type_name,
};
use hokusai_core::{
    LinearProcessContent, PatternContent, PatternId, Presentation, Slide,
    ThreePaneParallelContent, TwoPaneComparisonContent, limits,
};
use hokusai_error::{Violation, ViolationKind};
use serde::Deserialize;
use serde_yaml::Value;
use std::str::FromStr;

/// Validates a parsed document and builds the typed presentation.
///
/// The registry supplies the content schema for each slide's
/// `pattern_type` discriminator. All violations across all slides and
/// fields are collected before returning, so the caller can show one
/// complete diagnostic instead of iterating submit/fail cycles.
///
/// # Errors
///
/// Returns the full violation list when the document does not conform.
#[tracing::instrument(skip_all)]
pub fn validate_document(
    value: &Value,
    registry: &PatternRegistry,
) -> Result<Presentation, Vec<Violation>> {
    let root = unwrap_envelope(value);
    let mut sink = Vec::new();

    if require_mapping(root, "", &mut sink).is_none() {
        return Err(sink);
    }

    expect_string(
        root.get("title"),
        "title",
        limits::PRESENTATION_TITLE_MAX,
        &mut sink,
    );
    expect_string(
        root.get("description"),
        "description",
        limits::PRESENTATION_DESCRIPTION_MAX,
        &mut sink,
    );

    match root.get("slides") {
        None | Some(Value::Null) => sink.push(Violation::new(
            "slides",
            ViolationKind::RequiredFieldMissing,
            "required field is missing",
        )),
        Some(Value::Sequence(slides)) => {
            if slides.len() < limits::SLIDES_MIN || slides.len() > limits::SLIDES_MAX {
                sink.push(Violation::new(
                    "slides",
                    ViolationKind::ArraySizeOutOfBounds,
                    format!(
                        "sequence has {} slides, expected between {} and {}",
                        slides.len(),
                        limits::SLIDES_MIN,
                        limits::SLIDES_MAX
                    ),
                ));
            }
            for (idx, slide) in slides.iter().enumerate() {
                validate_slide(slide, idx, registry, &mut sink);
            }
        }
        Some(other) => sink.push(Violation::new(
            "slides",
            ViolationKind::WrongType,
            format!("expected a sequence, found {}", type_name(other)),
        )),
    }

    if !sink.is_empty() {
        tracing::debug!(violations = sink.len(), "Document failed validation");
        return Err(sink);
    }

    build_presentation(root)
}

/// Unwraps the generator's optional `presentation:` envelope.
///
/// The generation prompt asks for the document under a single
/// `presentation` key, while bare documents are equally valid; both
/// shapes are accepted.
fn unwrap_envelope(value: &Value) -> &Value {
    if let Value::Mapping(map) = value {
        if map.len() == 1 {
            if let Some(inner @ Value::Mapping(_)) = value.get("presentation") {
                return inner;
            }
        }
    }
    value
}

/// Validates one slide entry, consulting the registry for the schema
/// selected by the discriminator.
fn validate_slide(
    slide: &Value,
    idx: usize,
    registry: &PatternRegistry,
    sink: &mut Vec<Violation>,
) {
    let path = format!("slides[{idx}]");
    let Some(map) = require_mapping(slide, &path, sink) else {
        return;
    };

    expect_positive_integer(map.get("slide_id"), &format!("{path}.slide_id"), sink);

    let pattern_path = format!("{path}.pattern_type");
    match map.get("pattern_type") {
        None | Some(Value::Null) => sink.push(Violation::new(
            &pattern_path,
            ViolationKind::RequiredFieldMissing,
            "required field is missing",
        )),
        Some(Value::String(raw)) => match PatternId::from_str(raw) {
            Ok(pattern) => match registry.schema_for(pattern) {
                Some(schema) => {
                    let content_path = format!("{path}.content");
                    match map.get("content") {
                        None | Some(Value::Null) => sink.push(Violation::new(
                            &content_path,
                            ViolationKind::RequiredFieldMissing,
                            "required field is missing",
                        )),
                        Some(content) => schema.validate(content, &content_path, sink),
                    }
                }
                None => sink.push(Violation::new(
                    &pattern_path,
                    ViolationKind::UnknownPattern,
                    format!("pattern '{raw}' has no schema in this registry"),
                )),
            },
            Err(_) => sink.push(Violation::new(
                &pattern_path,
                ViolationKind::UnknownPattern,
                format!("pattern '{raw}' is not a registered pattern"),
            )),
        },
        Some(other) => sink.push(Violation::new(
            &pattern_path,
            ViolationKind::WrongType,
            format!("expected a string, found {}", type_name(other)),
        )),
    }
}

/// Raw envelope shape for phase-two deserialization.
#[derive(Deserialize)]
struct RawDocument {
    title: String,
    description: String,
    slides: Vec<RawSlide>,
}

/// Raw slide shape; content stays generic until the discriminator picks
/// its variant.
#[derive(Deserialize)]
struct RawSlide {
    slide_id: u32,
    pattern_type: PatternId,
    content: Value,
}

/// Builds the typed presentation from a document that passed phase one.
///
/// A conversion failure here indicates a schema/model mismatch and is
/// surfaced as a violation rather than a panic.
fn build_presentation(root: &Value) -> Result<Presentation, Vec<Violation>> {
    let raw: RawDocument = serde_yaml::from_value(root.clone()).map_err(|e| {
        vec![Violation::new(
            "",
            ViolationKind::WrongType,
            format!("typed conversion failed: {e}"),
        )]
    })?;

    let mut slides = Vec::with_capacity(raw.slides.len());
    for (idx, slide) in raw.slides.into_iter().enumerate() {
        let content = build_content(slide.pattern_type, slide.content).map_err(|e| {
            vec![Violation::new(
                format!("slides[{idx}].content"),
                ViolationKind::WrongType,
                format!("typed conversion failed: {e}"),
            )]
        })?;
        slides.push(Slide::new(slide.slide_id, content));
    }

    Ok(Presentation::new(raw.title, raw.description, slides))
}

/// Deserializes slide content into the variant selected by the
/// discriminator. The match is exhaustive over the closed pattern set.
fn build_content(pattern: PatternId, content: Value) -> Result<PatternContent, serde_yaml::Error> {
    Ok(match pattern {
        PatternId::TwoPaneComparison => PatternContent::TwoPaneComparison(
            serde_yaml::from_value::<TwoPaneComparisonContent>(content)?,
        ),
        PatternId::ThreePaneParallel => PatternContent::ThreePaneParallel(
            serde_yaml::from_value::<ThreePaneParallelContent>(content)?,
        ),
        PatternId::LinearProcess => PatternContent::LinearProcess(
            serde_yaml::from_value::<LinearProcessContent>(content)?,
        ),
    })
}
