//! Tests for pattern registry integrity.

use hokusai_core::PatternId;
use hokusai_error::RegistryErrorKind;
use hokusai_pattern::{
    LinearProcessSchema, PatternRegistry, ThreePaneParallelSchema, TwoPaneComparisonSchema,
};

#[test]
fn test_standard_registry_is_complete() {
    let registry = PatternRegistry::standard().expect("standard registry");
    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.pattern_ids(),
        vec![
            PatternId::TwoPaneComparison,
            PatternId::ThreePaneParallel,
            PatternId::LinearProcess,
        ]
    );
    for pattern in registry.pattern_ids() {
        assert!(registry.schema_for(pattern).is_some());
        assert!(registry.renderer_for(pattern).is_some());
    }
}

#[test]
fn test_standard_registry_passes_integrity_check() {
    let registry = PatternRegistry::standard().expect("standard registry");
    assert!(registry.verify_integrity().is_ok());
}

#[test]
fn test_empty_registry_fails_integrity_check() {
    let registry = PatternRegistry::new();
    assert!(registry.is_empty());
    let err = registry
        .verify_integrity()
        .expect_err("empty registry must fail");
    assert!(matches!(err.kind, RegistryErrorKind::MissingSchema(_)));
}

#[test]
fn test_schema_without_renderer_fails_integrity_check() {
    // A pattern with a schema but no renderer is an orphan, caught at
    // startup rather than per document.
    let mut registry = PatternRegistry::new();
    registry.register_schema(Box::new(TwoPaneComparisonSchema));
    registry.register_schema(Box::new(ThreePaneParallelSchema));
    registry.register_schema(Box::new(LinearProcessSchema));

    let err = registry
        .verify_integrity()
        .expect_err("renderer orphans must fail");
    match err.kind {
        RegistryErrorKind::MissingRenderer(pattern) => {
            assert_eq!(pattern, "2pane_comparison");
        }
        other => panic!("expected MissingRenderer, got {:?}", other),
    }
}

#[test]
fn test_schema_lookup_by_pattern() {
    let registry = PatternRegistry::standard().expect("standard registry");
    let schema = registry
        .schema_for(PatternId::LinearProcess)
        .expect("schema registered");
    assert_eq!(schema.pattern(), PatternId::LinearProcess);

    let renderer = registry
        .renderer_for(PatternId::ThreePaneParallel)
        .expect("renderer registered");
    assert_eq!(renderer.pattern(), PatternId::ThreePaneParallel);
}
