//! Closed pattern registry pairing schemas with renderers.

use crate::render::{
    LinearProcessRenderer, ThreePaneParallelRenderer, TwoPaneComparisonRenderer,
};
use crate::schema::{
    ContentSchema, LinearProcessSchema, ThreePaneParallelSchema, TwoPaneComparisonSchema,
};
use hokusai_core::PatternId;
use hokusai_error::{RegistryError, RegistryErrorKind};
use hokusai_interface::SlideRenderer;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// The closed table pairing each pattern with its content schema and
/// renderer, the single source of truth for which patterns exist.
///
/// [`PatternRegistry::standard`] wires every pattern through an
/// exhaustive match, so a new [`PatternId`] variant cannot compile until
/// both halves exist. Partial registries can be assembled by hand to
/// model drifted deployments (a stored document rendered by a process
/// that no longer registers its pattern).
///
/// # Examples
///
/// ```
/// use hokusai_pattern::PatternRegistry;
///
/// let registry = PatternRegistry::standard().unwrap();
/// assert_eq!(registry.pattern_ids().len(), 3);
/// ```
pub struct PatternRegistry {
    schemas: HashMap<PatternId, Box<dyn ContentSchema>>,
    renderers: HashMap<PatternId, Box<dyn SlideRenderer>>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
            renderers: HashMap::new(),
        }
    }

    /// Builds the registry of all supported patterns and verifies its
    /// integrity.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when any pattern lacks a schema or a
    /// renderer. This is a programming error and callers should fail
    /// fast at startup rather than per request.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for pattern in PatternId::iter() {
            // Exhaustive on purpose: a new pattern must bring both its
            // schema and its renderer before this compiles.
            match pattern {
                PatternId::TwoPaneComparison => registry.register(
                    Box::new(TwoPaneComparisonSchema),
                    Box::new(TwoPaneComparisonRenderer),
                ),
                PatternId::ThreePaneParallel => registry.register(
                    Box::new(ThreePaneParallelSchema),
                    Box::new(ThreePaneParallelRenderer),
                ),
                PatternId::LinearProcess => registry.register(
                    Box::new(LinearProcessSchema),
                    Box::new(LinearProcessRenderer),
                ),
            }
        }
        registry.verify_integrity()?;
        Ok(registry)
    }

    /// Registers a schema/renderer pair, replacing any previous entries
    /// for their patterns.
    pub fn register(&mut self, schema: Box<dyn ContentSchema>, renderer: Box<dyn SlideRenderer>) {
        self.register_schema(schema);
        self.register_renderer(renderer);
    }

    /// Registers only a content schema.
    pub fn register_schema(&mut self, schema: Box<dyn ContentSchema>) {
        tracing::debug!(pattern = %schema.pattern(), schema = schema.name(), "Registering schema");
        self.schemas.insert(schema.pattern(), schema);
    }

    /// Registers only a renderer.
    pub fn register_renderer(&mut self, renderer: Box<dyn SlideRenderer>) {
        tracing::debug!(pattern = %renderer.pattern(), renderer = renderer.name(), "Registering renderer");
        self.renderers.insert(renderer.pattern(), renderer);
    }

    /// The content schema registered for a pattern.
    pub fn schema_for(&self, pattern: PatternId) -> Option<&dyn ContentSchema> {
        self.schemas.get(&pattern).map(|schema| schema.as_ref())
    }

    /// The renderer registered for a pattern.
    pub fn renderer_for(&self, pattern: PatternId) -> Option<&dyn SlideRenderer> {
        self.renderers.get(&pattern).map(|renderer| renderer.as_ref())
    }

    /// All patterns with at least one registered half, in stable order.
    pub fn pattern_ids(&self) -> Vec<PatternId> {
        let mut ids: Vec<PatternId> = PatternId::iter()
            .filter(|id| self.schemas.contains_key(id) || self.renderers.contains_key(id))
            .collect();
        ids.sort();
        ids
    }

    /// Verifies that every pattern has both a schema and a renderer.
    ///
    /// An orphan in either direction indicates a programming error; the
    /// check runs at startup so it can never surface at request time.
    ///
    /// # Errors
    ///
    /// Returns the first orphan found.
    #[tracing::instrument(skip(self))]
    pub fn verify_integrity(&self) -> Result<(), RegistryError> {
        for pattern in PatternId::iter() {
            if !self.schemas.contains_key(&pattern) {
                return Err(RegistryError::new(RegistryErrorKind::MissingSchema(
                    pattern.to_string(),
                )));
            }
            if !self.renderers.contains_key(&pattern) {
                return Err(RegistryError::new(RegistryErrorKind::MissingRenderer(
                    pattern.to_string(),
                )));
            }
        }
        tracing::debug!(patterns = self.schemas.len(), "Registry integrity verified");
        Ok(())
    }

    /// Number of patterns with a registered schema.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.renderers.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
