//! The compose pipeline: normalize, parse, validate.
//!
//! Every step is a pure function over immutable input, so the pipeline
//! is safe to run concurrently for independent documents. The one
//! asynchronous boundary, the generation call, lives behind the
//! [`TextGenerator`] seam and is awaited by [`GenerationSession`].

use crate::normalize::strip_code_fence;
use crate::parse::parse_document;
use crate::registry::PatternRegistry;
use crate::validate::validate_document;
use hokusai_core::{
    GenerateRequest, Input, Message, Presentation, Role, UsageMetrics, limits,
};
use hokusai_error::{ComposeError, ComposeErrorKind, GenerateError, GenerateErrorKind, HokusaiError};
use hokusai_interface::TextGenerator;

/// A successfully composed presentation plus the normalized source it
/// was built from.
///
/// The source is kept for display and debugging; the presentation is
/// immutable from here on.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Composed {
    /// The validated presentation
    presentation: Presentation,
    /// The normalized payload the presentation was parsed from
    normalized_source: String,
}

impl Composed {
    /// Consumes the outcome, yielding the presentation.
    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }
}

/// A rejected composition.
///
/// The normalized source is always kept, success or failure, so callers
/// can show what the generator actually produced next to the
/// diagnostics.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct ComposeRejection {
    /// Why the payload was rejected
    error: ComposeError,
    /// The normalized payload that was rejected
    normalized_source: String,
}

impl ComposeRejection {
    /// Creates a rejection from an error and the normalized payload.
    pub fn new(error: ComposeError, normalized_source: impl Into<String>) -> Self {
        Self {
            error,
            normalized_source: normalized_source.into(),
        }
    }

    /// Consumes the rejection, yielding the error.
    pub fn into_error(self) -> ComposeError {
        self.error
    }
}

impl std::fmt::Display for ComposeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ComposeRejection {}

/// Runs the full pipeline over raw generator output.
///
/// Normalizes the payload, parses it into a generic value, and
/// validates it against the registry's per-pattern schemas. Validation
/// is all-or-nothing: on failure no presentation exists, only the full
/// violation list and the normalized source.
///
/// # Errors
///
/// Returns a [`ComposeRejection`] carrying the error and the normalized
/// source on empty input, parse failure, or schema violations.
#[tracing::instrument(skip_all, fields(raw_len = raw.len()))]
pub fn compose(raw: &str, registry: &PatternRegistry) -> Result<Composed, ComposeRejection> {
    let normalized = strip_code_fence(raw);

    let value = match parse_document(&normalized) {
        Ok(value) => value,
        Err(error) => return Err(ComposeRejection::new(error, normalized)),
    };

    match validate_document(&value, registry) {
        Ok(presentation) => {
            tracing::info!(
                slides = presentation.slides().len(),
                "Composed presentation"
            );
            Ok(Composed {
                presentation,
                normalized_source: normalized,
            })
        }
        Err(violations) => {
            tracing::warn!(violations = violations.len(), "Payload failed validation");
            Err(ComposeRejection::new(
                ComposeError::new(ComposeErrorKind::Schema(violations)),
                normalized,
            ))
        }
    }
}

/// Why a generation round produced no presentation.
#[derive(Debug, derive_more::From)]
pub enum GenerationFailure {
    /// The session refused the request or the generation call failed
    Generate(HokusaiError),
    /// The generator responded but the payload was rejected
    Rejected(ComposeRejection),
}

impl std::fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationFailure::Generate(e) => write!(f, "{}", e),
            GenerationFailure::Rejected(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GenerationFailure {}

/// Session-scoped driver for the generate-then-compose round trip.
///
/// Owns its usage counters as an explicit object; there is no
/// process-wide state. Each round discards the previous presentation
/// and produces a brand-new one, so there is nothing to tear.
///
/// # Examples
///
/// ```rust,ignore
/// use hokusai_pattern::{GenerationSession, PatternRegistry};
///
/// let registry = PatternRegistry::standard()?;
/// let mut session = GenerationSession::new(generator);
/// let composed = session
///     .generate_presentation("Compare trains and planes", None, vec![], &registry)
///     .await?;
/// println!("{} slides", composed.presentation().slides().len());
/// ```
pub struct GenerationSession<G> {
    generator: G,
    usage: UsageMetrics,
    request_limit: u32,
}

impl<G: TextGenerator> GenerationSession<G> {
    /// Creates a session with the default request limit.
    pub fn new(generator: G) -> Self {
        Self::with_request_limit(generator, limits::SESSION_REQUEST_LIMIT)
    }

    /// Creates a session with an explicit per-session request limit.
    pub fn with_request_limit(generator: G, request_limit: u32) -> Self {
        Self {
            generator,
            usage: UsageMetrics::new(),
            request_limit,
        }
    }

    /// Usage counters for this session.
    pub fn usage(&self) -> &UsageMetrics {
        &self.usage
    }

    /// The generator this session drives.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Sends one prompt through the generator and composes the result.
    ///
    /// The prompt is trimmed and truncated to the session input limit
    /// before being sent. An optional system instruction and any
    /// multimodal parts ride along with the user message.
    ///
    /// # Errors
    ///
    /// * [`GenerationFailure::Generate`] when the session cap is
    ///   reached, the backend fails, or the generator returns an empty
    ///   payload.
    /// * [`GenerationFailure::Rejected`] when the payload does not
    ///   compose; the rejection keeps the normalized source.
    #[tracing::instrument(skip_all, fields(generator = self.generator.name()))]
    pub async fn generate_presentation(
        &mut self,
        prompt: &str,
        system_instruction: Option<&str>,
        parts: Vec<Input>,
        registry: &PatternRegistry,
    ) -> Result<Composed, GenerationFailure> {
        if self.usage.requests_this_session >= self.request_limit {
            tracing::warn!(limit = self.request_limit, "Session request limit reached");
            return Err(GenerationFailure::Generate(
                GenerateError::new(GenerateErrorKind::RequestLimitReached {
                    limit: self.request_limit,
                })
                .into(),
            ));
        }

        let prompt = sanitize_prompt(prompt);
        let mut messages = Vec::new();
        if let Some(instruction) = system_instruction {
            messages.push(Message::system(instruction));
        }
        let mut content = vec![Input::Text(prompt)];
        content.extend(parts);
        messages.push(Message::new(Role::User, content));

        let request = GenerateRequest {
            messages,
            ..GenerateRequest::default()
        };

        let response = self.generator.generate(&request).await?;
        self.usage.record_request();

        let text = response.text();
        if text.trim().is_empty() {
            tracing::warn!("Generator returned an empty payload");
            return Err(GenerationFailure::Generate(
                GenerateError::new(GenerateErrorKind::EmptyResponse).into(),
            ));
        }

        Ok(compose(&text, registry)?)
    }
}

/// Trims and truncates raw prompt text to the session input limit.
fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if count_chars_over(trimmed, limits::PROMPT_MAX) {
        tracing::warn!(limit = limits::PROMPT_MAX, "Prompt truncated");
        trimmed.chars().take(limits::PROMPT_MAX).collect()
    } else {
        trimmed.to_string()
    }
}

/// True when `text` has more than `max` scalar values, without counting
/// the whole string when it is long.
fn count_chars_over(text: &str, max: usize) -> bool {
    text.chars().nth(max).is_some()
}
