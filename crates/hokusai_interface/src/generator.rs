//! Generation service trait.

use async_trait::async_trait;
use hokusai_core::{GenerateRequest, GenerateResponse};
use hokusai_error::HokusaiResult;

/// Trait for the external generation service.
///
/// The pipeline owns none of the service's policy: authentication,
/// retry, backoff, and rate limiting all live behind this seam. The
/// pipeline only requires that a successful call yields the candidate
/// payload text for normalization.
///
/// # Example
///
/// ```rust,ignore
/// use hokusai_interface::TextGenerator;
/// use hokusai_core::{GenerateRequest, GenerateResponse, Output};
/// use hokusai_error::HokusaiResult;
/// use async_trait::async_trait;
///
/// struct CannedGenerator(String);
///
/// #[async_trait]
/// impl TextGenerator for CannedGenerator {
///     async fn generate(&self, _request: &GenerateRequest) -> HokusaiResult<GenerateResponse> {
///         Ok(GenerateResponse { outputs: vec![Output::Text(self.0.clone())] })
///     }
///
///     fn name(&self) -> &str {
///         "CannedGenerator"
///     }
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a candidate payload for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing service fails; the session
    /// driver surfaces it without retrying.
    async fn generate(&self, request: &GenerateRequest) -> HokusaiResult<GenerateResponse>;

    /// Returns a human-readable name for this generator.
    ///
    /// Used for logging and error messages.
    fn name(&self) -> &str;
}
