//! Message types for the generation collaborator.
//!
//! The pipeline does not invoke the generation service itself; these
//! types describe the request it hands a [`TextGenerator`] implementation
//! and the response it reads back.
//!
//! [`TextGenerator`]: https://docs.rs/hokusai_interface

use serde::{Deserialize, Serialize};

/// Roles are the same across modalities (text, image, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Where media content is sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

/// Supported input parts for a generation request.
///
/// # Examples
///
/// ```
/// use hokusai_core::{Input, MediaSource};
///
/// let text = Input::Text("Compare trains and planes".to_string());
///
/// let image = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("iVBORw0KGgo=".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Inline image input (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL, base64, or raw bytes)
        source: MediaSource,
    },
}

/// A multimodal message in a conversation.
///
/// # Examples
///
/// ```
/// use hokusai_core::{Input, Message, Role};
///
/// let message = Message::new(Role::User, vec![Input::Text("Hello!".to_string())]);
/// assert_eq!(*message.role(), Role::User);
///
/// let instruction = Message::system("Respond with YAML only.");
/// assert_eq!(*instruction.role(), Role::System);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The content of the message (can be multimodal)
    content: Vec<Input>,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }

    /// Creates a system-instruction message from plain text.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, vec![Input::Text(text.into())])
    }

    /// Creates a user message from plain text.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Input::Text(text.into())])
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}

/// Generic generation request (multimodal-safe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub model: Option<String>,
}

/// Supported output types from the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output.
    Json(serde_json::Value),
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// All text outputs concatenated, the candidate payload for the
    /// compose pipeline. Non-text outputs are skipped.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                Output::Json(_) => None,
            })
            .collect()
    }
}
