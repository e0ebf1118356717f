//! Limner - Mermaid diagram requests in, Mermaid source out.
//!
//! Limner sits between a chat interface and a text-generation model. On the way
//! in it recognizes messages that ask for a diagram and rewrites them into a
//! Mermaid-specific prompt. On the way out it pulls Mermaid source from the
//! model's reply so it can be handed to a renderer.
//!
//! ```text
//! user message
//!     ↓ classify / resolve_type / extract_description
//! DiagramRequest
//!     ↓ synthesize_prompt
//! prompt ──→ generation model ──→ reply
//!                                   ↓ extract_code
//!                             Mermaid source ──→ renderer
//! ```
//!
//! The model call and the renderer belong to the caller.

pub mod config;
pub mod prompt;

mod error;

pub use limner_core::{diagram, samples, vocabulary};

pub use error::LimnerError;

use log::{debug, info};

use config::AppConfig;
use diagram::{DiagramRequest, DiagramType};

/// Entry point for detecting diagram requests and extracting diagrams.
///
/// Holds an [`AppConfig`] and applies it to every stage. All methods take
/// `&self` and share no mutable state, so one pipeline can serve any number of
/// threads.
///
/// # Examples
///
/// ```
/// use limner::{DiagramPipeline, diagram::DiagramType};
///
/// let pipeline = DiagramPipeline::default();
///
/// let request = pipeline
///     .detect("Show me a sequence diagram for user authentication")
///     .expect("Failed to detect request");
/// assert_eq!(request.diagram_type(), DiagramType::Sequence);
///
/// let prompt = pipeline.prompt_for(&request);
/// assert!(prompt.contains("sequenceDiagram"));
///
/// let reply = "```mermaid\nsequenceDiagram\n    User->>App: Log in\n```";
/// assert_eq!(
///     pipeline.extract(reply).as_deref(),
///     Some("sequenceDiagram\n    User->>App: Log in")
/// );
/// ```
#[derive(Debug, Default)]
pub struct DiagramPipeline {
    config: AppConfig,
}

impl DiagramPipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Prompt and extraction settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this pipeline runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Detect a diagram request in a user message.
    ///
    /// Returns `None` when the message contains no trigger vocabulary; the
    /// caller should then treat it as ordinary chat.
    pub fn detect(&self, text: &str) -> Option<DiagramRequest> {
        info!("Detecting diagram request");

        let request = limner_parser::detect(text);
        match &request {
            Some(request) => info!(
                diagram_type:% = request.diagram_type();
                "Diagram request detected"
            ),
            None => info!("No diagram request detected"),
        }

        request
    }

    /// Build a request for a caller-chosen diagram family.
    ///
    /// Skips classification and family resolution; only the description is
    /// derived from `text`.
    pub fn request_as(&self, text: &str, diagram_type: DiagramType) -> DiagramRequest {
        debug!(diagram_type:%; "Building request with forced diagram type");
        DiagramRequest::new(
            diagram_type,
            limner_parser::extract_description(text),
            text,
        )
    }

    /// Build the instruction prompt for a detected request.
    pub fn prompt_for(&self, request: &DiagramRequest) -> String {
        prompt::synthesize_prompt(request)
    }

    /// Detect a diagram request and build its prompt in one step.
    ///
    /// Returns `None` when the message is not a diagram request.
    pub fn prompt(&self, text: &str) -> Option<String> {
        self.detect(text).map(|request| self.prompt_for(&request))
    }

    /// Returns the assistant system prompt, honoring a configured override.
    pub fn system_prompt(&self) -> &str {
        self.config
            .prompt()
            .system_prompt()
            .unwrap_or(prompt::SYSTEM_PROMPT)
    }

    /// Extract Mermaid source from a model reply.
    ///
    /// Runs the tagged-block phase and, unless disabled in
    /// [`ExtractConfig`](config::ExtractConfig), the untagged-fence phase.
    /// Returns `None` when no diagram is found, which is not an error.
    pub fn extract(&self, response: &str) -> Option<String> {
        let code = if self.config.extract().untagged_fallback() {
            limner_parser::extract_code(response)
        } else {
            limner_parser::extract_tagged(response)
        };

        match &code {
            Some(code) => info!(len = code.len(); "Diagram source extracted"),
            None => debug!("No diagram source in reply"),
        }

        code
    }

    /// Extract Mermaid source from each message of a transcript.
    ///
    /// Messages are scanned independently; the result has one entry per
    /// message, in order.
    pub fn extract_all<S: AsRef<str>>(&self, messages: &[S]) -> Vec<Option<String>> {
        info!(messages = messages.len(); "Scanning transcript for diagrams");
        messages
            .iter()
            .map(|message| self.extract(message.as_ref()))
            .collect()
    }
}
