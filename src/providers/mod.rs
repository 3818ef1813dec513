mod groq;
mod prompt;

pub use groq::GroqProvider;
pub use prompt::build_analysis_prompt;

use async_trait::async_trait;

use crate::error::ApiError;

/// Unified trait for completion API backends
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "groq")
    fn provider_name(&self) -> &str;

    /// Send a single prompt and return the model's text response
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}
