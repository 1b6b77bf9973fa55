use tokio_util::sync::CancellationToken;

use crate::config::AzureOpenAIConfig;
use crate::error::{RelayError, Result};
use crate::providers::azure::{AzureOpenAIProvider, ChatCompletionRequest, ChatMessage};

pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";
pub const MAX_COMPLETION_TOKENS: u32 = 800;
pub const TEMPERATURE: f64 = 0.7;
pub const EMPTY_COMPLETION_FALLBACK: &str = "No response generated";

/// Stateless facade over the Azure OpenAI deployment. Built once at startup
/// and shared across requests; holds only immutable configuration and the
/// reusable HTTP client.
#[derive(Debug)]
pub struct CompletionGateway {
    client: reqwest::Client,
    config: AzureOpenAIConfig,
}

impl CompletionGateway {
    pub fn new(config: AzureOpenAIConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            "Azure OpenAI completion gateway initialized for deployment {}",
            config.deployment_name
        );
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    fn build_request(message: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// Sends one single-turn completion and returns the first choice's text.
    /// A usable-but-empty upstream reply is never an error; cancellation wins
    /// over a still-pending round-trip.
    pub async fn complete(&self, message: &str, cancel: CancellationToken) -> Result<String> {
        let request = Self::build_request(message);

        tracing::info!("Sending chat completion request");

        let result = tokio::select! {
            _ = cancel.cancelled() => return Err(RelayError::Cancelled),
            result = AzureOpenAIProvider::chat_completions(
                &self.client,
                &self.config.endpoint,
                &self.config.api_key,
                &self.config.deployment_name,
                &self.config.api_version,
                &request,
            ) => result,
        };

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Chat completion request failed: {}", err);
                return Err(err);
            }
        };

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        Ok(text.unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string()))
    }
}
