use crate::error::{RelayError, Result};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};

pub struct AzureOpenAIProvider;

impl AzureOpenAIProvider {
    pub fn chat_completions_url(endpoint: &str, deployment: &str, api_version: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            api_version
        )
    }

    pub async fn chat_completions(
        client: &reqwest::Client,
        endpoint: &str,
        api_key: &str,
        deployment: &str,
        api_version: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = Self::chat_completions_url(endpoint, deployment, api_version);

        let response = client
            .post(&url)
            .header("api-key", api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // 尽量取信封里的 message，取不到就原样带上状态码和响应体
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .map(|e| e.error.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("upstream returned {}: {}", status, body));
            return Err(RelayError::Upstream(detail));
        }

        Ok(response.json::<ChatCompletionResponse>().await?)
    }
}
