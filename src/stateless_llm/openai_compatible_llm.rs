use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stateless_llm_interface::{ChatMessage, StatelessLLMInterface};
use crate::config::LlmConfig;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// OpenAI compatible LLM implementation
/// Calls `POST {base_url}/chat/completions` directly
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: Option<String>,
    organization_id: Option<String>,
    temperature: f32,
}

impl OpenAICompatibleLLM {
    pub fn new(
        model: String,
        base_url: String,
        api_key: Option<String>,
        organization_id: Option<String>,
        temperature: f32,
    ) -> Self {
        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            organization_id,
            temperature,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            config.model.clone(),
            config.base_url.clone(),
            config.api_key.clone(),
            config.organization_id.clone(),
            config.temperature,
        )
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<&str>,
    ) -> Result<Option<String>, anyhow::Error> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("The OPENAI_API_KEY environment variable is missing or empty");
        };

        let mut request_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            request_messages.push(ChatMessage::system(sys));
        }
        request_messages.extend(messages);

        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: request_messages,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Requesting chat completion from {}", url);

        let mut request = self.client.post(&url).bearer_auth(api_key).json(&body);
        if let Some(organization_id) = &self.organization_id {
            request = request.header("OpenAI-Organization", organization_id);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            bail!("{} {}", status.as_u16(), message.trim());
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Malformed chat completion response")?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content))
    }
}
