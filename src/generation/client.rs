use anyhow::{Context, Result};
use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::pin::Pin;

use super::sse::sse_to_text_stream;

/// Default sampling temperature for content generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A fully-resolved generation request.
///
/// `prompt` is the rendered platform template (plus any profile context or
/// language instruction); the template resolver has already run by the time
/// a request is built.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
}

impl GenerationRequest {
    /// Computes a stable cache key over the request's semantic fields.
    pub fn cache_key(&self) -> String {
        let cache_input = serde_json::json!({
            "prompt": self.prompt,
            "model": self.model,
            "endpoint": self.endpoint,
            "temperature": self.temperature,
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Client for OpenAI-compatible chat-completion endpoints.
///
/// Covers both local model servers (Ollama exposes the compatible route)
/// and hosted APIs; which backend is used is purely provider configuration.
pub struct GenerationClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GenerationClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Sends the request and returns a stream of generated text chunks.
    ///
    /// The request carries the filled prompt as a single user message.
    /// No timeout or retry policy is applied here; that stays with the
    /// caller.
    pub async fn generate_stream(
        &self,
        request: &GenerationRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<String>> + Send>>> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed(&request.prompt),
            }],
            temperature: request.temperature,
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        Ok(Box::pin(sse_to_text_stream(response.bytes_stream())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "Write a blog post about cats.".to_string(),
            model: "mistral".to_string(),
            endpoint: "http://localhost:11434".to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[test]
    fn test_cache_key_is_stable() {
        assert_eq!(request().cache_key(), request().cache_key());
    }

    #[test]
    fn test_cache_key_depends_on_prompt() {
        let mut other = request();
        other.prompt.push_str(" Make it funny.");
        assert_ne!(request().cache_key(), other.cache_key());
    }

    #[test]
    fn test_cache_key_depends_on_model_and_endpoint() {
        let mut other = request();
        other.model = "llama2".to_string();
        assert_ne!(request().cache_key(), other.cache_key());

        let mut other = request();
        other.endpoint = "http://remote:11434".to_string();
        assert_ne!(request().cache_key(), other.cache_key());
    }

    #[test]
    fn test_cache_key_is_hex_sha256() {
        let key = request().cache_key();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
