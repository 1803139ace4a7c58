//! Text-to-image client for Stability-compatible APIs.

use anyhow::{Context, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Deserialize;

/// Image dimensions accepted by the generation engine.
pub const ALLOWED_DIMENSIONS: &[(u32, u32)] = &[(512, 512), (768, 512), (512, 768)];

/// A text-to-image request.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    /// Weighted negatively in the payload when present.
    pub negative_prompt: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl ImageRequest {
    /// Checks the dimensions against [`ALLOWED_DIMENSIONS`].
    pub fn validate(&self) -> Result<()> {
        if ALLOWED_DIMENSIONS.contains(&(self.width, self.height)) {
            Ok(())
        } else {
            bail!(
                "Invalid image dimensions {}x{}\n\n\
                 Allowed dimensions: 512x512, 768x512, 512x768",
                self.width,
                self.height
            )
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    base64: String,
}

/// Client for a Stability-compatible text-to-image route.
pub struct ImageClient {
    client: Client,
    endpoint: String,
    engine: String,
    api_key: Option<String>,
}

impl ImageClient {
    pub fn new(endpoint: String, engine: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            engine,
            api_key,
        }
    }

    /// Generates an image and returns the decoded PNG bytes.
    pub async fn generate(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        request.validate()?;

        let url = format!(
            "{}/v1/generation/{}/text-to-image",
            self.endpoint.trim_end_matches('/'),
            self.engine
        );

        let mut text_prompts = vec![serde_json::json!({
            "text": request.prompt,
            "weight": 1,
        })];
        if let Some(negative) = &request.negative_prompt {
            text_prompts.push(serde_json::json!({
                "text": negative,
                "weight": -1,
            }));
        }

        let payload = serde_json::json!({
            "text_prompts": text_prompts,
            "cfg_scale": 7,
            "width": request.width,
            "height": request.height,
            "samples": 1,
            "steps": 30,
        });

        let mut http_request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&payload);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to image API: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Image API request failed with status {status}: {body}");
        }

        let generation: GenerationResponse = response
            .json()
            .await
            .context("Failed to parse image API response")?;

        let artifact = generation
            .artifacts
            .first()
            .context("Image API response contained no artifacts")?;

        BASE64
            .decode(&artifact.base64)
            .context("Failed to decode image artifact")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: u32, height: u32) -> ImageRequest {
        ImageRequest {
            prompt: "A professional image of a coffee shop".to_string(),
            negative_prompt: None,
            width,
            height,
        }
    }

    #[test]
    fn test_allowed_dimensions_valid() {
        assert!(request(512, 512).validate().is_ok());
        assert!(request(768, 512).validate().is_ok());
        assert!(request(512, 768).validate().is_ok());
    }

    #[test]
    fn test_disallowed_dimensions_rejected() {
        assert!(request(1024, 1024).validate().is_err());
        assert!(request(0, 0).validate().is_err());
        // Orientation matters: (768, 512) is allowed but (512, 768) swapped
        // is a distinct entry, so an arbitrary swap is not implied.
        assert!(request(768, 768).validate().is_err());
    }
}
