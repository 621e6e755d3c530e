// src/services/generator.rs
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::UpstreamError;

pub const SYSTEM_INSTRUCTION: &str = "You rewrite user input into a single, vivid prompt describing a human face \
for a Stable Diffusion / ComfyUI workflow. \
Output ONLY the prompt text, no explanations, no quotation marks. \
Mention age, gender presentation, key facial features, emotion, camera framing, \
lighting, and visual style. Max 60 words.";

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

pub fn build_prompt(user_text: &str) -> String {
    format!("{SYSTEM_INSTRUCTION}\n\nUser input:\n{user_text}")
}

/// Non-streaming client for an Ollama-style `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl GeneratorClient {
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            url: config.upstream_url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Rewrites `user_text` through the upstream model. No retries; callers pick the fallback.
    pub async fn generate(&self, user_text: &str) -> Result<String, UpstreamError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: build_prompt(user_text),
            stream: false,
        };

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "upstream body received");
        let parsed: GenerateResponse = serde_json::from_slice(&body)?;

        Ok(parsed.response.trim().to_string())
    }
}
