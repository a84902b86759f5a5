use super::types::*;
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tracing::debug;

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Runs one generation exchange and returns the assembled response text.
    async fn generate(&self, request: GenerateRequest) -> Result<String>;
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.config.base_url, model, self.config.api_key
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let body = GenerateContentRequest::from_request(&request);
        let url = self.stream_url(&request.model);

        debug!(
            "Sending generation request to {} ({} prompt chars, {} image bytes)",
            request.model,
            request.prompt.len(),
            request.image.data.len()
        );

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::api(status, message));
        }

        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut answer = String::new();
        let mut usage: Option<UsageMetadata> = None;

        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);

            // Network chunks can split a multi-byte character, so decode
            // only whole events.
            while let Some(end) = event_end(&buffer) {
                let event: Vec<u8> = buffer.drain(..end).collect();
                let event = String::from_utf8_lossy(&event);

                let Some(data) = event.trim().strip_prefix("data: ") else {
                    continue;
                };

                let reply: GenerateContentResponse = serde_json::from_str(data)?;
                if let Some(fragment) = reply.fragment() {
                    answer.push_str(fragment);
                }
                if reply.usage_metadata.is_some() {
                    usage = reply.usage_metadata;
                }
            }
        }

        if let Some(usage) = usage {
            debug!(
                "Stream drained: {:?} prompt tokens, {:?} output tokens",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(answer)
    }
}

/// Byte offset just past the blank line ending the first complete SSE
/// event in `buffer`, if one is present. Lines may end with `\n` or
/// `\r\n`.
fn event_end(buffer: &[u8]) -> Option<usize> {
    for i in 0..buffer.len() {
        if buffer[i] != b'\n' {
            continue;
        }
        if buffer.get(i + 1) == Some(&b'\n') {
            return Some(i + 2);
        }
        if buffer.get(i + 1) == Some(&b'\r') && buffer.get(i + 2) == Some(&b'\n') {
            return Some(i + 3);
        }
    }
    None
}
