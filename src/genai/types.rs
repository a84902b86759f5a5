use crate::config::GenerationParams;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// One generation exchange: a wireframe image plus the prompt describing it.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub image: ImagePayload,
    pub params: GenerationParams,
}

#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

// Wire types for the Gemini generateContent API.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: i32,
    pub max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<i32>,
    pub candidates_token_count: Option<i32>,
    pub total_token_count: Option<i32>,
}

impl GenerateContentRequest {
    /// Builds the wire payload: the inline image first, then the prompt text.
    pub fn from_request(request: &GenerateRequest) -> Self {
        let image_part = Part::InlineData {
            inline_data: InlineData {
                mime_type: request.image.mime_type.clone(),
                data: general_purpose::STANDARD.encode(&request.image.data),
            },
        };
        let prompt_part = Part::Text {
            text: request.prompt.clone(),
        };

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![image_part, prompt_part],
            }],
            generation_config: GenerationConfig::from(request.params),
        }
    }
}

impl From<GenerationParams> for GenerationConfig {
    fn from(params: GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

impl GenerateContentResponse {
    /// Text fragment carried by this chunk, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .and_then(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
    }
}
