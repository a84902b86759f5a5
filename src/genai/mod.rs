mod client;
mod types;

pub use client::{GeminiClient, GenerativeClient};
pub use types::{GenerateRequest, ImagePayload};
