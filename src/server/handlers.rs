use crate::config::GenerationParams;
use crate::genai::{GenerateRequest, GenerativeClient, ImagePayload};
use crate::{Error, Result};
use askama::Template;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use std::io::Cursor;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn GenerativeClient>,
    pub generation: GenerationParams,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

/// Direct navigation to /response goes back to the upload form.
pub async fn response_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}

pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>> {
    let mut image_bytes = None;
    let mut model = None;
    let mut prompt = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image-upload" => image_bytes = Some(field.bytes().await?),
            "model" => model = Some(field.text().await?),
            "prompt" => prompt = Some(field.text().await?),
            _ => {}
        }
    }

    let image_bytes = image_bytes.ok_or_else(|| Error::upload("missing image-upload field"))?;
    let model = model.ok_or_else(|| Error::upload("missing model field"))?;
    let prompt = prompt.ok_or_else(|| Error::upload("missing prompt field"))?;

    let request_id = Uuid::new_v4();
    info!(
        "Request {}: received {} byte upload for model {}",
        request_id,
        image_bytes.len(),
        model
    );

    // Decode the upload, then hand Gemini a PNG with a known mime type.
    let wireframe = image::load_from_memory(&image_bytes)?;
    let mut png = Vec::new();
    wireframe.write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)?;

    let answer = state
        .generator
        .generate(GenerateRequest {
            model,
            prompt,
            image: ImagePayload {
                mime_type: "image/png".to_string(),
                data: png,
            },
            params: state.generation,
        })
        .await?;

    let markup = strip_code_fences(&answer);

    info!(
        "Request {}: generation complete ({} response chars)",
        request_id,
        markup.len()
    );
    debug!("Request {}: response text: {}", request_id, markup);

    Ok(Html(markup))
}

/// Removes the Markdown fence markers Gemini tends to wrap HTML in.
fn strip_code_fences(text: &str) -> String {
    text.replace("```html", "")
        .replace("```", "")
        .trim()
        .to_string()
}
