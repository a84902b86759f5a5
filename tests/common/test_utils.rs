use std::io::Cursor;

/// Boundary used by the hand-built multipart bodies below.
pub const MULTIPART_BOUNDARY: &str = "sketch2site-test-boundary";

/// Render a small valid PNG to use as an upload.
pub fn tiny_png() -> Vec<u8> {
    let image = image::DynamicImage::new_rgb8(4, 4);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .expect("Failed to encode test image");
    bytes
}

/// Build a multipart/form-data body; pass `None` to leave a field out.
pub fn multipart_body(image: Option<&[u8]>, model: Option<&str>, prompt: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"image-upload\"; filename=\"wireframe.png\"\r\n\
                 Content-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }

    if let Some(model) = model {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"model\"\r\n\r\n\
                 {model}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some(prompt) = prompt {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"prompt\"\r\n\r\n\
                 {prompt}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Content-Type header value matching [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
}

/// One server-sent event carrying a single text fragment.
pub fn sse_event(text: &str) -> String {
    format!(
        "data: {}\n\n",
        serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]}
            }]
        })
    )
}
