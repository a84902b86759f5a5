mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Reads configuration from the process environment.
///
/// `API_KEY` must be set; everything else falls back to a default.
pub fn load() -> Result<Config> {
    let api_key =
        env::var("API_KEY").map_err(|_| Error::config("API_KEY environment variable is not set"))?;

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);

    let base_url = env::var("GEMINI_API_BASE").unwrap_or_else(|_| default_base_url());

    debug!("Loaded configuration: port={}, base_url={}", port, base_url);

    Ok(Config {
        server: ServerConfig {
            host: default_host(),
            port,
        },
        gemini: GeminiConfig { api_key, base_url },
        generation: GenerationParams::default(),
    })
}
