pub mod config;
pub mod error;
pub mod genai;
pub mod server;

pub use error::{Error, Result};
