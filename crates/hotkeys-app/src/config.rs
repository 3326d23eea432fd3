//! Loading a page context outside the browser.

use hotkeys_core::Context;
use std::path::Path;
use thiserror::Error;

/// Errors loading a context file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid context JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a camelCase JSON page context from disk.
pub fn load_context(path: impl AsRef<Path>) -> Result<Context, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Context::from_json(&json)?)
}
