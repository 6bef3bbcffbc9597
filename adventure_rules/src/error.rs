//! Error types for scene loading.
//!
//! Domain operations on items, locations, and players are total and never
//! fail. Only reading a scene description from configuration can.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while loading a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The scene was not valid TOML, or did not match the expected shape.
    #[error("invalid TOML scene: {0}")]
    Toml(#[from] toml::de::Error),

    /// The scene was not valid JSON, or did not match the expected shape.
    #[error("invalid JSON scene: {0}")]
    Json(#[from] serde_json::Error),

    /// The scene file extension is neither `toml` nor `json`.
    #[error("unsupported scene format: {0}")]
    UnsupportedFormat(String),
}
