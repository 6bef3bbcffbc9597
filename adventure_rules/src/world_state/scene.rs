//! Loading locations from scene configuration.
//!
//! A scene is the location attribute bundle written as TOML or JSON:
//!
//! ```toml
//! description = "You are in a room. A wizard is snoring on the couch."
//! items = ["whiskey", "bucket"]
//! ```

use std::fs;
use std::path::Path;

use super::Location;
use crate::error::{SceneError, SceneResult};

impl Location {
    /// Parse a location from a TOML scene.
    pub fn from_toml_str(content: &str) -> SceneResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a location from a JSON scene.
    pub fn from_json_str(content: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a location from a scene file, picking the format by extension.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();

        let parse: fn(&str) -> SceneResult<Self> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Self::from_toml_str,
                Some("json") => Self::from_json_str,
                other => {
                    return Err(SceneError::UnsupportedFormat(
                        other.unwrap_or_default().to_owned(),
                    ))
                }
            };

        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let location = parse(&content)?;

        tracing::debug!(
            "Loaded scene from {} with {} item(s)",
            path.display(),
            location.items().len()
        );

        Ok(location)
    }
}
