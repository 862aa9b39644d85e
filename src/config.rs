use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Options for a [`Sequential`](crate::models::Sequential) container, loaded
/// from a TOML or JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label used in log output.
    pub name: String,
    /// Emit one debug line per layer with its output shape during forward
    /// and backward passes.
    pub log_shapes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "sequential".to_string(),
            log_shapes: false,
        }
    }
}

impl Config {
    /// Load configuration from the given path.  Files ending in `.json` are
    /// parsed as JSON, everything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }
}
