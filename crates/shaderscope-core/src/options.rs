//! Display configuration for the inspector panel.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inspect::DEFAULT_MAX_CHARS;

/// Options shared by every widget of the inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    /// Panel heading.
    pub title: String,

    /// Initial panel width in points.
    pub default_width: f32,

    /// Characters shown before a uniform value is cut off.
    pub max_value_chars: usize,

    /// Whether expanded rows list the geometry of each mesh.
    pub show_geometries: bool,

    /// Whether texture uniforms show an image preview.
    pub show_texture_previews: bool,

    /// Edge length of texture previews in points.
    pub preview_size: f32,

    /// Dock the panel on the right edge instead of the left.
    pub anchor_right: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: "Programs".to_string(),
            default_width: 320.0,
            max_value_chars: DEFAULT_MAX_CHARS,
            show_geometries: true,
            show_texture_previews: true,
            preview_size: 64.0,
            anchor_right: true,
        }
    }
}

impl PanelOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::info!("loaded panel options from {}", path.display());
        Ok(options)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShaderscopeError;

    #[test]
    fn test_defaults() {
        let options = PanelOptions::default();
        assert_eq!(options.max_value_chars, 30);
        assert!(options.show_geometries);
    }

    #[test]
    fn test_partial_json() {
        let options = PanelOptions::from_json_str(r#"{ "max_value_chars": 12, "anchor_right": false }"#).unwrap();
        assert_eq!(options.max_value_chars, 12);
        assert!(!options.anchor_right);
        assert_eq!(options.title, "Programs");
    }

    #[test]
    fn test_json_round_trip() {
        let options = PanelOptions {
            title: "Shaders".to_string(),
            ..PanelOptions::default()
        };
        let parsed = PanelOptions::from_json_str(&options.to_json().unwrap()).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_bad_json() {
        let err = PanelOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ShaderscopeError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PanelOptions::load("/nonexistent/shaderscope.json").unwrap_err();
        assert!(matches!(err, ShaderscopeError::IoError(_)));
    }
}
