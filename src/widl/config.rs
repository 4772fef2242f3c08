//! Configuration for parsing and markup
//!
//! `defaults/widl.default.yaml` documents every setting and is embedded so the
//! documented defaults can be checked against [`Config::default`]. User files
//! may be YAML or JSON and may leave out any key.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_YAML: &str = include_str!("../../defaults/widl.default.yaml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config file extension: {0}")]
    UnsupportedExtension(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub markup: MarkupConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub diagnostics: bool,
    pub legacy_notes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            diagnostics: true,
            legacy_notes: false,
        }
    }
}

/// Element and class names used by the HTML marker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub element: String,
    pub class_prefix: String,
    pub construct_class: String,
    pub type_class: String,
    pub type_name_class: String,
    pub name_class: String,
    pub keyword_class: String,
    pub enum_value_class: String,
    pub escape: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            element: "span".to_string(),
            class_prefix: "idl-".to_string(),
            construct_class: "construct".to_string(),
            type_class: "type".to_string(),
            type_name_class: "type-name".to_string(),
            name_class: "name".to_string(),
            keyword_class: "keyword".to_string(),
            enum_value_class: "enum-value".to_string(),
            escape: true,
        }
    }
}

impl Config {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a `.yaml`/`.yml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedExtension(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let config = Config::from_yaml_str(DEFAULT_YAML).expect("defaults to deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml_str("parser:\n  legacy_notes: true\nmarkup:\n  element: code\n")
            .expect("config to parse");
        assert!(config.parser.legacy_notes);
        assert!(config.parser.diagnostics);
        assert_eq!(config.markup.element, "code");
        assert_eq!(config.markup.class_prefix, "idl-");
    }

    #[test]
    fn json_config() {
        let config = Config::from_json_str(r#"{"markup": {"escape": false}}"#)
            .expect("config to parse");
        assert!(!config.markup.escape);
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").expect("empty config"), Config::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = Config::from_yaml_str("parser: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn unsupported_extension() {
        let path = std::env::temp_dir().join("widl-config-test.toml");
        std::fs::write(&path, "parser = {}").expect("temp file to be writable");
        let result = Config::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedExtension(ext)) if ext == "toml"));
    }
}
