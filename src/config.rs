use std::str::FromStr;

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::error::ThemeError;
use crate::theme::Theme;

/// Id of the element whose text holds the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle-button";

/// Element whose class list carries the theme marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerTarget {
    /// The `<html>` element.
    #[default]
    Root,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub control_id: String,
    pub default_theme: Theme,
    pub marker_target: MarkerTarget,
    /// When set, the toggle is rendered into this element instead of
    /// attaching to existing markup.
    pub mount_id: Option<String>,
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            control_id: DEFAULT_CONTROL_ID.to_string(),
            default_theme: Theme::Light,
            marker_target: MarkerTarget::Root,
            mount_id: None,
            log_level: "info".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig =
            serde_json::from_str(json).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::Config("storage_key must not be empty".into()));
        }
        if self.control_id.trim().is_empty() {
            return Err(ThemeError::Config("control_id must not be empty".into()));
        }
        if matches!(self.mount_id.as_deref(), Some(id) if id.trim().is_empty()) {
            return Err(ThemeError::Config("mount_id must not be empty when set".into()));
        }
        Ok(())
    }

    /// Console log level; unknown names fall back to info.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}

/// Read the configuration embedded in the page, if any.
pub fn load_from_document(document: &Document) -> Result<ThemeConfig, ThemeError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) if !text.trim().is_empty() => ThemeConfig::from_json(&text),
        _ => Ok(ThemeConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.control_id, "theme-toggle-button");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.marker_target, MarkerTarget::Root);
        assert!(config.mount_id.is_none());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ThemeConfig::from_json(r#"{"marker_target": "body", "mount_id": "nav-theme"}"#)
            .unwrap();
        assert_eq!(config.marker_target, MarkerTarget::Body);
        assert_eq!(config.mount_id.as_deref(), Some("nav-theme"));
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_default_theme_parsed() {
        let config = ThemeConfig::from_json(r#"{"default_theme": "dark"}"#).unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert!(ThemeConfig::from_json(r#"{"default_theme": "sepia"}"#).is_err());
    }

    #[test]
    fn test_rejects_empty_identifiers() {
        let err = ThemeConfig::from_json(r#"{"storage_key": " "}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(ThemeConfig::from_json(r#"{"control_id": ""}"#).is_err());
        assert!(ThemeConfig::from_json(r#"{"mount_id": ""}"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = ThemeConfig::from_json("{storage_key").unwrap_err();
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_log_level() {
        let mut config = ThemeConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
