use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Browser window unavailable")]
    WindowUnavailable,

    #[error("Document error: {0}")]
    Document(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid theme value: {0:?}")]
    InvalidTheme(String),

    #[error("Toggle control not found: #{0}")]
    MissingControl(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<ThemeError> for String {
    fn from(err: ThemeError) -> Self {
        err.to_string()
    }
}

/// Message carried by a thrown JS value, if it is a string.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ThemeError::MissingControl("theme-toggle-button".into()).to_string(),
            "Toggle control not found: #theme-toggle-button"
        );
        assert_eq!(
            ThemeError::InvalidTheme("blue".into()).to_string(),
            "Invalid theme value: \"blue\""
        );
    }

    #[test]
    fn test_into_string() {
        let s: String = ThemeError::Storage("quota exceeded".into()).into();
        assert_eq!(s, "Storage error: quota exceeded");
    }
}
