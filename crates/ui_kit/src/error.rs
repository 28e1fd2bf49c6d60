//! Environmental failures surfaced by DOM helpers and configuration loading.
//!
//! Widgets themselves never fail; these errors are logged by the component
//! that hit them and the widget degrades instead of panicking.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
/// Failure raised while touching page-level browser state or loading config.
pub enum UiError {
    /// No `window` global is reachable (non-browser host).
    #[error("browser window is not available")]
    MissingWindow,
    /// The window has no document attached.
    #[error("document is not available")]
    MissingDocument,
    /// The document has no `<body>` element yet.
    #[error("document body is not available")]
    MissingBody,
    /// The browser rejected an inline style write.
    #[error("failed to update body style `{property}`: {message}")]
    Style {
        /// CSS property being written.
        property: &'static str,
        /// Browser-supplied failure text.
        message: String,
    },
    /// A config payload could not be parsed.
    #[error("invalid ui config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// Browser storage was unavailable or rejected a read/write.
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl UiError {
    pub(crate) fn style(property: &'static str, err: JsValue) -> Self {
        Self::Style {
            property,
            message: js_message(&err),
        }
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_and_render() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let err = UiError::from(err);
        assert!(err.to_string().starts_with("invalid ui config:"));
    }

    #[test]
    fn style_error_names_the_property() {
        let err = UiError::Style {
            property: "overflow",
            message: "blocked".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to update body style `overflow`: blocked"
        );
    }
}
