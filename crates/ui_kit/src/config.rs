//! Library-wide widget defaults, loadable from JSON and shared through context.

use leptos::{provide_context, use_context};
use serde::{Deserialize, Serialize};

use crate::widgets::ToastPosition;
use crate::UiError;

const DEFAULT_ID_PREFIX: &str = "ui";
const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Defaults applied when a widget prop is omitted.
pub struct UiConfig {
    /// Prefix for generated control ids (`{prefix}-{n}`).
    pub id_prefix: String,
    /// Dialog dismissal defaults.
    pub dialog: DialogDefaults,
    /// Toast timing and placement defaults.
    pub toast: ToastDefaults,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            dialog: DialogDefaults::default(),
            toast: ToastDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Dialog dismissal defaults.
pub struct DialogDefaults {
    /// Close when the overlay outside the panel is clicked.
    pub close_on_overlay_click: bool,
    /// Close when Escape is pressed while open.
    pub close_on_escape: bool,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            close_on_overlay_click: true,
            close_on_escape: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Toast defaults.
pub struct ToastDefaults {
    /// Auto-dismiss delay; `None` keeps toasts until dismissed.
    pub duration_ms: Option<u64>,
    /// Screen corner/edge for the toast viewport.
    pub position: ToastPosition,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            position: ToastPosition::default(),
        }
    }
}

impl UiConfig {
    /// Parses a JSON config document. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config = serde_json::from_str::<Self>(raw)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        let prefix = self.id_prefix.trim();
        self.id_prefix = if prefix.is_empty() {
            DEFAULT_ID_PREFIX.to_string()
        } else {
            prefix.to_string()
        };
        self
    }
}

/// Installs `config` for every widget rendered below the current owner.
pub fn provide_ui_config(config: UiConfig) {
    provide_context(config.normalized());
}

/// Returns the nearest provided config, or the built-in defaults.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
