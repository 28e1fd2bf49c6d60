//! `localStorage`-backed showcase preferences.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use ui_kit::{ToastPosition, UiError};

/// Storage key for [`ShowcaseState`].
pub const STATE_KEY: &str = "ui_kit.showcase.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Showcase choices that survive a reload.
pub struct ShowcaseState {
    /// Dialog demo closes on backdrop clicks.
    pub dialog_overlay_dismiss: bool,
    /// Dialog demo closes on Escape.
    pub dialog_escape_dismiss: bool,
    /// Selected tab in the controlled tabs demo.
    pub controlled_tab: String,
    /// Last committed plan in the select demo.
    pub plan: String,
    /// Where the toast viewport sits.
    pub toast_position: ToastPosition,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            dialog_overlay_dismiss: true,
            dialog_escape_dismiss: true,
            controlled_tab: "overview".to_string(),
            plan: String::new(),
            toast_position: ToastPosition::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct LocalPrefs;

impl LocalPrefs {
    /// Raw JSON stored under `key`, if any.
    pub fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Stores `raw_json` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when localStorage is unavailable or the
    /// write is rejected.
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), UiError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or_else(|| UiError::Storage("localStorage unavailable".to_string()))?;
            storage
                .set_item(key, raw_json)
                .map_err(|err| UiError::Storage(format!("set_item failed: {}", ui_kit::js_message(&err))))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Loads and decodes a typed value; absent or malformed entries yield `None`.
    pub fn load_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
        decode(&self.load_json(key)?)
    }

    /// Encodes and stores a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding or the localStorage write fails.
    pub fn save_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), UiError> {
        let raw = serde_json::to_string(value).map_err(|err| UiError::Storage(err.to_string()))?;
        self.save_json(key, &raw)
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("discarding stored showcase state: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_state_keeps_defaults() {
        let state: ShowcaseState =
            decode(r#"{"dialog_escape_dismiss":false,"toast_position":"bottom-left"}"#).expect("decode");
        assert_eq!(
            state,
            ShowcaseState {
                dialog_escape_dismiss: false,
                toast_position: ToastPosition::BottomLeft,
                ..ShowcaseState::default()
            }
        );
    }

    #[test]
    fn malformed_state_is_discarded() {
        assert_eq!(decode::<ShowcaseState>("{not json"), None);
    }

    #[test]
    fn native_store_is_inert() {
        let prefs = LocalPrefs;
        assert_eq!(prefs.load_typed::<ShowcaseState>(STATE_KEY), None);
        assert!(prefs.save_typed(STATE_KEY, &ShowcaseState::default()).is_ok());
    }
}
