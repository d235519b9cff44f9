//! System preferences exchanged with the admin API.
//!
//! Reads return the whole settings object; writes send only the keys being
//! changed and rely on the server to keep the rest.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /admin/system-preferences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemPreferences {
    #[serde(default)]
    pub settings: Option<SystemSettings>,
}

/// The settings object. Only the keys this app edits are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    #[serde(default)]
    pub show_scrollbar: Option<bool>,
    /// Everything else the server sends, kept verbatim
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Partial update body for `POST /admin/system-preferences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_scrollbar: Option<bool>,
}

impl SettingsPatch {
    pub fn show_scrollbar(value: bool) -> Self {
        Self { show_scrollbar: Some(value) }
    }
}

/// Remote store for system preferences.
///
/// Calls block; run them off the UI thread (see [`crate::PreferenceWorker`]).
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when the server has no preferences to report.
    fn read(&self) -> anyhow::Result<Option<SystemPreferences>>;

    fn write(&self, patch: &SettingsPatch) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_set_keys() {
        let json = serde_json::to_string(&SettingsPatch::show_scrollbar(true)).unwrap();
        assert_eq!(json, r#"{"show_scrollbar":true}"#);
        assert_eq!(serde_json::to_string(&SettingsPatch::default()).unwrap(), "{}");
    }

    #[test]
    fn test_read_tolerates_missing_settings() {
        let prefs: SystemPreferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.settings.is_none());

        let prefs: SystemPreferences = serde_json::from_str(r#"{"settings":null}"#).unwrap();
        assert!(prefs.settings.is_none());
    }

    #[test]
    fn test_unknown_settings_are_kept() {
        let json = r#"{"settings":{"show_scrollbar":true,"max_embed_chunk_size":1000}}"#;
        let prefs: SystemPreferences = serde_json::from_str(json).unwrap();
        let settings = prefs.settings.unwrap();
        assert_eq!(settings.show_scrollbar, Some(true));
        assert_eq!(settings.other.get("max_embed_chunk_size"), Some(&Value::from(1000)));
    }
}
