//! Client configuration.
//!
//! Read from `~/.lumen/config.json`, then overridden by `LUMEN_API_BASE` and
//! `LUMEN_API_TOKEN`. A missing file means defaults.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::catalog::ModelInfo;

pub const ENV_API_BASE: &str = "LUMEN_API_BASE";
pub const ENV_API_TOKEN: &str = "LUMEN_API_TOKEN";

const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the admin API, including any path prefix
    pub api_base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Catalog ids already present on this machine
    pub installed_models: Vec<String>,
    /// User-imported models shown next to the catalog
    pub custom_models: Vec<ModelInfo>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            api_token: None,
            installed_models: Vec::new(),
            custom_models: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Load from disk and environment. Never fails; problems are logged.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ClientConfig: using defaults: {:#}", e);
                Self::default()
            }),
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());

        if let Err(e) = config.validate() {
            log::warn!("ClientConfig: {:#}, falling back to {}", e, DEFAULT_API_BASE);
            config.api_base_url = DEFAULT_API_BASE.to_string();
        }
        config
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing config")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    /// Apply environment-style overrides. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = base.trim().to_string();
        }
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.api_token = Some(token.trim().to_string());
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.api_base_url)
            .with_context(|| format!("invalid api_base_url {:?}", self.api_base_url))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => bail!("unsupported api_base_url scheme {:?}", other),
        }
    }

    /// `~/.lumen/config.json`
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".lumen").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ClientConfig {
            api_base_url: "https://chat.example.com/api".into(),
            installed_models: vec!["gemma2:2b".into()],
            ..ClientConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(ClientConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"installed_models":["qwen2.5:7b"]}"#).unwrap();
        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.installed_models, ["qwen2.5:7b"]);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_BASE, " http://10.0.0.2:3001/api "),
            (ENV_API_TOKEN, ""),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_base_url, "http://10.0.0.2:3001/api");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = ClientConfig::default();
        assert!(config.validate().is_ok());

        config.api_base_url = "not a url".into();
        assert!(config.validate().is_err());

        config.api_base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());
    }
}
