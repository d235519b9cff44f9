//! Model Catalog: JSON-driven list of downloadable models
//!
//! Entries are defined in a bundled `catalog.json` and can be overridden /
//! extended by a user-local file at `~/.lumen/catalog.json`.
//!
//! Cards never match catalog entries by shape; they look them up by id through
//! [`ModelCatalog::get`].

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ─── Model Info ───────────────────────────────────────────────────────────────

/// A license document attached to a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub link: String,
}

/// Display metadata for one model.
///
/// Catalog models get this from [`ModelCatalog`]; custom models carry their
/// own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Stable unique identifier (e.g. "llama3.2:3b")
    pub id: String,
    /// Display name
    pub name: String,
    /// Human-readable size string (e.g. "2.0GB")
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub licenses: Vec<License>,
    /// Modality tag, "text-and-vision" for multimodal models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

// ─── Catalog ──────────────────────────────────────────────────────────────────

/// The full model catalog.
///
/// Load order:
/// 1. Bundled JSON (compiled into the binary via `include_str!`)
/// 2. User override at `~/.lumen/catalog.json` (merged on top)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub version: String,
    pub models: Vec<ModelInfo>,
}

/// Bundled default catalog JSON
const BUNDLED_CATALOG: &str = include_str!("catalog.json");

impl ModelCatalog {
    /// Parse the compiled-in catalog.
    pub fn bundled() -> anyhow::Result<Self> {
        serde_json::from_str(BUNDLED_CATALOG).context("parsing bundled catalog.json")
    }

    /// Load catalog: bundled defaults merged with the user override.
    pub fn load() -> Self {
        let mut catalog = Self::bundled().unwrap_or_else(|e| {
            log::error!("ModelCatalog: {:#}", e);
            Self::default()
        });

        if let Some(path) = Self::override_path() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(user_catalog) => {
                        catalog.merge(user_catalog);
                        log::info!("ModelCatalog: merged user override from {:?}", path);
                    }
                    Err(e) => {
                        log::warn!("ModelCatalog: ignoring user override: {:#}", e);
                    }
                }
            }
        }

        log::info!("ModelCatalog: loaded {} models", catalog.models.len());
        catalog
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Merge another catalog on top: existing ids are replaced,
    /// new ids are appended.
    pub fn merge(&mut self, other: ModelCatalog) {
        for incoming in other.models {
            if let Some(existing) = self.models.iter_mut().find(|m| m.id == incoming.id) {
                *existing = incoming;
            } else {
                self.models.push(incoming);
            }
        }
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id == id)
    }

    /// `~/.lumen/catalog.json`
    fn override_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".lumen").join("catalog.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn info(id: &str, name: &str) -> ModelInfo {
        ModelInfo {
            id: id.to_string(),
            name: name.to_string(),
            size: "1GB".to_string(),
            description: String::new(),
            licenses: Vec::new(),
            tag: None,
        }
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = ModelCatalog::bundled().unwrap();
        assert!(!catalog.models.is_empty());
        let vision = catalog.get("llama3.2-vision:11b").unwrap();
        assert_eq!(vision.tag.as_deref(), Some("text-and-vision"));
    }

    #[test]
    fn test_get_is_exact_match() {
        let catalog = ModelCatalog {
            version: "1".into(),
            models: vec![info("gemma2:2b", "Gemma")],
        };
        assert!(catalog.get("gemma2:2b").is_some());
        assert!(catalog.get("gemma2").is_none());
        assert!(catalog.get("GEMMA2:2B").is_none());
    }

    #[test]
    fn test_merge_replaces_and_appends() {
        let mut catalog = ModelCatalog {
            version: "1".into(),
            models: vec![info("a", "Old A"), info("b", "B")],
        };
        catalog.merge(ModelCatalog {
            version: "2".into(),
            models: vec![info("a", "New A"), info("c", "C")],
        });

        let names: Vec<_> = catalog.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["New A", "B", "C"]);
    }

    #[test]
    fn test_from_file_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ModelCatalog::from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing catalog"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"version":"1","models":[{"id":"x","name":"X"}]}"#;
        let catalog: ModelCatalog = serde_json::from_str(json).unwrap();
        let x = catalog.get("x").unwrap();
        assert!(x.licenses.is_empty());
        assert!(x.tag.is_none());
        assert_eq!(x.description, "");
    }
}
