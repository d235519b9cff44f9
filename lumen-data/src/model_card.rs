//! View-model for a model card.
//!
//! Everything the card widget renders is derived here from a [`CardSource`],
//! the [`ModelCatalog`] and the card's [`CardFlags`]. The widget only copies
//! the result into labels and toggles visibility.

use std::borrow::Cow;

use crate::catalog::{ModelCatalog, ModelInfo};
use crate::notice::Notice;
use crate::text::middle_truncate;

/// Active cards truncate their name to this many characters.
pub const ACTIVE_NAME_LIMIT: usize = 15;

pub const DISABLED_CLICK_MESSAGE: &str = "You cannot change models while downloading a model. \
Cancel your download first by clicking on the progress bar in the top right";

const MULTIMODAL_TAG: &str = "text-and-vision";

// ─── Source ───────────────────────────────────────────────────────────────────

/// Reference to a catalog model by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub id: String,
    /// Modality tag carried by the reference; falls back to the catalog entry's
    pub tag: Option<String>,
}

impl ModelRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), tag: None }
    }
}

/// Where a card gets its metadata from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSource {
    /// Looked up by id in the catalog
    Catalog(ModelRef),
    /// User-imported model with its own metadata
    Custom(ModelInfo),
}

impl CardSource {
    pub fn id(&self) -> &str {
        match self {
            Self::Catalog(model) => &model.id,
            Self::Custom(info) => &info.id,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Display metadata for this card, `None` when a catalog id is unknown.
    pub fn resolve<'a>(&'a self, catalog: &'a ModelCatalog) -> Option<&'a ModelInfo> {
        match self {
            Self::Catalog(model) => catalog.get(&model.id),
            Self::Custom(info) => Some(info),
        }
    }

    fn tag<'a>(&'a self, resolved: &'a ModelInfo) -> Option<&'a str> {
        match self {
            Self::Catalog(model) => model.tag.as_deref().or(resolved.tag.as_deref()),
            Self::Custom(info) => info.tag.as_deref(),
        }
    }
}

// ─── Flags ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardFlags {
    /// Selection is blocked (another model is downloading)
    pub disabled: bool,
    pub is_active: bool,
    pub downloaded: bool,
    pub downloading: bool,
}

/// Result of clicking the card body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Forward to the selection handler
    Select,
    /// Swallow the click and show this notice
    Blocked(Notice),
}

/// Control shown at the bottom-right of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingControl {
    Uninstall,
    Spinner,
    /// Invisible, keeps the card height stable
    Placeholder,
}

impl CardFlags {
    pub fn click(&self) -> ClickOutcome {
        if self.disabled {
            ClickOutcome::Blocked(Notice::info(DISABLED_CLICK_MESSAGE).clearing())
        } else {
            ClickOutcome::Select
        }
    }

    pub fn trailing_control(&self) -> TrailingControl {
        if self.downloaded {
            TrailingControl::Uninstall
        } else if self.downloading {
            TrailingControl::Spinner
        } else {
            TrailingControl::Placeholder
        }
    }
}

// ─── Modality ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Multimodal,
    TextOnly,
}

impl Modality {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(MULTIMODAL_TAG) => Self::Multimodal,
            _ => Self::TextOnly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Multimodal => "Multimodal",
            Self::TextOnly => "Text only",
        }
    }

    /// Shader-friendly value for the badge color (0=text, 1=multimodal)
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Multimodal => 1.0,
            Self::TextOnly => 0.0,
        }
    }
}

// ─── Card View ────────────────────────────────────────────────────────────────

/// Fully resolved card contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub info: &'a ModelInfo,
    pub name: Cow<'a, str>,
    pub subtitle: &'static str,
    pub modality: Modality,
    pub trailing: TrailingControl,
    pub is_active: bool,
    pub is_custom: bool,
}

impl<'a> CardView<'a> {
    /// Builds the card contents, or `None` when there is nothing to render.
    pub fn build(source: &'a CardSource, catalog: &'a ModelCatalog, flags: CardFlags) -> Option<Self> {
        let Some(info) = source.resolve(catalog) else {
            log::debug!("No catalog entry for model {}, card not rendered", source.id());
            return None;
        };

        let name = if flags.is_active {
            middle_truncate(&info.name, ACTIVE_NAME_LIMIT)
        } else {
            Cow::Borrowed(info.name.as_str())
        };

        Some(Self {
            info,
            name,
            subtitle: if source.is_custom() { "Imported locally" } else { "Compiled by Ollama" },
            modality: Modality::from_tag(source.tag(info)),
            trailing: flags.trailing_control(),
            is_active: flags.is_active,
            is_custom: source.is_custom(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Severity;

    fn catalog() -> ModelCatalog {
        ModelCatalog {
            version: "1".into(),
            models: vec![
                ModelInfo {
                    id: "llama3.2:3b".into(),
                    name: "Meta Llama 3.2 Instruct 3B".into(),
                    size: "2.0GB".into(),
                    description: "Small model".into(),
                    licenses: Vec::new(),
                    tag: None,
                },
                ModelInfo {
                    id: "llava:7b".into(),
                    name: "LLaVA".into(),
                    size: "4.7GB".into(),
                    description: "Vision".into(),
                    licenses: Vec::new(),
                    tag: Some("text-and-vision".into()),
                },
            ],
        }
    }

    #[test]
    fn test_unknown_catalog_model_renders_nothing() {
        let catalog = catalog();
        for id in ["", "llama3.2", "missing:1b"] {
            let source = CardSource::Catalog(ModelRef::new(id));
            assert!(CardView::build(&source, &catalog, CardFlags::default()).is_none());
        }
    }

    #[test]
    fn test_custom_model_bypasses_catalog() {
        let catalog = ModelCatalog::default();
        let source = CardSource::Custom(ModelInfo {
            id: "my-gguf".into(),
            name: "My GGUF".into(),
            size: "3GB".into(),
            description: String::new(),
            licenses: Vec::new(),
            tag: None,
        });
        let view = CardView::build(&source, &catalog, CardFlags::default()).unwrap();
        assert_eq!(view.name, "My GGUF");
        assert_eq!(view.subtitle, "Imported locally");
        assert!(view.is_custom);
    }

    #[test]
    fn test_active_card_truncates_name() {
        let catalog = catalog();
        let source = CardSource::Catalog(ModelRef::new("llama3.2:3b"));

        let inactive = CardView::build(&source, &catalog, CardFlags::default()).unwrap();
        assert_eq!(inactive.name, "Meta Llama 3.2 Instruct 3B");
        assert_eq!(inactive.subtitle, "Compiled by Ollama");

        let flags = CardFlags { is_active: true, ..Default::default() };
        let active = CardView::build(&source, &catalog, flags).unwrap();
        assert_eq!(active.name.chars().count(), ACTIVE_NAME_LIMIT);
        assert!(active.is_active);
    }

    #[test]
    fn test_click_blocked_while_disabled() {
        let flags = CardFlags { disabled: true, ..Default::default() };
        match flags.click() {
            ClickOutcome::Blocked(notice) => {
                assert_eq!(notice.severity, Severity::Info);
                assert!(notice.clear);
                assert_eq!(notice.message, DISABLED_CLICK_MESSAGE);
            }
            ClickOutcome::Select => panic!("disabled card must not select"),
        }
        assert_eq!(CardFlags::default().click(), ClickOutcome::Select);
    }

    #[test]
    fn test_trailing_control_precedence() {
        let both = CardFlags { downloaded: true, downloading: true, ..Default::default() };
        assert_eq!(both.trailing_control(), TrailingControl::Uninstall);

        let downloading = CardFlags { downloading: true, ..Default::default() };
        assert_eq!(downloading.trailing_control(), TrailingControl::Spinner);

        assert_eq!(CardFlags::default().trailing_control(), TrailingControl::Placeholder);
    }

    #[test]
    fn test_modality_badge() {
        assert_eq!(Modality::from_tag(None), Modality::TextOnly);
        assert_eq!(Modality::from_tag(Some("text-and-vision")), Modality::Multimodal);
        assert_eq!(Modality::from_tag(Some("text")), Modality::TextOnly);
        assert_eq!(Modality::from_tag(Some("")), Modality::TextOnly);
        assert_eq!(Modality::from_tag(Some("Text-And-Vision")), Modality::TextOnly);
        assert_eq!(Modality::Multimodal.label(), "Multimodal");
        assert_eq!(Modality::TextOnly.label(), "Text only");
    }

    #[test]
    fn test_reference_tag_overrides_catalog_tag() {
        let catalog = catalog();

        let from_catalog = CardSource::Catalog(ModelRef::new("llava:7b"));
        let view = CardView::build(&from_catalog, &catalog, CardFlags::default()).unwrap();
        assert_eq!(view.modality, Modality::Multimodal);

        let tagged = CardSource::Catalog(ModelRef {
            id: "llama3.2:3b".into(),
            tag: Some("text-and-vision".into()),
        });
        let view = CardView::build(&tagged, &catalog, CardFlags::default()).unwrap();
        assert_eq!(view.modality, Modality::Multimodal);
    }
}
