pub mod admin_client;
pub mod catalog;
pub mod config;
pub mod description;
pub mod links;
pub mod model_card;
pub mod notice;
pub mod preference_worker;
pub mod preferences;
pub mod scrollbar_toggle;
pub mod selection;
pub mod text;

pub use admin_client::AdminClient;
pub use catalog::{License, ModelCatalog, ModelInfo};
pub use config::ClientConfig;
pub use description::{DescriptionControl, DescriptionState, DescriptionView, TRUNCATION_LIMIT};
pub use links::{open_licenses, LinkOpener, SystemLinkOpener};
pub use model_card::{
    CardFlags, CardSource, CardView, ClickOutcome, Modality, ModelRef, TrailingControl,
};
pub use notice::{Notice, NoticeQueue, Severity};
pub use preference_worker::{PreferenceEvent, PreferenceWorker};
pub use preferences::{PreferenceStore, SettingsPatch, SystemPreferences, SystemSettings};
pub use scrollbar_toggle::{SaveState, ScrollbarToggle};
pub use selection::ModelSelection;
pub use text::{middle_truncate, truncate_chars};
