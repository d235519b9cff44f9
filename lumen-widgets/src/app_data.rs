//! # LumenAppData - Scope-Injected App Data
//!
//! The shell owns one `LumenAppData` and injects it into the scope:
//! ```ignore
//! let scope = &mut Scope::with_data(&mut self.app_data);
//! self.ui.handle_event(cx, event, scope);
//! ```
//!
//! Apps read it back with `scope.data.get::<LumenAppData>()`. Mutations the
//! shell must see (toasts) go through [`AppAction`] instead.

use std::sync::Arc;

use lumen_data::{AdminClient, ClientConfig, ModelCatalog, Notice, PreferenceStore};
use makepad_widgets::*;

/// Data injected into app scope
#[derive(Clone)]
pub struct LumenAppData {
    pub config: ClientConfig,
    pub catalog: Arc<ModelCatalog>,
    /// Remote system preferences (admin API)
    pub preference_store: Arc<dyn PreferenceStore>,
}

impl LumenAppData {
    pub fn new(config: ClientConfig, catalog: ModelCatalog) -> Self {
        ::log::info!(
            "App data: {} catalog models, admin API at {}",
            catalog.models.len(),
            config.api_base_url
        );
        let preference_store: Arc<dyn PreferenceStore> = Arc::new(AdminClient::from_config(&config));
        Self {
            config,
            catalog: Arc::new(catalog),
            preference_store,
        }
    }

    /// Load configuration and catalog from disk.
    pub fn load() -> Self {
        Self::new(ClientConfig::load(), ModelCatalog::load())
    }
}

/// Actions apps post for the shell to handle
#[derive(Clone, Debug, DefaultNone)]
pub enum AppAction {
    /// Show a transient toast
    Notify(Notice),
    None,
}
