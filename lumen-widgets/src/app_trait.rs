//! # LumenApp Trait - Plugin App Interface
//!
//! Apps are separate crates that implement [`LumenApp`]. The shell imports and
//! registers them via `live_design(cx)` calls, then uses their screen widgets
//! in its own `live_design!` block.
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! use lumen_widgets::LumenApp;
//! use lumen_models::LumenModelsApp;
//!
//! fn live_register(cx: &mut Cx) {
//!     makepad_widgets::live_design(cx);
//!     lumen_widgets::live_design(cx);
//!     <LumenModelsApp as LumenApp>::live_design(cx);
//! }
//! ```

use makepad_widgets::{Cx, LiveId};

/// Metadata about a registered app
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in the sidebar
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    pub description: &'static str,
    /// Page/screen LiveId for navigation
    pub page_id: LiveId,
}

/// Trait for apps that integrate with the Lumen shell
pub trait LumenApp {
    /// Returns metadata about this app
    fn info() -> AppInfo where Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of all installed apps
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    pub fn register(&mut self, info: AppInfo) {
        self.apps.push(info);
    }

    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    pub fn find_by_page(&self, page_id: LiveId) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.page_id == page_id)
    }

}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use makepad_widgets::live_id;

    fn info(id: &'static str, page_id: LiveId) -> AppInfo {
        AppInfo {
            name: id,
            id,
            description: "",
            page_id,
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = AppRegistry::new();
        registry.register(info("lumen-models", live_id!(models_app)));
        registry.register(info("lumen-appearance", live_id!(appearance_app)));

        assert_eq!(registry.apps().len(), 2);
        assert_eq!(
            registry.find_by_page(live_id!(appearance_app)).map(|a| a.id),
            Some("lumen-appearance")
        );
        assert!(registry.find_by_page(live_id!(chat_app)).is_none());
    }
}
