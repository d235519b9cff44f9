//! Lumen Appearance App
//!
//! Display preferences stored on the server, currently the chat scrollbar.

pub mod screen;

use makepad_widgets::{Cx, live_id, LiveId};
use lumen_widgets::{LumenApp, AppInfo};

pub use screen::{AppearanceApp, AppearanceAppRef, ShowScrollbar, ShowScrollbarRef};

pub struct LumenAppearanceApp;

impl LumenApp for LumenAppearanceApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Appearance",
            id: "lumen-appearance",
            description: "Chat window display preferences",
            page_id: live_id!(appearance_app),
        }
    }

    fn live_design(cx: &mut Cx) {
        crate::screen::design::live_design(cx);
    }
}
