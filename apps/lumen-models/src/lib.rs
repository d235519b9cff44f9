//! Lumen Models App
//!
//! Model cards for the catalog and user-imported models.

pub mod screen;

use makepad_widgets::{Cx, live_id, LiveId};
use lumen_widgets::{LumenApp, AppInfo};

pub use screen::{ModelsApp, ModelsAppRef};
pub use screen::model_card::{ModelCard, ModelCardAction, ModelCardRef};

pub struct LumenModelsApp;

impl LumenApp for LumenModelsApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Models",
            id: "lumen-models",
            description: "Choose, inspect and uninstall language models",
            page_id: live_id!(models_app),
        }
    }

    fn live_design(cx: &mut Cx) {
        crate::screen::design::live_design(cx);
    }
}
