pub mod theme;
pub mod app_trait;
pub mod app_data;
pub mod components;

pub use app_trait::{LumenApp, AppInfo, AppRegistry};
pub use app_data::{LumenAppData, AppAction};

use makepad_widgets::Cx;

/// Register all shared widgets with Makepad.
///
/// This function must be called during app initialization, typically in `LiveRegister::live_register`.
///
/// **Important**: Theme is registered first as the shared components use its font and color definitions.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
    components::live_design(cx);
}
