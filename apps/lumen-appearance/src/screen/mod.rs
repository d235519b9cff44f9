pub mod design;

use std::sync::Arc;

use lumen_data::{
    AdminClient, ClientConfig, PreferenceEvent, PreferenceStore, PreferenceWorker, ScrollbarToggle,
};
use lumen_widgets::LumenAppData;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::widgets::*;
    use crate::screen::design::*;
}

/// "Show Scrollbar" row. Reads the remote value once on first event and
/// writes every change back, reverting if the write fails.
#[derive(Live, LiveHook, Widget)]
pub struct ShowScrollbar {
    #[deref]
    view: View,

    #[rust]
    toggle: ScrollbarToggle,

    /// Created on first event; `None` until then
    #[rust]
    worker: Option<PreferenceWorker>,
}

impl Widget for ShowScrollbar {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if self.worker.is_none() {
            let store = Self::preference_store(scope);
            let mut worker = PreferenceWorker::new(store);
            worker.spawn_load();
            self.worker = Some(worker);
            cx.new_next_frame();
        }

        let actions = cx.capture_actions(|cx| {
            self.view.handle_event(cx, event, scope);
        });

        if self.view.button(ids!(scrollbar_switch)).clicked(&actions) {
            let checked = !self.toggle.is_checked();
            if let Some(patch) = self.toggle.begin_toggle(checked) {
                ::log::info!("Show scrollbar -> {}", checked);
                if let Some(worker) = &mut self.worker {
                    worker.spawn_save(patch);
                }
                cx.new_next_frame();
                self.view.redraw(cx);
            }
        }

        if let Event::NextFrame(_) = event {
            self.poll_worker(cx);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let checked = if self.toggle.is_checked() { 1.0 } else { 0.0 };
        let enabled = if self.toggle.is_enabled() { 1.0 } else { 0.0 };
        self.view.button(ids!(scrollbar_switch)).apply_over(cx, live! {
            draw_bg: { checked: (checked), enabled: (enabled) }
        });

        self.view.draw_walk(cx, scope, walk)
    }
}

impl ShowScrollbar {
    fn preference_store(scope: &mut Scope) -> Arc<dyn PreferenceStore> {
        match scope.data.get::<LumenAppData>() {
            Some(data) => data.preference_store.clone(),
            None => {
                ::log::debug!("No app data in scope, using configured admin API");
                Arc::new(AdminClient::from_config(&ClientConfig::load()))
            }
        }
    }

    /// Drain finished background calls, then keep polling while any remain.
    fn poll_worker(&mut self, cx: &mut Cx) {
        let Some(worker) = &mut self.worker else { return };

        let mut changed = false;
        while let Some(event) = worker.try_next() {
            match event {
                PreferenceEvent::Loaded(result) => self.toggle.apply_loaded(result),
                PreferenceEvent::Saved(result) => self.toggle.finish_save(result),
            }
            changed = true;
        }

        if worker.is_busy() {
            cx.new_next_frame();
        }
        if changed {
            self.view.redraw(cx);
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct AppearanceApp {
    #[deref]
    pub view: View,
}

impl Widget for AppearanceApp {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}
