pub mod design;
pub mod model_card;

use std::sync::Arc;

use lumen_data::{CardSource, ClientConfig, ModelCatalog, ModelRef, ModelSelection, Notice};
use lumen_widgets::{AppAction, LumenAppData};
use makepad_widgets::*;

use self::model_card::{ModelCard, ModelCardAction};

live_design! {
    use link::theme::*;
    use link::widgets::*;
    use crate::screen::design::*;
}

#[derive(Live, LiveHook, Widget)]
pub struct ModelsApp {
    #[deref]
    pub view: View,

    #[rust]
    initialized: bool,

    #[rust]
    catalog: Arc<ModelCatalog>,

    /// One entry per card, catalog models first, then imported ones
    #[rust]
    sources: Vec<CardSource>,

    #[rust]
    selection: ModelSelection,
}

impl Widget for ModelsApp {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if !self.initialized {
            self.initialize(scope);
        }

        let actions = cx.capture_actions(|cx| {
            self.view.handle_event(cx, event, scope);
        });

        for action in actions.iter() {
            match action.cast() {
                ModelCardAction::Selected(id) => {
                    ::log::info!("Selected model {}", id);
                    self.selection.set_active(&id);
                    self.view.redraw(cx);
                }
                ModelCardAction::Uninstall(id) => self.uninstall(cx, &id),
                ModelCardAction::None => {}
            }

            // Notices from cards go on to the shell
            if let AppAction::Notify(notice) = action.cast() {
                cx.action(AppAction::Notify(notice));
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let models_list_uid = self.view.portal_list(ids!(models_list)).widget_uid();

        while let Some(widget) = self.view.draw_walk(cx, scope, walk).step() {
            if widget.widget_uid() == models_list_uid {
                self.draw_models_list(cx, scope, widget);
            }
        }

        DrawStep::done()
    }
}

impl ModelsApp {
    fn initialize(&mut self, scope: &mut Scope) {
        let (config, catalog) = match scope.data.get::<LumenAppData>() {
            Some(data) => (data.config.clone(), data.catalog.clone()),
            None => (ClientConfig::load(), Arc::new(ModelCatalog::load())),
        };

        self.sources = catalog
            .models
            .iter()
            .map(|info| CardSource::Catalog(ModelRef::new(info.id.clone())))
            .chain(config.custom_models.iter().cloned().map(CardSource::Custom))
            .collect();

        let on_disk = config
            .installed_models
            .iter()
            .cloned()
            .chain(config.custom_models.iter().map(|info| info.id.clone()));
        self.selection = ModelSelection::new(on_disk);
        self.catalog = catalog;
        self.initialized = true;

        ::log::info!(
            "Models screen: {} catalog, {} imported",
            self.catalog.models.len(),
            config.custom_models.len()
        );
    }

    fn uninstall(&mut self, cx: &mut Cx, id: &str) {
        if !self.selection.uninstall(id) {
            ::log::warn!("Uninstall ignored, {} is not downloaded", id);
            return;
        }

        // Imported models only exist locally, so they leave the list too
        self.sources.retain(|source| !(source.is_custom() && source.id() == id));

        cx.action(AppAction::Notify(Notice::success(format!("Uninstalled {}", id))));
        self.view.redraw(cx);
    }

    fn draw_models_list(&mut self, cx: &mut Cx2d, scope: &mut Scope, widget: WidgetRef) {
        let binding = widget.as_portal_list();
        let Some(mut list) = binding.borrow_mut() else { return };

        list.set_item_range(cx, 0, self.sources.len());

        while let Some(item_id) = list.next_visible_item(cx) {
            let Some(source) = self.sources.get(item_id) else { continue };

            let item = list.item(cx, item_id, live_id!(Card));
            if let Some(mut card) = item.borrow_mut::<ModelCard>() {
                let flags = self.selection.flags_for(source.id());
                card.set_card(self.catalog.clone(), source.clone(), flags);
            }
            item.draw_all(cx, scope);
        }
    }

    pub fn start_download(&mut self, cx: &mut Cx, id: &str) {
        self.selection.start_download(id);
        self.view.redraw(cx);
    }

    pub fn finish_download(&mut self, cx: &mut Cx, success: bool) {
        self.selection.finish_download(success);
        self.view.redraw(cx);
    }
}

impl ModelsAppRef {
    pub fn start_download(&self, cx: &mut Cx, id: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.start_download(cx, id);
        }
    }

    pub fn finish_download(&self, cx: &mut Cx, success: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.finish_download(cx, success);
        }
    }
}
