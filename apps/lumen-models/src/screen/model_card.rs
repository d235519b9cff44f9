use std::sync::Arc;

use lumen_data::{
    open_licenses, CardFlags, CardSource, CardView, ClickOutcome, DescriptionControl,
    DescriptionState, ModelCatalog, SystemLinkOpener, TrailingControl,
};
use lumen_widgets::AppAction;
use makepad_widgets::*;

/// Radians the spinner advances per frame
const SPINNER_STEP: f64 = 0.12;

#[derive(Clone, Debug, DefaultNone)]
pub enum ModelCardAction {
    /// Card body clicked while enabled
    Selected(String),
    Uninstall(String),
    None,
}

#[derive(Live, LiveHook, Widget)]
pub struct ModelCard {
    #[deref]
    view: View,

    #[rust]
    catalog: Arc<ModelCatalog>,

    #[rust]
    source: Option<CardSource>,

    #[rust]
    flags: CardFlags,

    #[rust]
    description: DescriptionState,

    #[rust]
    spinner_angle: f64,
}

impl Widget for ModelCard {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if let Event::NextFrame(_) = event {
            self.step_spinner(cx);
        }

        let actions = cx.capture_actions(|cx| {
            self.view.handle_event(cx, event, scope);
        });

        let Some(source) = &self.source else { return };
        let model_id = source.id().to_string();

        // Nested controls are checked before the card body and return early,
        // so a press on any of them never selects the model.
        if self.view.button(ids!(uninstall_button)).clicked(&actions) {
            ::log::info!("Uninstall requested for {}", model_id);
            cx.action(ModelCardAction::Uninstall(model_id));
            return;
        }

        if self.view.button(ids!(description_toggle)).clicked(&actions) {
            let Some(info) = source.resolve(&self.catalog) else { return };
            match self.description.view(info).control {
                DescriptionControl::ViewLicenses => {
                    open_licenses(&SystemLinkOpener, &info.licenses);
                }
                DescriptionControl::ReadMore | DescriptionControl::ShowLess => {
                    self.description.toggle();
                    self.view.redraw(cx);
                }
            }
            return;
        }

        if self.view.button(ids!(license_button)).clicked(&actions) {
            if let Some(info) = source.resolve(&self.catalog) {
                open_licenses(&SystemLinkOpener, &info.licenses);
            }
            return;
        }

        if let Some(fe) = self.view.view(ids!(card)).finger_up(&actions) {
            if fe.is_over {
                match self.flags.click() {
                    ClickOutcome::Select => cx.action(ModelCardAction::Selected(model_id)),
                    ClickOutcome::Blocked(notice) => cx.action(AppAction::Notify(notice)),
                }
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let Some(source) = &self.source else {
            return DrawStep::done();
        };
        let Some(card) = CardView::build(source, &self.catalog, self.flags) else {
            return DrawStep::done();
        };

        let view = &self.view;
        let description = self.description.view(card.info);

        view.view(ids!(card)).apply_over(cx, live! {
            draw_bg: { active: (if card.is_active { 1.0 } else { 0.0 }) }
        });

        let initial: String = card.info.name.chars().take(1).flat_map(char::to_uppercase).collect();
        view.label(ids!(avatar_label)).set_text(cx, &initial);
        view.view(ids!(avatar)).apply_over(cx, live! {
            draw_bg: { custom: (if card.is_custom { 1.0 } else { 0.0 }) }
        });

        view.label(ids!(model_name)).set_text(cx, &card.name);
        view.label(ids!(model_size)).set_text(cx, &card.info.size);
        view.label(ids!(subtitle)).set_text(cx, card.subtitle);
        view.view(ids!(active_pill)).set_visible(cx, card.is_active);

        let text = if description.truncated {
            format!("{}…", description.text)
        } else {
            description.text.to_string()
        };
        view.label(ids!(description)).set_text(cx, &text);
        view.button(ids!(description_toggle)).set_text(cx, description.control.label());
        view.view(ids!(license_row)).set_visible(cx, description.show_license_button);

        let multimodal = card.modality.as_f64();
        view.view(ids!(modality_badge)).apply_over(cx, live! {
            draw_bg: { multimodal: (multimodal) }
        });
        view.label(ids!(modality_label)).set_text(cx, card.modality.label());
        view.label(ids!(modality_label)).apply_over(cx, live! {
            draw_text: { multimodal: (multimodal) }
        });

        view.view(ids!(uninstall_container)).set_visible(cx, card.trailing == TrailingControl::Uninstall);
        view.view(ids!(spinner)).set_visible(cx, card.trailing == TrailingControl::Spinner);
        view.view(ids!(placeholder)).set_visible(cx, card.trailing == TrailingControl::Placeholder);

        if card.trailing == TrailingControl::Spinner {
            cx.new_next_frame();
        }

        self.view.draw_walk(cx, scope, walk)
    }
}

impl ModelCard {
    /// Point this card at a model. Switching to a different model collapses
    /// the description.
    pub fn set_card(&mut self, catalog: Arc<ModelCatalog>, source: CardSource, flags: CardFlags) {
        let same_model = self.source.as_ref().map(CardSource::id) == Some(source.id());
        if !same_model {
            self.description.collapse();
        }
        self.catalog = catalog;
        self.source = Some(source);
        self.flags = flags;
    }

    fn step_spinner(&mut self, cx: &mut Cx) {
        if self.source.is_none() || self.flags.trailing_control() != TrailingControl::Spinner {
            return;
        }
        self.spinner_angle = (self.spinner_angle + SPINNER_STEP) % std::f64::consts::TAU;
        self.view.view(ids!(spinner)).apply_over(cx, live! {
            draw_bg: { angle: (self.spinner_angle) }
        });
        self.view.redraw(cx);
    }
}

impl ModelCardRef {
    pub fn set_card(&self, catalog: Arc<ModelCatalog>, source: CardSource, flags: CardFlags) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_card(catalog, source, flags);
        }
    }
}
