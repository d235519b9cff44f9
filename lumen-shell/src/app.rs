use makepad_widgets::*;

use lumen_data::{Notice, NoticeQueue};
use lumen_widgets::{AppAction, AppRegistry, LumenApp, LumenAppData};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use lumen_widgets::theme::*;

    // Import app widgets from external app crates
    use lumen_models::screen::design::*;
    use lumen_appearance::screen::design::*;

    SidebarButton = <Button> {
        width: Fill, height: Fit
        padding: {top: 10, bottom: 10, left: 12, right: 12}
        margin: {bottom: 4}
        align: {x: 0.0, y: 0.5}

        animator: {
            hover = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 1.0} }
                }
            }
        }

        draw_bg: {
            instance hover: 0.0
            instance selected: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let color = mix(
                    mix(#0000, (ZINC_900), self.hover),
                    (ZINC_800),
                    self.selected
                );
                sdf.box(2.0, 2.0, self.rect_size.x - 4.0, self.rect_size.y - 4.0, 6.0);
                sdf.fill(color);
                return sdf.result;
            }
        }

        draw_text: {
            text_style: <FONT_MEDIUM>{ font_size: 12.0 }
            color: (GRAY_300)
        }
    }

    // Bottom-right notice; severity picks the accent stripe
    // 0 = info, 1 = success, 2 = error
    Toast = <View> {
        width: 360, height: Fit
        margin: 24
        padding: {left: 16, right: 16, top: 12, bottom: 12}
        visible: false
        show_bg: true
        draw_bg: {
            instance severity: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 8.0);
                sdf.fill((ZINC_800));

                let low = mix((ACCENT), (SUCCESS), step(0.5, self.severity));
                let stripe = mix(low, (DANGER), step(1.5, self.severity));
                sdf.rect(0.0, 0.0, 4.0, self.rect_size.y);
                sdf.fill(stripe);
                return sdf.result;
            }
        }

        toast_label = <Label> {
            width: Fill
            draw_text: {
                color: (TEXT_PRIMARY)
                text_style: <FONT_REGULAR>{ font_size: 10.5 }
                wrap: Word
            }
        }
    }

    App = {{App}} {
        ui: <Window> {
            window: { title: "Lumen", inner_size: vec2(1100, 760) }
            pass: {
                clear_color: (PANEL_BG)
            }

            body = <View> {
                width: Fill, height: Fill
                flow: Overlay
                align: {x: 1.0, y: 1.0}

                content = <View> {
                    width: Fill, height: Fill
                    flow: Right

                    sidebar = <View> {
                        width: 200, height: Fill
                        flow: Down
                        padding: {top: 24, left: 8, right: 8}
                        show_bg: true
                        draw_bg: { color: (ZINC_950) }

                        <Label> {
                            margin: {left: 12, bottom: 16}
                            text: "Lumen"
                            draw_text: {
                                color: (TEXT_PRIMARY)
                                text_style: <FONT_SEMIBOLD>{ font_size: 14.0 }
                            }
                        }

                        models_btn = <SidebarButton> { text: "Models" }
                        appearance_btn = <SidebarButton> { text: "Appearance" }
                    }

                    main_content = <View> {
                        width: Fill, height: Fill
                        flow: Overlay

                        models_app = <ModelsApp> {}
                        appearance_app = <AppearanceApp> { visible: false }
                    }
                }

                toast = <Toast> {}
            }
        }
    }
}

/// How long a notice stays on screen
const TOAST_SECONDS: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
enum NavigationTarget {
    #[default]
    Models,
    Appearance,
}

impl NavigationTarget {
    fn page_id(self) -> LiveId {
        match self {
            Self::Models => live_id!(models_app),
            Self::Appearance => live_id!(appearance_app),
        }
    }
}

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,
    /// Loaded once the live document is ready
    #[rust]
    app_data: Option<LumenAppData>,
    #[rust]
    registry: AppRegistry,
    #[rust]
    current_view: NavigationTarget,
    #[rust]
    notices: NoticeQueue,
    #[rust]
    toast_timer: Timer,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        if self.app_data.is_none() {
            self.app_data = Some(LumenAppData::load());

            self.registry.register(lumen_models::LumenModelsApp::info());
            self.registry.register(lumen_appearance::LumenAppearanceApp::info());
            ::log::info!("App initialized with {} apps", self.registry.apps().len());
        }
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        lumen_widgets::live_design(cx);
        // Register app widgets from external app crates via LumenApp trait
        <lumen_models::LumenModelsApp as LumenApp>::live_design(cx);
        <lumen_appearance::LumenAppearanceApp as LumenApp>::live_design(cx);
    }
}

impl MatchEvent for App {
    fn handle_startup(&mut self, cx: &mut Cx) {
        self.apply_view_state(cx, self.current_view);
    }

    fn handle_actions(&mut self, cx: &mut Cx, actions: &Actions) {
        if self.ui.button(ids!(body.content.sidebar.models_btn)).clicked(&actions) {
            self.navigate_to(cx, NavigationTarget::Models);
        }
        if self.ui.button(ids!(body.content.sidebar.appearance_btn)).clicked(&actions) {
            self.navigate_to(cx, NavigationTarget::Appearance);
        }

        for action in actions {
            if let AppAction::Notify(notice) = action.cast() {
                self.push_notice(cx, notice);
            }
        }
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        if self.toast_timer.is_event(event).is_some() {
            self.notices.advance();
            self.show_current_notice(cx);
        }

        // ui.handle_event must run before match_event so that the actions it
        // produces are seen by handle_actions
        match &mut self.app_data {
            Some(app_data) => {
                let scope = &mut Scope::with_data(app_data);
                self.ui.handle_event(cx, event, scope);
            }
            None => self.ui.handle_event(cx, event, &mut Scope::empty()),
        }

        self.match_event(cx, event);
    }
}

impl App {
    fn navigate_to(&mut self, cx: &mut Cx, target: NavigationTarget) {
        if self.current_view == target {
            return;
        }
        if let Some(app) = self.registry.find_by_page(target.page_id()) {
            ::log::info!("Navigating to {}", app.name);
        }
        self.current_view = target;
        self.apply_view_state(cx, target);
    }

    fn apply_view_state(&mut self, cx: &mut Cx, target: NavigationTarget) {
        self.ui.widget(ids!(body.content.main_content.models_app))
            .set_visible(cx, target == NavigationTarget::Models);
        self.ui.widget(ids!(body.content.main_content.appearance_app))
            .set_visible(cx, target == NavigationTarget::Appearance);

        self.ui.button(ids!(body.content.sidebar.models_btn)).apply_over(cx, live! {
            draw_bg: { selected: (if target == NavigationTarget::Models { 1.0 } else { 0.0 }) }
        });
        self.ui.button(ids!(body.content.sidebar.appearance_btn)).apply_over(cx, live! {
            draw_bg: { selected: (if target == NavigationTarget::Appearance { 1.0 } else { 0.0 }) }
        });

        self.ui.redraw(cx);
    }

    fn push_notice(&mut self, cx: &mut Cx, notice: Notice) {
        let replaces_current = notice.clear || self.notices.is_empty();
        self.notices.push(notice);
        if replaces_current {
            self.show_current_notice(cx);
        }
    }

    /// Show the head of the queue and restart the hide timer, or hide the
    /// toast when the queue is empty.
    fn show_current_notice(&mut self, cx: &mut Cx) {
        cx.stop_timer(self.toast_timer);
        let toast = self.ui.view(ids!(body.toast));

        match self.notices.current() {
            Some(notice) => {
                toast.label(ids!(toast_label)).set_text(cx, &notice.message);
                toast.apply_over(cx, live! {
                    draw_bg: { severity: (notice.severity.as_f64()) }
                });
                toast.set_visible(cx, true);
                self.toast_timer = cx.start_timeout(TOAST_SECONDS);
            }
            None => toast.set_visible(cx, false),
        }
        self.ui.redraw(cx);
    }
}

app_main!(App);
