use makepad_widgets::*;

use super::{AppearanceApp, ShowScrollbar};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use lumen_widgets::theme::*;
    use lumen_widgets::components::*;

    // Pill switch drawn on a text-less button
    // checked: knob on the right, accent track
    // enabled: 0.0 while a save is in flight (dimmed)
    SwitchButton = <Button> {
        width: 36, height: 20
        padding: 0
        text: ""
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on  = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance checked: 0.0
            instance enabled: 1.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let r = self.rect_size.y * 0.5;
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, r);
                let off_c = mix((ZINC_800), #52525b, self.hover * self.enabled);
                sdf.fill(mix(off_c, (ACCENT), self.checked));

                let knob_x = mix(r, self.rect_size.x - r, self.checked);
                sdf.circle(knob_x, r, r - 3.0);
                sdf.fill((WHITE));

                return mix(sdf.result * 0.45, sdf.result, self.enabled);
            }
        }
    }

    pub ShowScrollbar = {{ShowScrollbar}} {
        width: Fill, height: Fit
        flow: Right
        align: {y: 0.5}
        padding: {top: 12, bottom: 12}
        spacing: 16

        <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 4

            heading = <Label> {
                text: "Show Scrollbar"
                draw_text: {
                    color: (TEXT_PRIMARY)
                    text_style: <FONT_SEMIBOLD>{ font_size: 11.0 }
                }
            }
            <BodyText> { text: "Enable or disable the scrollbar in the chat window" }
        }

        scrollbar_switch = <SwitchButton> {}
    }

    pub AppearanceApp = {{AppearanceApp}} {
        width: Fill, height: Fill
        flow: Down
        padding: {left: 24, right: 24, top: 24}

        show_bg: true
        draw_bg: { color: (PANEL_BG) }

        <SectionTitle> { text: "Appearance" }

        <View> {
            width: Fill, height: 1
            margin: {top: 12, bottom: 4}
            show_bg: true
            draw_bg: { color: (ZINC_800) }
        }

        show_scrollbar = <ShowScrollbar> {}
    }
}
