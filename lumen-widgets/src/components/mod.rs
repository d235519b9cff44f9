use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use crate::theme::*;

    // ========================================================================
    // SHARED TEXT STYLES
    // ========================================================================

    // Section title: bold, 16px, white
    pub SectionTitle = <Label> {
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_SEMIBOLD>{ font_size: 16.0 }
        }
    }

    // Body text: regular, 11px, 60% white
    pub BodyText = <Label> {
        draw_text: {
            color: #ffffff99
            text_style: <FONT_REGULAR>{ font_size: 11.0 }
        }
    }

    // Inline text button used for "Read more" style links
    pub TextLinkButton = <Button> {
        width: Fit, height: Fit
        padding: 0
        draw_bg: {
            fn pixel(self) -> vec4 {
                return #0000;
            }
        }
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_SEMIBOLD>{ font_size: 10.0 }
        }
    }
}
