use makepad_widgets::*;

use super::ModelsApp;
use super::model_card::ModelCard;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use lumen_widgets::theme::*;
    use lumen_widgets::components::*;

    // Square avatar with the model's initial
    // custom: 0.0 = catalog model, 1.0 = imported locally
    ModelAvatar = <View> {
        width: 28, height: 28
        align: {x: 0.5, y: 0.5}
        show_bg: true
        draw_bg: {
            instance custom: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 6.0);
                sdf.fill(mix(#ffffff, #c4b5fd, self.custom));
                return sdf.result;
            }
        }

        avatar_label = <Label> {
            draw_text: {
                color: (ZINC_950)
                text_style: <FONT_SEMIBOLD>{ font_size: 11.0 }
            }
        }
    }

    // "Multimodal" / "Text only"
    // multimodal: 0.0 = text only, 1.0 = multimodal
    ModalityBadge = <View> {
        width: Fit, height: Fit
        padding: {left: 8, right: 8, top: 2, bottom: 2}
        show_bg: true
        draw_bg: {
            instance multimodal: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, self.rect_size.y * 0.5);
                let tint = mix((BADGE_TEXT_ONLY), (BADGE_MULTIMODAL), self.multimodal);
                sdf.fill(vec4(tint.xyz, 0.1));
                return sdf.result;
            }
        }

        modality_label = <Label> {
            draw_text: {
                instance multimodal: 0.0
                fn get_color(self) -> vec4 {
                    return mix((BADGE_TEXT_ONLY), (BADGE_MULTIMODAL), self.multimodal);
                }
                text_style: <FONT_REGULAR>{ font_size: 9.0 }
            }
        }
    }

    // Indeterminate spinner, rotated from Rust via `angle`
    Spinner = <View> {
        width: 20, height: 20
        show_bg: true
        draw_bg: {
            instance angle: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let c = self.rect_size * 0.5;
                let r = c.x - 2.0;
                sdf.circle(c.x, c.y, r);
                sdf.stroke(#ffffff33, 2.0);
                sdf.circle(c.x + cos(self.angle) * r, c.y + sin(self.angle) * r, 2.5);
                sdf.fill(#ffffff);
                return sdf.result;
            }
        }
    }

    // Small document glyph next to "View Licenses"
    FileIcon = <View> {
        width: 12, height: 14
        margin: {right: 4}
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 1.5);
                sdf.stroke((LINK_BLUE), 1.2);
                sdf.move_to(3.5, 5.5);
                sdf.line_to(self.rect_size.x - 3.5, 5.5);
                sdf.move_to(3.5, 8.5);
                sdf.line_to(self.rect_size.x - 3.5, 8.5);
                sdf.stroke((LINK_BLUE), 1.0);
                return sdf.result;
            }
        }
    }

    UninstallButton = <Button> {
        width: Fit, height: 24
        padding: {left: 8, right: 8}
        text: "Uninstall"
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
            pressed = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 1.0} }
                }
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, self.rect_size.y * 0.5 - 1.0);
                sdf.fill(mix(mix(#0000, #ffffff14, self.hover), #ffffff29, self.pressed));
                sdf.stroke(#ffffff, 1.0);
                return sdf.result;
            }
        }
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_REGULAR>{ font_size: 9.0 }
        }
    }

    // Model card
    // Widget hierarchy:
    //   ModelCard
    //   └── card (clickable body, accent border when active)
    //       ├── header: avatar, name + size, subtitle, "Active" pill
    //       ├── description_section: text + inline control
    //       ├── license_row (expanded only): icon + "View Licenses"
    //       └── footer: modality badge, trailing control
    pub ModelCard = {{ModelCard}} {
        width: Fit, height: Fit
        margin: {bottom: 12}

        card = <View> {
            width: 300, height: Fit
            flow: Down
            padding: 12
            cursor: Hand

            // White border on hover, accent border when active
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

            show_bg: true
            draw_bg: {
                instance active: 0.0
                instance hover: 0.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 8.0);
                    sdf.fill_keep((ZINC_900));
                    let idle = mix(#0000, (WHITE), self.hover);
                    sdf.stroke(mix(idle, (ACCENT), self.active), 2.0);
                    return sdf.result;
                }
            }

            header = <View> {
                width: Fill, height: Fit
                flow: Right
                align: {y: 0.5}
                spacing: 9

                avatar = <ModelAvatar> {}

                <View> {
                    width: Fill, height: Fit
                    flow: Down
                    spacing: 2

                    <View> {
                        width: Fill, height: Fit
                        flow: Right
                        spacing: 4

                        model_name = <Label> {
                            draw_text: {
                                color: (TEXT_PRIMARY)
                                text_style: <FONT_SEMIBOLD>{ font_size: 11.0 }
                            }
                        }
                        model_size = <Label> {
                            draw_text: {
                                color: (TEXT_SECONDARY)
                                text_style: <FONT_REGULAR>{ font_size: 11.0 }
                            }
                        }
                    }

                    subtitle = <Label> {
                        draw_text: {
                            color: (TEXT_SECONDARY)
                            text_style: <FONT_ITALIC>{ font_size: 8.0 }
                        }
                    }
                }

                active_pill = <View> {
                    width: Fit, height: Fit
                    padding: {left: 8, right: 8, top: 4, bottom: 4}
                    visible: false
                    show_bg: true
                    draw_bg: {
                        fn pixel(self) -> vec4 {
                            let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                            sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, self.rect_size.y * 0.5);
                            sdf.fill((ACCENT));
                            return sdf.result;
                        }
                    }
                    <Label> {
                        text: "Active"
                        draw_text: {
                            color: (ZINC_950)
                            text_style: <FONT_SEMIBOLD>{ font_size: 9.0 }
                        }
                    }
                }
            }

            description_section = <View> {
                width: Fill, height: Fit
                flow: Down
                padding: {top: 8, bottom: 8}
                spacing: 2

                description = <Label> {
                    width: Fill
                    draw_text: {
                        color: (GRAY_400)
                        text_style: <FONT_REGULAR>{ font_size: 9.5 }
                        wrap: Word
                    }
                }

                description_toggle = <TextLinkButton> {
                    text: "Read more"
                }
            }

            license_row = <View> {
                width: Fit, height: Fit
                flow: Right
                align: {y: 0.5}
                margin: {bottom: 8}
                visible: false

                <FileIcon> {}
                license_button = <TextLinkButton> {
                    text: "View Licenses"
                    draw_text: {
                        color: (LINK_BLUE)
                        text_style: <FONT_REGULAR>{ font_size: 9.5 }
                    }
                }
            }

            footer = <View> {
                width: Fill, height: 24
                flow: Right
                align: {y: 0.5}

                modality_badge = <ModalityBadge> {}

                <View> { width: Fill, height: 1 }

                uninstall_container = <View> {
                    width: Fit, height: Fit
                    visible: false
                    uninstall_button = <UninstallButton> {}
                }

                spinner = <Spinner> { visible: false }

                // Keeps the footer height when no control is shown
                placeholder = <View> { width: 60, height: 24 }
            }
        }
    }

    // Main widget
    pub ModelsApp = {{ModelsApp}} {
        width: Fill, height: Fill
        flow: Down
        padding: {left: 24, right: 24, top: 24}

        show_bg: true
        draw_bg: { color: (PANEL_BG) }

        <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 4
            margin: {bottom: 16}

            <SectionTitle> { text: "Models" }
            models_hint = <BodyText> {
                text: "Select the model used for chat. Downloaded models can be uninstalled."
            }
        }

        models_list = <PortalList> {
            width: Fill, height: Fill
            flow: Down

            Card = <ModelCard> {}
        }
    }
}
