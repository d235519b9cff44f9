use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // ========================================================================
    // FONTS
    // Built on the Makepad theme fonts so no font files need bundling
    // ========================================================================

    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_MEDIUM = <THEME_FONT_REGULAR> {}
    pub FONT_SEMIBOLD = <THEME_FONT_BOLD> {}
    pub FONT_ITALIC = <THEME_FONT_ITALIC> {}

    // ========================================================================
    // COLORS
    // ========================================================================

    pub WHITE = #ffffff
    pub ZINC_950 = #09090b
    pub ZINC_900 = #18181b
    pub ZINC_800 = #27272a
    pub GRAY_300 = #d1d5db
    pub GRAY_400 = #9ca3af

    pub TEXT_PRIMARY = #ffffff
    pub TEXT_SECONDARY = #d1d5db

    // Active card border, "Active" pill, info toasts
    pub ACCENT = #46c8ff
    pub LINK_BLUE = #58a6ff
    pub SUCCESS = #bdf04f
    pub DANGER = #ef4444

    // Modality badges
    pub BADGE_MULTIMODAL = #bdf04f
    pub BADGE_TEXT_ONLY = #f4ffd0

    pub PANEL_BG = #0e0f11
}
