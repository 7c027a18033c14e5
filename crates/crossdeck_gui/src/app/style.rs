//! Theme constants and style application for the egui app.

use super::CrossdeckApp;
use crate::surface::theme::ThemeMode;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xE5, 0x70, 0x00);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0xCE, 0x42, 0x2B);
pub(super) const COLOR_STATUS: Color32 = Color32::from_rgb(0xE3, 0xB3, 0x41);

/// Panel colors that follow the active theme.
#[derive(Clone, Copy)]
pub(super) struct ChromeColors {
    pub(super) bg_primary: Color32,
    pub(super) bg_secondary: Color32,
    pub(super) bg_tertiary: Color32,
    pub(super) text_primary: Color32,
    pub(super) text_secondary: Color32,
    pub(super) text_muted: Color32,
    pub(super) border: Color32,
}

const DARK_CHROME: ChromeColors = ChromeColors {
    bg_primary: Color32::from_rgb(0x0d, 0x11, 0x17),
    bg_secondary: Color32::from_rgb(0x16, 0x1b, 0x22),
    bg_tertiary: Color32::from_rgb(0x21, 0x26, 0x29),
    text_primary: Color32::from_rgb(0xc9, 0xd1, 0xd9),
    text_secondary: Color32::from_rgb(0x8b, 0x94, 0x9e),
    text_muted: Color32::from_rgb(0x6e, 0x76, 0x81),
    border: Color32::from_rgb(0x30, 0x36, 0x3d),
};

const LIGHT_CHROME: ChromeColors = ChromeColors {
    bg_primary: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_secondary: Color32::from_rgb(0xf3, 0xf4, 0xf6),
    bg_tertiary: Color32::from_rgb(0xe5, 0xe7, 0xeb),
    text_primary: Color32::from_rgb(0x1f, 0x23, 0x28),
    text_secondary: Color32::from_rgb(0x4b, 0x55, 0x63),
    text_muted: Color32::from_rgb(0x6b, 0x72, 0x80),
    border: Color32::from_rgb(0xd0, 0xd7, 0xde),
};

pub(super) fn chrome(mode: ThemeMode) -> ChromeColors {
    match mode {
        ThemeMode::Dark => DARK_CHROME,
        ThemeMode::Light => LIGHT_CHROME,
    }
}

fn widget(bg: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

impl CrossdeckApp {
    /// Applies visuals for the current theme; a no-op until the theme changes.
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        let mode = self.surface.theme();
        if self.applied_theme == Some(mode) {
            return;
        }
        let colors = chrome(mode);

        let mut style = (*ctx.style()).clone();
        style.visuals = match mode {
            ThemeMode::Dark => Visuals::dark(),
            ThemeMode::Light => Visuals::light(),
        };
        style.visuals.override_text_color = Some(colors.text_primary);
        style.visuals.window_fill = colors.bg_primary;
        style.visuals.panel_fill = colors.bg_secondary;
        style.visuals.extreme_bg_color = colors.bg_primary;
        style.visuals.faint_bg_color = colors.bg_tertiary;
        style.visuals.window_stroke = Stroke::new(1.0, colors.border);
        style.visuals.hyperlink_color = COLOR_ACCENT;

        style.visuals.widgets.noninteractive =
            widget(colors.bg_secondary, colors.border, colors.text_secondary, 0.0);
        style.visuals.widgets.inactive =
            widget(colors.bg_tertiary, colors.border, colors.text_primary, 0.0);
        style.visuals.widgets.hovered =
            widget(COLOR_ACCENT_HOVER, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
        style.visuals.widgets.active = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
        style.visuals.widgets.open = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 34.0;
        style.spacing.menu_margin = Margin::same(8);
        style.spacing.combo_width = 180.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(22.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Small, FontId::new(13.0, FontFamily::Proportional));

        ctx.set_style(style);
        self.applied_theme = Some(mode);
    }
}
