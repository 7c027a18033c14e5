//! Surface colors for light and dark themes, plus the decoration artwork.

use eframe::egui::{Color32, ColorImage};

/// Light or dark surface palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Every color the renderer paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub cell_space: Color32,
    pub cell_wrapper: Color32,
    pub cell_default: Color32,
    pub cell_selected: Color32,
    pub cell_correct: Color32,
    pub cell_incorrect: Color32,
    pub placeholder: Color32,
    /// Translucent overlay for the active sentence.
    pub active_tint: Color32,
    pub border_empty: Color32,
    pub border_default: Color32,
    pub border_active: Color32,
    pub border_correct: Color32,
    pub border_incorrect: Color32,
    pub letter: Color32,
    pub number: Color32,
    pub wrapper_text: Color32,
    pub selection_outline: Color32,
    pub tooltip_fill: Color32,
    pub tooltip_text: Color32,
    pub tooltip_border: Color32,
}

const DARK: Palette = Palette {
    background: Color32::from_rgb(0x0d, 0x11, 0x17),
    cell_space: Color32::from_rgb(0x1b, 0x21, 0x29),
    cell_wrapper: Color32::from_rgb(0x16, 0x1b, 0x22),
    cell_default: Color32::from_rgb(0x21, 0x26, 0x2d),
    cell_selected: Color32::from_rgb(0x1f, 0x3a, 0x5f),
    cell_correct: Color32::from_rgb(0x17, 0x3d, 0x2a),
    cell_incorrect: Color32::from_rgb(0x4a, 0x1c, 0x1c),
    placeholder: Color32::from_rgb(0x30, 0x36, 0x3d),
    active_tint: Color32::from_rgba_premultiplied(0x2a, 0x1a, 0x00, 0x30),
    border_empty: Color32::from_rgb(0x16, 0x1b, 0x22),
    border_default: Color32::from_rgb(0x30, 0x36, 0x3d),
    border_active: Color32::from_rgb(0xE5, 0x70, 0x00),
    border_correct: Color32::from_rgb(0x3f, 0xb9, 0x50),
    border_incorrect: Color32::from_rgb(0xf8, 0x51, 0x49),
    letter: Color32::from_rgb(0xc9, 0xd1, 0xd9),
    number: Color32::from_rgb(0x8b, 0x94, 0x9e),
    wrapper_text: Color32::from_rgb(0x8b, 0x94, 0x9e),
    selection_outline: Color32::from_rgb(0x3B, 0x82, 0xF6),
    tooltip_fill: Color32::from_rgb(0x16, 0x1b, 0x22),
    tooltip_text: Color32::from_rgb(0xc9, 0xd1, 0xd9),
    tooltip_border: Color32::from_rgb(0x30, 0x36, 0x3d),
};

const LIGHT: Palette = Palette {
    background: Color32::from_rgb(0xf6, 0xf8, 0xfa),
    cell_space: Color32::from_rgb(0xea, 0xee, 0xf2),
    cell_wrapper: Color32::from_rgb(0xf0, 0xf3, 0xf6),
    cell_default: Color32::WHITE,
    cell_selected: Color32::from_rgb(0xdd, 0xf4, 0xff),
    cell_correct: Color32::from_rgb(0xda, 0xfb, 0xe1),
    cell_incorrect: Color32::from_rgb(0xff, 0xeb, 0xe9),
    placeholder: Color32::from_rgb(0xd0, 0xd7, 0xde),
    active_tint: Color32::from_rgba_premultiplied(0x30, 0x1c, 0x00, 0x30),
    border_empty: Color32::from_rgb(0xea, 0xee, 0xf2),
    border_default: Color32::from_rgb(0xd0, 0xd7, 0xde),
    border_active: Color32::from_rgb(0xCE, 0x42, 0x2B),
    border_correct: Color32::from_rgb(0x1a, 0x7f, 0x37),
    border_incorrect: Color32::from_rgb(0xcf, 0x22, 0x2e),
    letter: Color32::from_rgb(0x1f, 0x23, 0x28),
    number: Color32::from_rgb(0x65, 0x6d, 0x76),
    wrapper_text: Color32::from_rgb(0x65, 0x6d, 0x76),
    selection_outline: Color32::from_rgb(0x09, 0x69, 0xda),
    tooltip_fill: Color32::WHITE,
    tooltip_text: Color32::from_rgb(0x1f, 0x23, 0x28),
    tooltip_border: Color32::from_rgb(0xd0, 0xd7, 0xde),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}

/// Side length of the generated decoration texture.
pub const DECORATION_TEXTURE_SIZE: usize = 96;

/// Diagonal two-tone stripes drawn into the reserved placeholder block.
pub fn decoration_image(mode: ThemeMode) -> ColorImage {
    let (base, stripe) = match mode {
        ThemeMode::Dark => ([0x21, 0x26, 0x2d], [0xE5, 0x70, 0x00]),
        ThemeMode::Light => ([0xea, 0xee, 0xf2], [0xCE, 0x42, 0x2B]),
    };
    let size = DECORATION_TEXTURE_SIZE;
    let mut rgba = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let band = (x + y) / 12 % 2 == 0;
            let fade = (y as f32 / size as f32) * 0.5 + 0.5;
            let color = if band { stripe } else { base };
            rgba.extend(color.iter().map(|c| (*c as f32 * fade) as u8));
            rgba.push(0xff);
        }
    }
    ColorImage::from_rgba_unmultiplied([size, size], &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_per_mode() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Dark).background,
            Palette::for_mode(ThemeMode::Light).background
        );
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn decoration_image_is_square_and_opaque() {
        let image = decoration_image(ThemeMode::Light);
        assert_eq!(image.size, [DECORATION_TEXTURE_SIZE, DECORATION_TEXTURE_SIZE]);
        assert!(image.pixels.iter().all(|pixel| pixel.a() == 0xff));
    }
}
