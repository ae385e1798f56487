//! Colors used by the window chrome.

use stylepad_core::Rgb;

pub mod colors {
    use iced::Color;

    pub const BG_EDITOR: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BG_MENU: Color = Color::from_rgb(0.96, 0.96, 0.97);
    pub const BG_STYLE_BAR: Color = Color::from_rgb(0.90, 0.90, 0.98);
    pub const BG_HOVER: Color = Color::from_rgb(0.86, 0.86, 0.93);
    pub const BG_MODAL: Color = Color::from_rgb(0.98, 0.98, 0.99);
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

    pub const TEXT_DEFAULT: Color = Color::from_rgb(0.0, 0.0, 0.0);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.35, 0.35, 0.40);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.60);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.40, 0.85);
    pub const ERROR: Color = Color::from_rgb(0.75, 0.22, 0.22);
    pub const SELECTION: Color = Color::from_rgba(0.36, 0.40, 0.85, 0.30);
    pub const BORDER: Color = Color::from_rgb(0.80, 0.80, 0.86);
}

/// Converts a style color to an iced color.
pub fn to_iced(color: Rgb) -> iced::Color {
    iced::Color::from_rgb8(color.r, color.g, color.b)
}
