//! Global text style.
//!
//! ## Learning: Newtypes with Validation
//!
//! `FontSize` can only hold one of the sizes the size selector offers.
//! Serde goes through `TryFrom<u16>`, so a config file naming any other size
//! fails to parse instead of producing a value the UI cannot display.

use serde::{Deserialize, Serialize};

/// Family used when nothing else is configured.
pub const DEFAULT_FAMILY: &str = "Arial";

/// A point size from the fixed selector set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontSize(u16);

impl FontSize {
    /// Every size the size selector offers, ascending.
    pub const ALL: [FontSize; 11] = [
        FontSize(12),
        FontSize(14),
        FontSize(16),
        FontSize(18),
        FontSize(20),
        FontSize(24),
        FontSize(28),
        FontSize(32),
        FontSize(36),
        FontSize(40),
        FontSize(44),
    ];

    pub const DEFAULT: FontSize = FontSize(18);

    /// Returns the size if it belongs to the selector set.
    pub fn new(points: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.0 == points)
    }

    pub fn points(&self) -> u16 {
        self.0
    }

    /// Size as the float the renderer expects.
    pub fn as_f32(&self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for FontSize {
    type Error = InvalidFontSize;

    fn try_from(points: u16) -> Result<Self, Self::Error> {
        Self::new(points).ok_or(InvalidFontSize(points))
    }
}

impl From<FontSize> for u16 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A size outside the selector set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported font size {0}")]
pub struct InvalidFontSize(pub u16);

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Swatches offered by the color prompt.
    pub const PRESETS: [Rgb; 10] = [
        Rgb::new(0, 0, 0),
        Rgb::new(90, 90, 90),
        Rgb::new(200, 40, 40),
        Rgb::new(230, 120, 20),
        Rgb::new(200, 170, 0),
        Rgb::new(40, 150, 60),
        Rgb::new(20, 140, 160),
        Rgb::new(40, 80, 200),
        Rgb::new(120, 60, 180),
        Rgb::new(200, 60, 140),
    ];

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// The style applied to the entire buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Font family name
    pub family: String,

    /// Point size
    pub size: FontSize,

    /// Foreground color, `None` for the theme's text color
    pub color: Option<Rgb>,
}

impl Style {
    pub fn new(family: impl Into<String>, size: FontSize, color: Option<Rgb>) -> Self {
        Self {
            family: family.into(),
            size,
            color,
        }
    }

    /// Returns the font to render the whole buffer with.
    pub fn descriptor(&self) -> StyleDescriptor<'_> {
        StyleDescriptor {
            family: &self.family,
            size: self.size,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, FontSize::DEFAULT, None)
    }
}

/// Family and size of the buffer font.
///
/// Weight and slant are not part of the style state; the buffer is always
/// rendered plain (regular weight, upright).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor<'a> {
    pub family: &'a str,
    pub size: FontSize,
}

impl std::fmt::Display for StyleDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)
    }
}
