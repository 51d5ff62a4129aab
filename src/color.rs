//! Stable per-peer colors.
//!
//! Every origin identifier maps to a background color derived from its
//! string hash, plus a black or white foreground chosen so the label stays
//! legible on that background. The mapping is pure: the same identifier gets
//! the same colors in every process, on every run.

use std::fmt;

/// Luminance at or below which a background counts as dark.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 110.0;

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorValue {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl ColorValue {
    /// Pure white.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from the low 24 bits of `rgb` (`0xRRGGBB`).
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// `#rrggbb`, lowercase and zero-padded.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Perceived luminance, `0.2125 R + 0.7154 G + 0.0721 B`.
    pub fn luminance(self) -> f64 {
        0.2125 * f64::from(self.r) + 0.7154 * f64::from(self.g) + 0.0721 * f64::from(self.b)
    }

    /// Classify this color as a dark or light background.
    pub fn shade(self) -> Shade {
        if self.luminance() <= DARK_LUMINANCE_THRESHOLD {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<ColorValue> for ratatui::style::Color {
    fn from(value: ColorValue) -> Self {
        ratatui::style::Color::Rgb(value.r, value.g, value.b)
    }
}

/// Background classification (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Needs a light foreground.
    Dark,
    /// Needs a dark foreground.
    Light,
}

impl Shade {
    /// Returns true for dark backgrounds.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The foreground that contrasts with this shade.
    pub fn foreground(self) -> ColorValue {
        match self {
            Self::Dark => ColorValue::WHITE,
            Self::Light => ColorValue::BLACK,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Background plus contrasting foreground for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Hash-derived background.
    pub background: ColorValue,
    /// White on dark backgrounds, black on light ones.
    pub foreground: ColorValue,
}

impl ColorPair {
    /// Terminal style with this pair applied.
    pub fn style(self) -> ratatui::style::Style {
        ratatui::style::Style::default()
            .bg(self.background.into())
            .fg(self.foreground.into())
    }
}

/// 32-bit polynomial string hash (`h = 31 * h + unit`) over UTF-16 code
/// units, wrapping on overflow.
pub fn identity_hash(identity: &str) -> i32 {
    identity
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Derive the color pair for `identity`.
pub fn color_for(identity: &str) -> ColorPair {
    // Reinterpret the bits; only the low 24 are kept.
    let rgb = (identity_hash(identity) as u32) & 0x00ff_ffff;
    let background = ColorValue::from_rgb24(rgb);
    ColorPair {
        background,
        foreground: background.shade().foreground(),
    }
}
