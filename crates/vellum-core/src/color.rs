use crate::error::{Error, Result};
use std::fmt;

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// ```
/// use vellum_core::Color;
///
/// let orange = Color::from_hex(0xFF8800);
/// assert_eq!(orange.to_css(), "#ff8800");
/// assert_eq!(Color::parse("#f80").unwrap(), orange);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0-255 mapped to 0.0-1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb_u8(r, g, b)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            input: input.to_string(),
        };
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digits = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        match hex.len() {
            3 => {
                let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
                Ok(Self::from_rgb_u8(
                    expand(digits >> 8),
                    expand(digits >> 4),
                    expand(digits),
                ))
            }
            6 => Ok(Self::from_hex(digits)),
            8 => Ok(Self::from_rgba_u8(
                (digits >> 24) as u8,
                (digits >> 16) as u8,
                (digits >> 8) as u8,
                digits as u8,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgba_u8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// CSS form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_rgba_u8();
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, crate::value::format_number(self.a as f64))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Named series colors. Tokens double as class modifiers (`--blue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Blue,
    Green,
    Orange,
    Red,
    Violet,
    Teal,
    Gray,
}

impl Palette {
    /// Series colors in assignment order.
    pub const SERIES: [Palette; 6] = [
        Palette::Blue,
        Palette::Orange,
        Palette::Green,
        Palette::Violet,
        Palette::Red,
        Palette::Teal,
    ];

    /// Color for the `index`-th series, cycling through [`Palette::SERIES`].
    pub fn series(index: usize) -> Self {
        Self::SERIES[index % Self::SERIES.len()]
    }

    pub fn token(&self) -> &'static str {
        match self {
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Orange => "orange",
            Palette::Red => "red",
            Palette::Violet => "violet",
            Palette::Teal => "teal",
            Palette::Gray => "gray",
        }
    }

    pub fn parse_token(token: &str) -> Result<Self> {
        match token.trim() {
            "blue" => Ok(Palette::Blue),
            "green" => Ok(Palette::Green),
            "orange" => Ok(Palette::Orange),
            "red" => Ok(Palette::Red),
            "violet" => Ok(Palette::Violet),
            "teal" => Ok(Palette::Teal),
            "gray" | "grey" => Ok(Palette::Gray),
            other => Err(Error::UnknownToken {
                option: "color",
                token: other.to_string(),
            }),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Palette::Blue => Color::from_hex(0x2F80ED),
            Palette::Green => Color::from_hex(0x27AE60),
            Palette::Orange => Color::from_hex(0xF2994A),
            Palette::Red => Color::from_hex(0xEB5757),
            Palette::Violet => Color::from_hex(0x9B51E0),
            Palette::Teal => Color::from_hex(0x2D9CDB),
            Palette::Gray => Color::from_hex(0x828282),
        }
    }
}
