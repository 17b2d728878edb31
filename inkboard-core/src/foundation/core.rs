use std::str::FromStr;

use crate::foundation::error::{InkError, InkResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Default portrait e-ink panel dimensions.
    pub const EINK_PORTRAIT: Canvas = Canvas {
        width: 600,
        height: 800,
    };
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Layout files carry colors as strings: `#rgb`, `#rrggbb`, `#rrggbbaa`, or
/// one of a small named grayscale set suited to e-ink panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::gray_level(0xff);
    /// Opaque black.
    pub const BLACK: Color = Color::gray_level(0x00);

    /// Build an opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Build an opaque gray from a single level.
    pub const fn gray_level(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Channels premultiplied by alpha, as stored in the pixel surface.
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

impl FromStr for Color {
    type Err = InkError;

    fn from_str(s: &str) -> InkResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex)
                .ok_or_else(|| InkError::config(format!("invalid color literal '{s}'")));
        }

        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::BLACK),
            "gray" | "grey" => Ok(Color::gray_level(0x80)),
            "lightgray" | "lightgrey" => Ok(Color::gray_level(0xd3)),
            "darkgray" | "darkgrey" => Ok(Color::gray_level(0x44)),
            _ => Err(InkError::config(format!("unknown color name '{s}'"))),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    fn nibble(b: u8) -> Option<u8> {
        char::from(b).to_digit(16).map(|d| d as u8)
    }

    fn byte_at(hex: &[u8], i: usize) -> Option<u8> {
        Some(nibble(hex[i])? << 4 | nibble(hex[i + 1])?)
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => Some(Color::rgb(
            byte_at(bytes, 0)?,
            byte_at(bytes, 2)?,
            byte_at(bytes, 4)?,
        )),
        8 => Some(Color {
            r: byte_at(bytes, 0)?,
            g: byte_at(bytes, 2)?,
            b: byte_at(bytes, 4)?,
            a: byte_at(bytes, 6)?,
        }),
        _ => None,
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
