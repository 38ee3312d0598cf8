use palette::{Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Solid paint for the centre button fill and border.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct Brush(Srgba<u8>);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BrushParseError {
    #[error("Unknown colour '{0}'")]
    Unknown(String),
    #[error("Invalid hex colour '{0}'")]
    Hex(String),
}

impl Brush {
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn opaque(color: Srgb<u8>) -> Self {
        Self::rgba(color.red, color.green, color.blue, u8::MAX)
    }

    pub fn color(&self) -> Srgba<u8> {
        self.0
    }

    pub fn is_transparent(&self) -> bool {
        self.0.alpha == 0
    }

    fn parse_hex(digits: &str) -> Result<Self, BrushParseError> {
        let bad = || BrushParseError::Hex(digits.to_string());
        if !digits.is_ascii() {
            return Err(bad());
        }
        match digits.len() {
            3 | 6 => Srgb::<u8>::from_str(digits)
                .map(Self::opaque)
                .map_err(|_| bad()),
            8 => {
                let rgb = Srgb::<u8>::from_str(&digits[..6]).map_err(|_| bad())?;
                let alpha = u8::from_str_radix(&digits[6..], 16).map_err(|_| bad())?;
                Ok(Self::rgba(rgb.red, rgb.green, rgb.blue, alpha))
            }
            _ => Err(bad()),
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::transparent()
    }
}

impl From<Srgba<u8>> for Brush {
    fn from(color: Srgba<u8>) -> Self {
        Self(color)
    }
}

impl From<Srgb<u8>> for Brush {
    fn from(color: Srgb<u8>) -> Self {
        Self::opaque(color)
    }
}

impl FromStr for Brush {
    type Err = BrushParseError;

    /// Accepts `transparent`, an SVG colour name, `#rgb`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix('#') {
            return Self::parse_hex(digits);
        }

        let name = s.to_ascii_lowercase();
        if name == "transparent" {
            return Ok(Self::transparent());
        }
        palette::named::from_str(&name)
            .map(Self::opaque)
            .ok_or_else(|| BrushParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
