//! Color heuristics for theming a card entry form.
//!
//! Colors are packed `0xAARRGGBB` integers, the layout UI toolkits hand
//! out for theme attributes. Two checks are provided:
//!
//! - [`is_color_dark`]: weighted brightness `0.299 R + 0.587 G + 0.114 B`,
//!   normalized to 0-1, is at most 0.5
//! - [`is_color_transparent`]: alpha below `0x10`, too faint to see
//!
//! These are rough brightness heuristics, not WCAG relative luminance.
//!
//! # Example
//!
//! ```
//! use card_entry::color::{is_color_dark, is_color_transparent, PackedColor};
//!
//! assert!(is_color_dark(0xFF000000));
//! assert!(!is_color_dark(0xFFFFFFFF));
//! assert!(is_color_transparent(0x0FFFFFFF));
//!
//! let accent: PackedColor = "#2196F3".parse().unwrap();
//! assert!(accent.is_dark());
//! ```

use std::fmt;
use std::str::FromStr;

/// Alpha values below this are treated as invisible.
pub const TRANSPARENT_ALPHA_THRESHOLD: u8 = 0x10;

/// Normalized brightness at or below which a color counts as dark.
pub const DARK_BRIGHTNESS_THRESHOLD: f64 = 0.5;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Opaque black.
    pub const BLACK: PackedColor = PackedColor(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: PackedColor = PackedColor(0xFFFF_FFFF);
    /// Fully transparent black.
    pub const TRANSPARENT: PackedColor = PackedColor(0x0000_0000);

    /// Packs the four channels.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Packs an opaque color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// The packed value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Weighted brightness in `0.0..=1.0`. Alpha is ignored.
    pub fn luminance(self) -> f64 {
        let weighted = RED_WEIGHT * f64::from(self.red())
            + GREEN_WEIGHT * f64::from(self.green())
            + BLUE_WEIGHT * f64::from(self.blue());
        weighted / 255.0
    }

    /// Returns true if the color reads as dark. The 0.5 boundary is dark.
    #[inline]
    pub fn is_dark(self) -> bool {
        self.luminance() <= DARK_BRIGHTNESS_THRESHOLD
    }

    /// Returns true if the color is too transparent to be seen.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() < TRANSPARENT_ALPHA_THRESHOLD
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Errors that can occur when parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input is empty.
    Empty,
    /// The literal is neither 6 (`RRGGBB`) nor 8 (`AARRGGBB`) hex digits.
    InvalidLength {
        /// Number of characters after the optional `#`.
        length: usize,
    },
    /// A character is not a hex digit.
    InvalidHex {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character, after the optional `#`.
        position: usize,
    },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "color is empty"),
            Self::InvalidLength { length } => {
                write!(f, "color must be 6 or 8 hex digits, got {}", length)
            }
            Self::InvalidHex {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid hex digit '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for PackedColor {
    type Err = ColorParseError;

    /// Parses `#RRGGBB` or `#AARRGGBB`. The `#` is optional and six digit
    /// colors are opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some((position, character)) =
            hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ColorParseError::InvalidHex {
                character,
                position,
            });
        }

        // All ASCII from here, so byte length is char count
        let value = match hex.len() {
            6 => 0xFF00_0000 | parse_hex(hex),
            8 => parse_hex(hex),
            length => return Err(ColorParseError::InvalidLength { length }),
        };

        Ok(Self(value))
    }
}

fn parse_hex(hex: &str) -> u32 {
    hex.bytes().fold(0u32, |acc, b| {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        };
        acc << 4 | u32::from(nibble)
    })
}

/// Checks whether a packed `0xAARRGGBB` color reads as dark.
///
/// ```
/// use card_entry::color::is_color_dark;
///
/// assert!(is_color_dark(0xFF1E1E1E));
/// assert!(!is_color_dark(0xFFF5F5F5));
/// ```
#[inline]
pub fn is_color_dark(color: u32) -> bool {
    PackedColor(color).is_dark()
}

/// Checks whether a packed `0xAARRGGBB` color is essentially transparent.
#[inline]
pub fn is_color_transparent(color: u32) -> bool {
    PackedColor(color).is_transparent()
}

/// Picks opaque white or black text for a background.
///
/// ```
/// use card_entry::color::{contrasting_text, PackedColor};
///
/// assert_eq!(contrasting_text(PackedColor::BLACK), PackedColor::WHITE);
/// assert_eq!(contrasting_text(PackedColor::WHITE), PackedColor::BLACK);
/// ```
pub fn contrasting_text(background: PackedColor) -> PackedColor {
    if background.is_dark() {
        PackedColor::WHITE
    } else {
        PackedColor::BLACK
    }
}
