use std::{
    fmt::{self, Display, Formatter},
    ops::Range,
    str::FromStr,
};

use crate::error::{Channel, HexErrorReason, PaletteError, Result};
use crate::options::HexParsing;

/// Number of hex digits interpreted in a color key.
pub const HEX_DIGITS: usize = 6;

/// Alpha written into every converted color.
pub const OPAQUE_ALPHA: &str = "1.0";

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` with an optional leading `#`.
    ///
    /// In [`HexParsing::Lenient`] mode any run of leading `#` is dropped and
    /// anything after the sixth digit is ignored, so `##1A2B3Cff` reads as
    /// `#1A2B3C`. [`HexParsing::Strict`] takes at most one `#`.
    pub fn from_hex(
        s: &str,
        mode: HexParsing,
    ) -> std::result::Result<Self, HexErrorReason> {
        let hex = match mode {
            HexParsing::Lenient => s.trim_start_matches('#'),
            HexParsing::Strict => s.strip_prefix('#').unwrap_or(s),
        };
        if hex.len() < HEX_DIGITS {
            return Err(HexErrorReason::TooShort {
                len: hex.chars().count(),
            });
        }

        let r = parse_channel(hex, 0..2, Channel::Red)?;
        let g = parse_channel(hex, 2..4, Channel::Green)?;
        let b = parse_channel(hex, 4..6, Channel::Blue)?;

        if mode == HexParsing::Strict && hex.len() > HEX_DIGITS {
            return Err(HexErrorReason::TrailingCharacters);
        }

        Ok(Self { r, g, b })
    }

    /// Adapter rendering this color as `rgba(R, G, B, 1.0)`.
    pub fn rgba(self) -> Rgba {
        Rgba(self)
    }

    pub fn to_rgba(self) -> String {
        self.rgba().to_string()
    }
}

// Checked slicing: a multi-byte char inside the range yields an error
// instead of a panic. `from_str_radix` alone would also take a leading `+`.
fn parse_channel(
    hex: &str,
    range: Range<usize>,
    channel: Channel,
) -> std::result::Result<u8, HexErrorReason> {
    hex.get(range)
        .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .ok_or(HexErrorReason::InvalidDigit { channel })
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = HexErrorReason;

    fn from_str(s: &str) -> std::result::Result<Self, HexErrorReason> {
        Self::from_hex(s, HexParsing::default())
    }
}

/// Display adapter for the `rgba(R, G, B, 1.0)` form of an [`Rgb`].
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Rgba(pub Rgb);

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "rgba({r}, {g}, {b}, {OPAQUE_ALPHA})")
    }
}

/// Convert one hex color key to its rgba string using lenient parsing.
pub fn hex_to_rgba(hex: &str) -> Result<String> {
    hex_to_rgba_with(hex, HexParsing::default())
}

pub fn hex_to_rgba_with(hex: &str, mode: HexParsing) -> Result<String> {
    Rgb::from_hex(hex, mode)
        .map(Rgb::to_rgba)
        .map_err(|reason| PaletteError::MalformedHex {
            category: None,
            key: hex.to_string(),
            reason,
        })
}
