use std::fmt;

use thiserror::Error;

/// Channel of an [`Rgb`](crate::Rgb) triple, used to point at a bad digit
/// pair in a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Why a single hex color could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexErrorReason {
    #[error("expected 6 hex digits, got {len}")]
    TooShort { len: usize },

    #[error("invalid hex digits in {channel} channel")]
    InvalidDigit { channel: Channel },

    #[error("unexpected characters after 6 hex digits")]
    TrailingCharacters,
}

/// Errors produced while converting color tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("malformed hex color {key:?}{}: {reason}", in_category(.category))]
    MalformedHex {
        category: Option<String>,
        key: String,
        reason: HexErrorReason,
    },

    #[error(
        "hex colors {first:?} and {second:?}{} both map to {rgba}",
        in_category(.category)
    )]
    Collision {
        category: Option<String>,
        rgba: String,
        first: String,
        second: String,
    },
}

impl PaletteError {
    /// Attach the category the failing key belongs to.
    pub(crate) fn within(mut self, name: &str) -> Self {
        match &mut self {
            PaletteError::MalformedHex { category, .. }
            | PaletteError::Collision { category, .. } => {
                *category = Some(name.to_string());
            },
        }
        self
    }

    /// Category the error was raised in, if it came from a nested table.
    pub fn category(&self) -> Option<&str> {
        match self {
            PaletteError::MalformedHex { category, .. }
            | PaletteError::Collision { category, .. } => category.as_deref(),
        }
    }
}

fn in_category(category: &Option<String>) -> String {
    match category {
        Some(name) => format!(" in category {name:?}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::{Channel, HexErrorReason, PaletteError};

    #[test]
    fn given_flat_error_when_displayed_then_key_is_named() {
        let err = PaletteError::MalformedHex {
            category: None,
            key: String::from("#FF"),
            reason: HexErrorReason::TooShort { len: 2 },
        };

        assert_eq!(
            err.to_string(),
            "malformed hex color \"#FF\": expected 6 hex digits, got 2"
        );
    }

    #[test]
    fn given_nested_error_when_displayed_then_category_is_named() {
        let err = PaletteError::MalformedHex {
            category: None,
            key: String::from("ZZZZZZ"),
            reason: HexErrorReason::InvalidDigit {
                channel: Channel::Red,
            },
        }
        .within("warm");

        assert_eq!(err.category(), Some("warm"));
        assert_eq!(
            err.to_string(),
            "malformed hex color \"ZZZZZZ\" in category \"warm\": \
             invalid hex digits in red channel"
        );
    }
}
