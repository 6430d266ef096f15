//! Conversion of hex-keyed color tables to rgba-keyed ones.
//!
//! Theme tables are usually authored as `#RRGGBB` keys, while the UI layer
//! looks colors up by their `rgba(R, G, B, 1.0)` string. This crate rewrites
//! the keys once and keeps the values as they are:
//! - [`hex_to_rgba`] converts a single key,
//! - [`convert_map`] and [`convert_categorized`] rewrite flat and
//!   per-category tables,
//! - [`Palette`] bundles both converted tables into one immutable value
//!   built at startup.
//!
//! ```
//! use otty_palette::Palette;
//!
//! let palette = Palette::init(
//!     [("#FF0000", "red")],
//!     [("cool", [("#0000FF", "blue")])],
//! )?;
//!
//! assert_eq!(palette.get("rgba(255, 0, 0, 1.0)"), Some(&"red"));
//! # Ok::<(), otty_palette::PaletteError>(())
//! ```

mod color;
mod error;
mod map;
mod options;
mod palette;

pub use color::{
    HEX_DIGITS, OPAQUE_ALPHA, Rgb, Rgba, hex_to_rgba, hex_to_rgba_with,
};
pub use error::{Channel, HexErrorReason, PaletteError, Result};
pub use map::{
    CategorizedColorMap, ColorMap, convert_categorized,
    convert_categorized_with, convert_map, convert_map_with,
};
pub use options::{CollisionPolicy, ConvertOptions, HexParsing};
pub use palette::Palette;
