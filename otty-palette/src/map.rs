//! Key rewriting for flat and categorized color tables.
//!
//! Values are moved into the output untouched; only keys change. The
//! first malformed key aborts the conversion and nothing is returned.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::{debug, trace, warn};

use crate::color::Rgb;
use crate::error::{PaletteError, Result};
use crate::options::{CollisionPolicy, ConvertOptions};

/// Colors keyed by their `rgba(R, G, B, 1.0)` string.
pub type ColorMap<V> = BTreeMap<String, V>;

/// Converted color tables grouped by category name.
pub type CategorizedColorMap<V> = BTreeMap<String, ColorMap<V>>;

/// Rewrite every hex key of `map` to its rgba form with default options.
pub fn convert_map<I, K, V>(map: I) -> Result<ColorMap<V>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    convert_map_with(map, &ConvertOptions::default())
}

pub fn convert_map_with<I, K, V>(
    map: I,
    options: &ConvertOptions,
) -> Result<ColorMap<V>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    let mut converted = ColorMap::new();
    // rgba key -> hex key it came from, for collision reports
    let mut origins: BTreeMap<String, String> = BTreeMap::new();

    for (key, value) in map {
        let hex = key.as_ref();
        let rgba = Rgb::from_hex(hex, options.hex)
            .map_err(|reason| PaletteError::MalformedHex {
                category: None,
                key: hex.to_string(),
                reason,
            })?
            .to_rgba();
        trace!("{hex} -> {rgba}");

        match converted.entry(rgba) {
            Entry::Vacant(slot) => {
                origins.insert(slot.key().clone(), hex.to_string());
                slot.insert(value);
            },
            Entry::Occupied(mut slot) => {
                let first = origins
                    .insert(slot.key().clone(), hex.to_string())
                    .unwrap_or_default();
                match options.collisions {
                    CollisionPolicy::Reject => {
                        return Err(PaletteError::Collision {
                            category: None,
                            rgba: slot.key().clone(),
                            first,
                            second: hex.to_string(),
                        });
                    },
                    CollisionPolicy::Overwrite => {
                        warn!(
                            "{hex:?} overwrites {first:?} as {}",
                            slot.key()
                        );
                        slot.insert(value);
                    },
                }
            },
        }
    }

    debug!("converted {} colors", converted.len());
    Ok(converted)
}

/// Rewrite the hex keys inside every category with default options.
///
/// Category names are kept as they are.
pub fn convert_categorized<I, C, M, K, V>(
    nested: I,
) -> Result<CategorizedColorMap<V>>
where
    I: IntoIterator<Item = (C, M)>,
    C: AsRef<str>,
    M: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    convert_categorized_with(nested, &ConvertOptions::default())
}

pub fn convert_categorized_with<I, C, M, K, V>(
    nested: I,
    options: &ConvertOptions,
) -> Result<CategorizedColorMap<V>>
where
    I: IntoIterator<Item = (C, M)>,
    C: AsRef<str>,
    M: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    let mut converted = CategorizedColorMap::new();

    for (category, colors) in nested {
        let category = category.as_ref();
        let colors = convert_map_with(colors, options)
            .map_err(|err| err.within(category))?;
        debug!("category {category:?}: {} colors", colors.len());
        converted.insert(category.to_string(), colors);
    }

    Ok(converted)
}
