use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::map::{
    CategorizedColorMap, ColorMap, convert_categorized_with, convert_map_with,
};
use crate::options::ConvertOptions;

/// Flat and categorized color tables keyed by rgba strings.
///
/// Built once at startup with [`Palette::init`] and handed to consumers by
/// reference. There is no way to mutate it after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette<V> {
    flat: ColorMap<V>,
    categorized: CategorizedColorMap<V>,
}

impl<V> Palette<V> {
    pub fn init<F, FK, C, CN, M, MK>(flat: F, categorized: C) -> Result<Self>
    where
        F: IntoIterator<Item = (FK, V)>,
        FK: AsRef<str>,
        C: IntoIterator<Item = (CN, M)>,
        CN: AsRef<str>,
        M: IntoIterator<Item = (MK, V)>,
        MK: AsRef<str>,
    {
        Self::init_with(flat, categorized, &ConvertOptions::default())
    }

    pub fn init_with<F, FK, C, CN, M, MK>(
        flat: F,
        categorized: C,
        options: &ConvertOptions,
    ) -> Result<Self>
    where
        F: IntoIterator<Item = (FK, V)>,
        FK: AsRef<str>,
        C: IntoIterator<Item = (CN, M)>,
        CN: AsRef<str>,
        M: IntoIterator<Item = (MK, V)>,
        MK: AsRef<str>,
    {
        let flat = convert_map_with(flat, options)?;
        let categorized = convert_categorized_with(categorized, options)?;
        info!(
            "palette ready: {} colors, {} categories",
            flat.len(),
            categorized.len()
        );

        Ok(Self { flat, categorized })
    }

    pub fn flat(&self) -> &ColorMap<V> {
        &self.flat
    }

    pub fn categorized(&self) -> &CategorizedColorMap<V> {
        &self.categorized
    }

    pub fn category(&self, name: &str) -> Option<&ColorMap<V>> {
        self.categorized.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categorized.keys().map(String::as_str)
    }

    /// Look up a value in the flat table by its rgba key.
    pub fn get(&self, rgba: &str) -> Option<&V> {
        self.flat.get(rgba)
    }

    /// Number of colors in the flat table plus every category.
    pub fn len(&self) -> usize {
        let nested: usize = self.categorized.values().map(ColorMap::len).sum();
        self.flat.len() + nested
    }

    /// True when neither table holds a single color. Empty categories do
    /// not count.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
