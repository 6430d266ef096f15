use serde::{Deserialize, Serialize};

/// How much of a hex key is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexParsing {
    /// Leading `#` characters are dropped and only the first six digits
    /// after them are read.
    #[default]
    Lenient,
    /// Exactly six digits after at most one `#`.
    Strict,
}

/// What to do when two hex keys convert to the same rgba key,
/// e.g. `#ff0000` and `FF0000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    #[default]
    Reject,
    /// Keep the entry that was seen last.
    Overwrite,
}

/// Options applied to every key of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub hex: HexParsing,
    pub collisions: CollisionPolicy,
}

impl ConvertOptions {
    pub fn strict() -> Self {
        Self {
            hex: HexParsing::Strict,
            ..Self::default()
        }
    }

    pub fn with_collisions(mut self, collisions: CollisionPolicy) -> Self {
        self.collisions = collisions;
        self
    }

    /// Read options from a settings fragment such as
    /// `{"hex": "strict", "collisions": "overwrite"}`.
    ///
    /// Missing or unrecognized fields keep their defaults.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut options = ConvertOptions::default();

        if let Some(hex) = read_field::<HexParsing>(value, "hex") {
            options.hex = hex;
        }

        if let Some(collisions) =
            read_field::<CollisionPolicy>(value, "collisions")
        {
            options.collisions = collisions;
        }

        options
    }
}

fn read_field<T>(value: &serde_json::Value, key: &str) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
{
    let field = value.get(key)?;
    match serde_json::from_value(field.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::warn!("ignoring invalid palette option {key}: {err}");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{CollisionPolicy, ConvertOptions, HexParsing};

    #[test]
    fn given_empty_json_when_from_json_then_defaults_are_used() {
        let options = ConvertOptions::from_json(&json!({}));

        assert_eq!(options, ConvertOptions::default());
        assert_eq!(options.hex, HexParsing::Lenient);
        assert_eq!(options.collisions, CollisionPolicy::Reject);
    }

    #[test]
    fn given_valid_fields_when_from_json_then_options_are_loaded() {
        let value = json!({
            "hex": "strict",
            "collisions": "overwrite"
        });

        let options = ConvertOptions::from_json(&value);

        assert_eq!(options.hex, HexParsing::Strict);
        assert_eq!(options.collisions, CollisionPolicy::Overwrite);
    }

    #[test]
    fn given_invalid_field_when_from_json_then_only_that_field_defaults() {
        let value = json!({
            "hex": "sloppy",
            "collisions": "overwrite"
        });

        let options = ConvertOptions::from_json(&value);

        assert_eq!(options.hex, HexParsing::Lenient);
        assert_eq!(options.collisions, CollisionPolicy::Overwrite);
    }

    #[test]
    fn given_partial_json_when_deserialized_then_missing_fields_default() {
        let options: ConvertOptions =
            serde_json::from_value(json!({ "hex": "strict" })).unwrap();

        assert_eq!(
            options,
            ConvertOptions::strict().with_collisions(CollisionPolicy::Reject)
        );
    }
}
