//! Localized string lookup.
//!
//! UI strings are written in English and used as lookup keys. A catalog maps
//! keys to translations; keys without a translation render as-is.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    translations: HashMap<String, String>,
}

impl Locale {
    /// Identity catalog: every key renders as itself.
    pub fn english() -> Self {
        Self::default()
    }

    /// Parses a flat JSON object of `key -> translation`.
    pub fn from_json(payload: &str) -> Result<Self> {
        let translations: HashMap<String, String> = serde_json::from_str(payload)?;
        Ok(Self { translations })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload).map_err(|error| match error {
            Error::Serialization(error) => Error::Config(format!(
                "invalid locale catalog {}: {error}",
                path.display()
            )),
            other => other,
        })
    }

    /// Looks up `key`, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_returns_key() {
        assert_eq!(Locale::english().t("Save Changes"), "Save Changes");
    }

    #[test]
    fn catalog_overrides_known_keys() {
        let locale =
            Locale::from_json(r#"{"Save Changes": "Änderungen speichern"}"#).unwrap();
        assert_eq!(locale.t("Save Changes"), "Änderungen speichern");
        assert_eq!(locale.t("Digests"), "Digests");
    }

    #[test]
    fn rejects_non_object_catalog() {
        assert!(matches!(
            Locale::from_json("[1, 2]"),
            Err(Error::Serialization(_))
        ));
    }
}
