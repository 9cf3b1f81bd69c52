//! Localization contract and the bundled message catalog.
//!
//! Every user-visible label produced by the core goes through a
//! [`Translator`]. The bundled [`Catalog`] resolves i18next-style keys such as
//! `label.enable-debug-log` and interpolates `{{name}}` placeholders.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::Result;

const EN_US: &str = include_str!("../../locales/en-us.json");
const DEFAULT_LOCALE: &str = "en-US";

/// Translates message keys into display strings.
pub trait Translator {
    /// Resolve `key`, substituting `{{name}}` with the matching `args` entry.
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String;

    /// Resolve a key without substitutions.
    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

/// Flat key to message catalog for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// The bundled English catalog.
    #[must_use]
    pub fn english() -> Self {
        static ENGLISH: OnceLock<HashMap<String, String>> = OnceLock::new();
        let messages = ENGLISH
            .get_or_init(|| serde_json::from_str(EN_US).unwrap_or_default())
            .clone();
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            messages,
        }
    }

    /// Parse a catalog from a flat JSON object of `key: message` pairs.
    pub fn from_json(locale: impl Into<String>, payload: &str) -> Result<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(payload)?;
        Ok(Self {
            locale: locale.into(),
            messages,
        })
    }

    /// Pick the catalog for a configured locale.
    ///
    /// Only English is bundled; other locales fall back to it.
    #[must_use]
    pub fn for_locale(locale: Option<&str>) -> Self {
        if let Some(requested) =
            locale.filter(|requested| !requested.eq_ignore_ascii_case(DEFAULT_LOCALE))
        {
            tracing::debug!("Locale {} is not bundled, using {}", requested, DEFAULT_LOCALE);
        }
        Self::english()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        let Some(message) = self.messages.get(key) else {
            tracing::debug!("Missing translation for {}", key);
            return key.to_string();
        };
        interpolate(message, args)
    }
}

/// Replace `{{name}}` placeholders with values from `args`.
///
/// Unknown placeholders are left untouched.
pub fn interpolate(message: &str, args: &[(&str, &str)]) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

    if args.is_empty() {
        return message.to_string();
    }

    let re = PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_-]+)\s*\}\}").expect("Invalid regex"));

    re.replace_all(message, |caps: &Captures<'_>| {
        let name = &caps[1];
        args.iter()
            .find(|(arg, _)| *arg == name)
            .map_or_else(|| caps[0].to_string(), |(_, value)| (*value).to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_catalog_resolves_known_keys() {
        let catalog = Catalog::english();
        assert_eq!(catalog.t("label.enable-debug-log"), "Enable Debug Log");
        assert_eq!(catalog.locale(), "en-US");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let catalog = Catalog::english();
        assert_eq!(catalog.t("label.not-a-real-key"), "label.not-a-real-key");
    }

    #[test]
    fn translate_interpolates_arguments() {
        let catalog = Catalog::english();
        assert_eq!(
            catalog.translate("label.include-entity", &[("entity", "Tags")]),
            "Include Tags"
        );
    }

    #[test]
    fn interpolate_keeps_unknown_placeholders() {
        assert_eq!(
            interpolate("{{a}} and {{ b }}", &[("a", "x")]),
            "x and {{ b }}"
        );
    }

    #[test]
    fn from_json_rejects_non_object_payload() {
        assert!(Catalog::from_json("fr-FR", "[1, 2]").is_err());
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let catalog = Catalog::for_locale(Some("fr-FR"));
        assert_eq!(catalog.locale(), "en-US");
        assert!(catalog.contains("label.name"));
    }
}
