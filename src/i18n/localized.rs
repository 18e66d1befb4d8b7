// SPDX-License-Identifier: MPL-2.0
//! Multi-locale text attached directly to domain records.
//!
//! Unlike UI copy, which is looked up by translation key, a [`LocalizedText`]
//! carries every translation inline. Content authors fill one field per
//! supported locale; an empty field counts as missing.

use super::locale::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub mr: String,
    #[serde(default)]
    pub hi: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, mr: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            mr: mr.into(),
            hi: hi.into(),
        }
    }

    /// The authored value for `locale`, or `None` when it was left blank.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let value = match locale {
            Locale::En => &self.en,
            Locale::Mr => &self.mr,
            Locale::Hi => &self.hi,
        };
        (!value.is_empty()).then_some(value.as_str())
    }

    /// Value for `locale`, falling back to `fallback`.
    pub fn resolve(&self, locale: Locale, fallback: Locale) -> Option<&str> {
        self.get(locale).or_else(|| self.get(fallback))
    }

    /// Locales that have no authored value.
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.get(*locale).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> LocalizedText {
        LocalizedText::new("Rice", "भात", "चावल")
    }

    #[test]
    fn get_returns_each_locale() {
        let field = rice();
        assert_eq!(field.get(Locale::En), Some("Rice"));
        assert_eq!(field.get(Locale::Mr), Some("भात"));
        assert_eq!(field.get(Locale::Hi), Some("चावल"));
        assert!(field.missing_locales().is_empty());
    }

    #[test]
    fn blank_value_falls_back() {
        let field = LocalizedText::new("Soybean", "", "सोयाबीन");
        assert_eq!(field.get(Locale::Mr), None);
        assert_eq!(field.resolve(Locale::Mr, Locale::En), Some("Soybean"));
        assert_eq!(field.missing_locales(), vec![Locale::Mr]);
    }

    #[test]
    fn resolve_returns_none_when_fallback_is_blank_too() {
        let field = LocalizedText::new("", "", "कपास");
        assert_eq!(field.resolve(Locale::Mr, Locale::En), None);
    }

    #[test]
    fn missing_fields_deserialize_as_blank() {
        let field: LocalizedText = toml::from_str(r#"en = "Wheat""#).unwrap();
        assert_eq!(field.get(Locale::En), Some("Wheat"));
        assert_eq!(field.missing_locales(), vec![Locale::Mr, Locale::Hi]);
    }
}
