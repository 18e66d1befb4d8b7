// SPDX-License-Identifier: MPL-2.0
use super::catalog::TranslationTable;
use super::locale::Locale;
use super::localized::LocalizedText;
use crate::config::Config;
use crate::error::Result;
use fluent_bundle::FluentArgs;
use std::sync::Arc;

/// Resolves UI copy and localized fields for one active locale.
///
/// Each `I18n` owns its active locale; clones share the immutable table but
/// switch languages independently, so one instance per session (or per test)
/// never observes another's selection.
#[derive(Debug, Clone)]
pub struct I18n {
    table: Arc<TranslationTable>,
    current_locale: Locale,
}

impl I18n {
    /// Loads the embedded translations and picks the startup locale from the
    /// CLI, the config file, then the OS.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Result<Self> {
        let table = TranslationTable::embedded(config.fallback_locale())?;
        let current_locale = resolve_locale(cli_lang, config, sys_locale::get_locale())
            .unwrap_or_else(|| table.default_locale());

        Ok(Self::with_table(Arc::new(table), current_locale))
    }

    pub fn with_table(table: Arc<TranslationTable>, locale: Locale) -> Self {
        Self {
            table,
            current_locale: locale,
        }
    }

    pub fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    pub fn default_locale(&self) -> Locale {
        self.table.default_locale()
    }

    pub fn available_locales(&self) -> &'static [Locale] {
        &Locale::ALL
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.current_locale != locale {
            tracing::debug!(from = %self.current_locale, to = %locale, "Switching locale");
            self.current_locale = locale;
        }
    }

    /// Entry point for untyped selections such as a language switcher.
    ///
    /// Unknown codes are rejected and the current locale is kept. Returns
    /// whether the code was accepted.
    pub fn set_locale_code(&mut self, code: &str) -> bool {
        match code.parse::<Locale>() {
            Ok(locale) => {
                self.set_locale(locale);
                true
            }
            Err(err) => {
                tracing::warn!(%err, current = %self.current_locale, "Rejected locale change");
                false
            }
        }
    }

    /// Copy for `key` in the active locale, then the default locale, then
    /// the key itself so gaps stay visible.
    pub fn tr(&self, key: &str) -> String {
        self.resolve_with(key, |locale| self.table.lookup(locale, key))
    }

    pub fn tr_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.resolve_with(key, |locale| self.table.lookup_with_args(locale, key, args))
    }

    /// The active locale's value of a localized field, falling back to the
    /// default locale and then to an empty string.
    pub fn localized<'a>(&self, field: &'a LocalizedText) -> &'a str {
        self.localized_or(field, "")
    }

    pub fn localized_or<'a>(&self, field: &'a LocalizedText, placeholder: &'a str) -> &'a str {
        field
            .resolve(self.current_locale, self.default_locale())
            .unwrap_or(placeholder)
    }

    fn resolve_with(&self, key: &str, lookup: impl Fn(Locale) -> Option<String>) -> String {
        if let Some(value) = lookup(self.current_locale) {
            return value;
        }

        let default_locale = self.default_locale();
        if default_locale != self.current_locale {
            if let Some(value) = lookup(default_locale) {
                tracing::debug!(key, locale = %self.current_locale, "Using default-locale copy");
                return value;
            }
        }

        tracing::debug!(key, "No translation found");
        key.to_string()
    }
}

/// Picks the startup locale: CLI argument, then saved preference, then the
/// OS locale. Returns `None` when none of them is supported.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
) -> Option<Locale> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        match Locale::negotiate(&lang_str) {
            Some(locale) => return Some(locale),
            None => tracing::warn!(lang = %lang_str, "Unsupported --lang value"),
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.active_locale {
        match Locale::negotiate(lang_str) {
            Some(locale) => return Some(locale),
            None => tracing::warn!(lang = %lang_str, "Unsupported saved locale"),
        }
    }

    // 3. Check OS locale
    os_locale.as_deref().and_then(Locale::negotiate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_table(default_locale: Locale) -> Arc<TranslationTable> {
        let table = TranslationTable::from_sources(
            default_locale,
            [
                (
                    Locale::En,
                    "auth =\n    .login = Login\n    .signup = Sign Up\n\
                     crops =\n    .count = { $count } crops\n",
                ),
                (Locale::Mr, "auth =\n    .login = लॉगिन\n"),
                (
                    Locale::Hi,
                    "auth =\n    .login = लॉगिन\n    .signup = साइन अप\n\
                     crops =\n    .count = { $count } फसलें\n",
                ),
            ],
        )
        .expect("valid sources");
        Arc::new(table)
    }

    #[test]
    fn tr_uses_active_locale() {
        let i18n = I18n::with_table(partial_table(Locale::En), Locale::Hi);
        assert_eq!(i18n.tr("auth.signup"), "साइन अप");
    }

    #[test]
    fn tr_falls_back_to_default_locale() {
        let i18n = I18n::with_table(partial_table(Locale::En), Locale::Mr);
        assert_eq!(i18n.tr("auth.login"), "लॉगिन");
        assert_eq!(i18n.tr("auth.signup"), "Sign Up");
    }

    #[test]
    fn tr_falls_back_to_raw_key() {
        let i18n = I18n::with_table(partial_table(Locale::En), Locale::Mr);
        assert_eq!(i18n.tr("nonexistent.key"), "nonexistent.key");
        assert_eq!(i18n.tr(""), "");
    }

    #[test]
    fn tr_resolves_defined_key_with_unfilled_placeable() {
        let mut i18n = I18n::with_table(partial_table(Locale::En), Locale::Hi);
        assert_eq!(i18n.tr("crops.count"), "{$count} फसलें");
        i18n.set_locale(Locale::En);
        assert_eq!(i18n.tr("crops.count"), "{$count} crops");
    }

    #[test]
    fn fallback_follows_configured_default() {
        let i18n = I18n::with_table(partial_table(Locale::Hi), Locale::Mr);
        assert_eq!(i18n.tr("auth.signup"), "साइन अप");
    }

    #[test]
    fn tr_with_args_formats_and_falls_back() {
        let mut args = FluentArgs::new();
        args.set("count", 12);
        let mut i18n = I18n::with_table(partial_table(Locale::En), Locale::Hi);
        assert_eq!(i18n.tr_with_args("crops.count", &args), "12 फसलें");
        i18n.set_locale(Locale::Mr);
        assert_eq!(i18n.tr_with_args("crops.count", &args), "12 crops");
    }

    #[test]
    fn set_locale_is_idempotent() {
        let mut i18n = I18n::with_table(partial_table(Locale::En), Locale::En);
        i18n.set_locale(Locale::Hi);
        i18n.set_locale(Locale::Hi);
        assert_eq!(i18n.current_locale(), Locale::Hi);
        assert_eq!(i18n.tr("auth.login"), "लॉगिन");
    }

    #[test]
    fn set_locale_code_rejects_unknown_codes() {
        let mut i18n = I18n::with_table(partial_table(Locale::En), Locale::Mr);
        assert!(!i18n.set_locale_code("xx"));
        assert_eq!(i18n.current_locale(), Locale::Mr);
        assert!(i18n.set_locale_code("hi"));
        assert_eq!(i18n.current_locale(), Locale::Hi);
    }

    #[test]
    fn localized_reads_field_by_active_locale() {
        let field = LocalizedText::new("Rice", "भात", "चावल");
        let mut i18n = I18n::with_table(partial_table(Locale::En), Locale::Mr);
        assert_eq!(i18n.localized(&field), "भात");

        i18n.set_locale(Locale::Hi);
        assert_eq!(i18n.localized(&field), "चावल");
        assert_eq!(field, LocalizedText::new("Rice", "भात", "चावल"));
    }

    #[test]
    fn localized_falls_back_then_uses_placeholder() {
        let i18n = I18n::with_table(partial_table(Locale::En), Locale::Hi);
        let partial = LocalizedText::new("Cotton", "कापूस", "");
        assert_eq!(i18n.localized(&partial), "Cotton");

        let blank = LocalizedText::default();
        assert_eq!(i18n.localized(&blank), "");
        assert_eq!(i18n.localized_or(&blank, "?"), "?");
    }

    #[test]
    fn clones_switch_independently() {
        let first = I18n::with_table(partial_table(Locale::En), Locale::En);
        let mut second = first.clone();
        second.set_locale(Locale::Hi);
        assert_eq!(first.current_locale(), Locale::En);
        assert_eq!(first.tr("auth.login"), "Login");
        assert_eq!(second.tr("auth.login"), "लॉगिन");
        assert!(Arc::ptr_eq(first.table(), second.table()));
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("mr".to_string()), &config, Some("hi-IN".into()));
        assert_eq!(lang, Some(Locale::Mr));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.active_locale = Some("hi".to_string());
        let lang = resolve_locale(None, &config, Some("mr-IN".into()));
        assert_eq!(lang, Some(Locale::Hi));
    }

    #[test]
    fn test_resolve_locale_skips_unsupported_values() {
        let mut config = Config::default();
        config.active_locale = Some("de".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, Some("mr_IN.UTF-8".into()));
        assert_eq!(lang, Some(Locale::Mr));
    }

    #[test]
    fn test_resolve_locale_none_when_nothing_matches() {
        let config = Config::default();
        assert_eq!(resolve_locale(None, &config, Some("ja-JP".into())), None);
        assert_eq!(resolve_locale(None, &config, None), None);
    }

    #[test]
    fn new_prefers_cli_language() {
        let i18n = I18n::new(Some("hi".to_string()), &Config::default()).expect("embedded table");
        assert_eq!(i18n.current_locale(), Locale::Hi);
        assert_eq!(i18n.tr("auth.login"), "लॉगिन");
        assert_eq!(i18n.default_locale(), Locale::En);
    }
}
