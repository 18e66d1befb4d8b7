// SPDX-License-Identifier: MPL-2.0
//! The static translation table for UI copy.
//!
//! Copy is authored as one Fluent resource per locale. Translation keys are
//! dot-namespaced (`auth.login`), which lines up with Fluent's own reference
//! syntax: the namespace is a message and the rest of the key is one of its
//! attributes.
//!
//! ```ftl
//! auth =
//!     .login = Login
//!     .signup = Sign Up
//! ```
//!
//! A table is immutable once built and can be shared between any number of
//! resolvers behind an `Arc`.

use super::locale::Locale;
use crate::error::{CatalogError, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

type Bundle = FluentBundle<FluentResource>;

pub struct TranslationTable {
    bundles: HashMap<Locale, Bundle>,
    default_locale: Locale,
}

impl fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locales: Vec<_> = self.bundles.keys().collect();
        locales.sort();
        f.debug_struct("TranslationTable")
            .field("locales", &locales)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

impl TranslationTable {
    /// Builds the table from the `.ftl` files compiled into the binary.
    pub fn embedded(default_locale: Locale) -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = stem.parse::<Locale>() else {
                tracing::warn!(
                    file = filename,
                    "Skipping translations for unsupported locale"
                );
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ));
            }
        }

        Self::from_sources(default_locale, sources)
    }

    /// Builds a table from in-memory Fluent sources.
    ///
    /// A locale may appear several times; its resources are merged. Every
    /// locale in [`Locale::ALL`] must receive at least one resource.
    pub fn from_sources<I, S>(default_locale: Locale, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Locale, S)>,
        S: Into<String>,
    {
        let mut bundles: HashMap<Locale, Bundle> = HashMap::new();

        for (locale, source) in sources {
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                CatalogError::Syntax {
                    locale,
                    message: describe(&errors),
                }
            })?;
            let bundle = bundles.entry(locale).or_insert_with(|| new_bundle(locale));
            bundle
                .add_resource(resource)
                .map_err(|errors| CatalogError::Conflict {
                    locale,
                    message: describe(&errors),
                })?;
        }

        if let Some(missing) = Locale::ALL
            .into_iter()
            .find(|l| !bundles.contains_key(l))
        {
            return Err(CatalogError::MissingLocale(missing).into());
        }

        Ok(Self {
            bundles,
            default_locale,
        })
    }

    /// The locale consulted when the requested one has no entry for a key.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Formats `key` for exactly `locale`, without any fallback.
    ///
    /// Returns `None` only when the locale does not define the key. A defined
    /// key always formats; unresolved placeables are rendered as `{$name}`.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        self.format(locale, key, None)
    }

    pub fn lookup_with_args(
        &self,
        locale: Locale,
        key: &str,
        args: &FluentArgs<'_>,
    ) -> Option<String> {
        self.format(locale, key, Some(args))
    }

    /// Whether `locale` defines `key`.
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        let Some(bundle) = self.bundles.get(&locale) else {
            return false;
        };
        let (id, attribute) = split_key(key);
        match (bundle.get_message(id), attribute) {
            (Some(message), Some(name)) => message.get_attribute(name).is_some(),
            (Some(message), None) => message.value().is_some(),
            (None, _) => false,
        }
    }

    /// Keys from `keys` that `locale` does not define.
    pub fn missing_keys<'k>(&self, locale: Locale, keys: &[&'k str]) -> Vec<&'k str> {
        keys.iter()
            .copied()
            .filter(|key| !self.contains(locale, key))
            .collect()
    }

    fn format(
        &self,
        locale: Locale,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let (id, attribute) = split_key(key);
        let message = bundle.get_message(id)?;
        let pattern = match attribute {
            Some(name) => message.get_attribute(name)?.value(),
            None => message.value()?,
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%locale, key, ?errors, "Translation formatted with errors");
        }
        Some(value.into_owned())
    }
}

fn new_bundle(locale: Locale) -> Bundle {
    let mut bundle = FluentBundle::new_concurrent(vec![locale.language_identifier()]);
    bundle.set_use_isolating(false);
    bundle
}

/// `auth.login` -> (`auth`, Some(`login`)); a key without a dot names a
/// message value.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('.') {
        Some((id, attribute)) => (id, Some(attribute)),
        None => (key, None),
    }
}

fn describe<E: fmt::Debug>(errors: &[E]) -> String {
    errors
        .iter()
        .map(|e| format!("{e:?}"))
        .collect::<Vec<_>>()
        .join("; ")
}
