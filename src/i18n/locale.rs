// SPDX-License-Identifier: MPL-2.0
//! The closed set of display languages supported by the client.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported display language.
///
/// The set is closed: there is no "unset" or "other" variant, so any value of
/// this type is valid wherever a locale is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Mr,
    Hi,
}

impl Locale {
    /// Every supported locale, in authoring order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Mr, Locale::Hi];

    /// Two-letter code used in resource file names and persisted settings.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Mr => "mr",
            Locale::Hi => "hi",
        }
    }

    /// Short label shown on the compact language switcher, in the
    /// language itself.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Mr => "मराठी",
            Locale::Hi => "हिंदी",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Mr => "Marathi",
            Locale::Hi => "Hindi",
        }
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }

    /// Maps an arbitrary language identifier onto the closed set by its
    /// language subtag, so `hi-IN` selects [`Locale::Hi`].
    pub fn from_language_identifier(langid: &LanguageIdentifier) -> Option<Self> {
        let language = langid.language.as_str();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(language))
    }

    /// Best-effort match of a BCP-47 or POSIX style tag (`mr-IN`,
    /// `hi_IN.UTF-8`) against the supported locales.
    pub fn negotiate(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or(tag).replace('_', "-");
        if tag.is_empty() {
            return None;
        }
        let langid = tag.parse::<LanguageIdentifier>().ok()?;
        Self::from_language_identifier(&langid)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Strict parse: only the bare codes of the closed set are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}
