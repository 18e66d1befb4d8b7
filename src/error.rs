// SPDX-License-Identifier: MPL-2.0
use crate::i18n::locale::Locale;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Data(String),
    UnsupportedLocale(String),
    Catalog(CatalogError),
}

/// Problems found while building a translation table.
///
/// These only surface at construction time; once a table exists every
/// lookup against it is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A locale of the closed set has no resource at all.
    MissingLocale(Locale),

    /// A Fluent resource failed to parse.
    Syntax { locale: Locale, message: String },

    /// The same message id was defined twice for one locale.
    Conflict { locale: Locale, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingLocale(locale) => {
                write!(f, "no translations provided for locale '{}'", locale)
            }
            CatalogError::Syntax { locale, message } => {
                write!(
                    f,
                    "invalid Fluent syntax in '{}' resource: {}",
                    locale, message
                )
            }
            CatalogError::Conflict { locale, message } => {
                write!(f, "conflicting messages in '{}' resource: {}", locale, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Data(e) => write!(f, "Data Error: {}", e),
            Error::UnsupportedLocale(code) => write!(f, "Unsupported locale: {}", code),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unsupported_locale_names_the_code() {
        let err = Error::UnsupportedLocale("xx".into());
        assert_eq!(format!("{}", err), "Unsupported locale: xx");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::MissingLocale(Locale::Mr).into();
        assert!(matches!(err, Error::Catalog(CatalogError::MissingLocale(Locale::Mr))));
        assert_eq!(
            format!("{}", err),
            "Catalog Error: no translations provided for locale 'mr'"
        );
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
