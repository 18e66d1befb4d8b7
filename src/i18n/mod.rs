// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the client.
//!
//! Two lookup paths share one piece of state, the active locale held by an
//! [`I18n`] value:
//!
//! - UI copy is looked up by translation key in the Fluent-backed
//!   [`TranslationTable`];
//! - domain records carry [`LocalizedText`] fields that are read directly by
//!   locale.
//!
//! # Features
//!
//! - Startup locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to the default locale, then to the raw key, when copy is missing

pub mod catalog;
pub mod fluent;
pub mod keys;
pub mod locale;
pub mod localized;

pub use catalog::TranslationTable;
pub use fluent::I18n;
pub use locale::Locale;
pub use localized::LocalizedText;
