// SPDX-License-Identifier: MPL-2.0
//! This module handles the client's preferences, persisted to a
//! `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use krishi_i18n::config::{self, Config};
//! use krishi_i18n::i18n::Locale;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Remember the language picked on the switcher
//! config.remember_locale(Locale::Mr);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::i18n::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::DEFAULT_LOCALE;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Last locale chosen on the language switcher.
    #[serde(
        rename = "activeLocale",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub active_locale: Option<String>,

    /// Overrides [`DEFAULT_LOCALE`] as the fallback for missing copy.
    #[serde(
        rename = "fallbackLocale",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_locale: Option<String>,
}

impl Config {
    /// The configured fallback locale, or [`DEFAULT_LOCALE`] when unset or
    /// not a supported code.
    pub fn fallback_locale(&self) -> Locale {
        match self.fallback_locale.as_deref().map(str::parse::<Locale>) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                tracing::warn!(%err, "Ignoring configured fallback locale");
                DEFAULT_LOCALE
            }
            None => DEFAULT_LOCALE,
        }
    }

    pub fn remember_locale(&mut self, locale: Locale) {
        self.active_locale = Some(locale.code().to_string());
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(defaults::ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(defaults::APP_NAME);
        path
    })
}

/// Location of `settings.toml`, honouring `KRISHI_I18N_CONFIG_DIR`.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(defaults::CONFIG_FILE))
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads preferences from `path`. Malformed TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "Ignoring malformed settings file");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
