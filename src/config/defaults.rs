// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::i18n::locale::Locale;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale consulted when the active one has no entry for a key, and the
/// initial locale when nothing else selects one.
pub const DEFAULT_LOCALE: Locale = Locale::En;

// ==========================================================================
// Paths
// ==========================================================================

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "KrishiAI";

/// Preferences file name.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable that overrides the config directory.
pub const ENV_CONFIG_DIR: &str = "KRISHI_I18N_CONFIG_DIR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_first_authored() {
        assert_eq!(DEFAULT_LOCALE, Locale::ALL[0]);
    }
}
