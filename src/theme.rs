use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the visitor's theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolves the mode to start with on page load.
    ///
    /// A valid stored preference always wins; an absent or unreadable one falls
    /// back to the operating system's colour scheme.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_stored_value_restores_toggled_mode() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let toggled = mode.toggle();
            let stored = toggled.to_string();
            assert_eq!(ThemeMode::initial(Some(&stored), !toggled.is_dark()), toggled);
        }
    }

    #[test]
    fn test_initial_prefers_stored_value() {
        assert_eq!(ThemeMode::initial(Some("light"), true), ThemeMode::Light);
        assert_eq!(ThemeMode::initial(Some("dark"), false), ThemeMode::Dark);
    }

    #[test]
    fn test_initial_falls_back_to_os_preference() {
        assert_eq!(ThemeMode::initial(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(None, false), ThemeMode::Light);
        // empty storage slot reads as "no preference"
        assert_eq!(ThemeMode::initial(Some(""), true), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(Some("purple"), false), ThemeMode::Light);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(" dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    }
}
