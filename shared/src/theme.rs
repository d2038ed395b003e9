//! Light/dark theme model and the initial-theme decision.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Visual mode mirrored on the document root and kept in storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light color scheme. Default when nothing else is known.
    #[default]
    Light,
    /// Dark color scheme.
    Dark,
}

/// Returned when a stored or attribute value is not a known theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected `light` or `dark`")]
pub struct ParseThemeError(pub String);

impl Theme {
    /// The literal written to storage and to the root attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Maps a `prefers-color-scheme: dark` match result to a theme.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a raw value, treating anything unknown as absent.
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::debug!("ignoring theme value: {err}");
                None
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Picks the theme to apply at startup.
///
/// A stored preference wins. Without one, the system color scheme decides,
/// and when that is unknown (no media-query support) the result is
/// [`Theme::Light`].
pub fn initial_theme(stored: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    match stored {
        Some(theme) => theme,
        None => prefers_dark.map(Theme::from_prefers_dark).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system() {
        for stored in [Theme::Light, Theme::Dark] {
            for system in [None, Some(true), Some(false)] {
                assert_eq!(initial_theme(Some(stored), system), stored);
            }
        }
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(initial_theme(None, Some(true)), Theme::Dark);
        assert_eq!(initial_theme(None, Some(false)), Theme::Light);
    }

    #[test]
    fn missing_media_query_defaults_to_light() {
        assert_eq!(initial_theme(None, None), Theme::Light);
    }

    #[test]
    fn parses_only_known_literals() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("Dark".parse::<Theme>(), Err(ParseThemeError("Dark".to_string())));
        assert_eq!(Theme::parse_lenient(Some("sepia")), None);
        assert_eq!(Theme::parse_lenient(None), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
