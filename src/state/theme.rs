//! Theme preference value and its presentation mapping.
//!
//! DESIGN
//! ======
//! `ThemePreference` is a plain value passed around by the theme manager;
//! resolution and toggling are pure so they can be checked without a page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve the startup theme: persisted value, else system preference.
    ///
    /// Unrecognized persisted strings are ignored.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved.and_then(Self::parse) {
            Some(mode) => mode,
            None if system_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    /// Interpret the current `data-theme` attribute. Anything other than
    /// `"dark"` counts as light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button: offer the sun while dark, the moon
    /// while light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// Browser chrome color written to `<meta name="theme-color">`.
    pub fn theme_color(self) -> &'static str {
        match self {
            Self::Light => "#4f46e5",
            Self::Dark => "#0b1220",
        }
    }
}
