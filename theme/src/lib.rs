//! Theme registry: maps a theme identifier to a fixed palette of
//! semantic colors.
//!
//! Resolution is a total, pure function. Every [`ThemeId`] maps to exactly
//! one complete [`Palette`]; unknown identifiers fall back to the default
//! dark theme. The registry is static for the process lifetime, there is no
//! dynamic theme registration.

mod palette;

pub use palette::Palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for one of the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
    Blue,
    Purple,
    Green,
    Amber,
}

impl ThemeId {
    /// All theme identifiers, in selection-UI order.
    pub const ALL: [Self; 6] = [
        Self::Dark,
        Self::Light,
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Amber,
    ];

    /// Parse an identifier, falling back to the default dark theme for
    /// anything unrecognized. Persisted preferences go through this so a
    /// stale value can never leave the UI without a palette.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Lowercase string form, the same token used in persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Amber => "amber",
        }
    }

    /// Whether this theme belongs to the dark family (used for the
    /// background texture).
    pub fn is_dark(&self) -> bool {
        !matches!(self, Self::Light)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme identifier is not recognized.
///
/// Callers that want the fallback behavior instead should use
/// [`ThemeId::parse_or_default`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme id: {0}")]
pub struct UnknownThemeId(pub String);

impl FromStr for ThemeId {
    type Err = UnknownThemeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            "green" => Ok(Self::Green),
            "amber" => Ok(Self::Amber),
            other => Err(UnknownThemeId(other.to_owned())),
        }
    }
}

/// Metadata for one entry in the theme selection UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeInfo {
    pub id: ThemeId,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Accent color used for the selector preview swatch.
    pub preview_color: &'static str,
}

static THEME_LIST: [ThemeInfo; 6] = [
    ThemeInfo {
        id: ThemeId::Dark,
        display_name: "Dark Mode",
        description: "Dark theme for comfortable night viewing",
        preview_color: "#3B82F6",
    },
    ThemeInfo {
        id: ThemeId::Light,
        display_name: "Light Mode",
        description: "Light theme for daytime viewing",
        preview_color: "#3B82F6",
    },
    ThemeInfo {
        id: ThemeId::Blue,
        display_name: "Blue Theme",
        description: "Blue accent theme",
        preview_color: "#0EA5E9",
    },
    ThemeInfo {
        id: ThemeId::Purple,
        display_name: "Purple Theme",
        description: "Purple accent theme",
        preview_color: "#A855F7",
    },
    ThemeInfo {
        id: ThemeId::Green,
        display_name: "Green Theme",
        description: "Green accent theme",
        preview_color: "#10B981",
    },
    ThemeInfo {
        id: ThemeId::Amber,
        display_name: "Amber Theme",
        description: "Amber accent theme",
        preview_color: "#F59E0B",
    },
];

/// Resolve a theme to its palette. Total and referentially stable.
pub fn resolve(id: ThemeId) -> &'static Palette {
    palette::palette_for(id)
}

/// Resolve a raw identifier string; unknown ids resolve to the dark palette.
pub fn resolve_str(id: &str) -> &'static Palette {
    resolve(ThemeId::parse_or_default(id))
}

/// Ordered list of themes for populating a selection UI.
pub fn list() -> &'static [ThemeInfo] {
    &THEME_LIST
}

/// Background texture for the given theme, as a CSS image value.
///
/// Dark-family themes get a subtle dotted SVG texture; the light theme has
/// none.
pub fn background_image(id: ThemeId) -> Option<&'static str> {
    const DOTTED: &str = "url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%23222223' fill-opacity='0.08'%3E%3Cpath d='M29 30l-1-1 1-1 1 1-1 1M30 29l-1-1 1-1 1 1-1 1M30 31l-1 1 1 1 1-1-1-1M31 30l 1-1-1-1-1 1 1 1'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\")";
    id.is_dark().then_some(DOTTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_total_and_stable() {
        for id in ThemeId::ALL {
            let first = resolve(id);
            let second = resolve(id);
            assert_eq!(first, second, "palette for {id} must be stable");
        }
    }

    #[test]
    fn unknown_id_falls_back_to_dark() {
        assert_eq!(resolve_str("nonexistent"), resolve(ThemeId::Dark));
        assert_eq!(resolve_str(""), resolve(ThemeId::Dark));
        assert_eq!(ThemeId::parse_or_default("solarized"), ThemeId::Dark);
    }

    #[test]
    fn every_theme_appears_in_list_once() {
        let listed = list();
        assert_eq!(listed.len(), ThemeId::ALL.len());
        for id in ThemeId::ALL {
            assert_eq!(listed.iter().filter(|info| info.id == id).count(), 1);
        }
    }

    #[test]
    fn theme_id_round_trips_through_str() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>(), Ok(id));
        }
        assert!("neon".parse::<ThemeId>().is_err());
    }

    #[test]
    fn theme_id_serde_uses_lowercase() {
        let json = serde_json::to_string(&ThemeId::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        let back: ThemeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThemeId::Purple);
    }

    #[test]
    fn only_light_theme_has_no_background_texture() {
        assert!(background_image(ThemeId::Light).is_none());
        for id in ThemeId::ALL.into_iter().filter(|id| id.is_dark()) {
            assert!(background_image(id).is_some());
        }
    }
}
