//! Static palettes for every built-in theme.
//!
//! Each palette is complete: consumers read fields off the resolved palette
//! instead of branching on the theme identifier, so a missing role would be
//! a compile error here rather than a runtime fallback somewhere else.

use crate::ThemeId;

/// Named color roles shared by every surface of the app.
///
/// Values are CSS color strings (`#RRGGBB` or `rgba(...)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub sidebar_background: &'static str,
    pub sidebar_foreground: &'static str,
    pub card_background: &'static str,
    pub card_foreground: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub accent: &'static str,
    pub accent_light: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub hover: &'static str,
}

static DARK: Palette = Palette {
    background: "#0E0E0F",
    foreground: "#FFFFFF",
    sidebar_background: "#111214",
    sidebar_foreground: "#FFFFFF",
    card_background: "#111214",
    card_foreground: "#FFFFFF",
    border: "#1F2124",
    primary: "#3B82F6",
    primary_foreground: "#FFFFFF",
    accent: "#60A5FA",
    accent_light: "rgba(59, 130, 246, 0.1)",
    text: "#FFFFFF",
    text_secondary: "#9CA3AF",
    text_tertiary: "#6B7280",
    hover: "rgba(31, 33, 36, 0.5)",
};

static LIGHT: Palette = Palette {
    background: "#FFFFFF",
    foreground: "#1F2937",
    sidebar_background: "#F9FAFB",
    sidebar_foreground: "#1F2937",
    card_background: "#FFFFFF",
    card_foreground: "#1F2937",
    border: "#E5E7EB",
    primary: "#3B82F6",
    primary_foreground: "#FFFFFF",
    accent: "#2563EB",
    accent_light: "#DBEAFE",
    text: "#1F2937",
    text_secondary: "#6B7280",
    text_tertiary: "#9CA3AF",
    hover: "rgba(243, 244, 246, 0.8)",
};

static BLUE: Palette = Palette {
    background: "#0F172A",
    foreground: "#FFFFFF",
    sidebar_background: "#1E293B",
    sidebar_foreground: "#FFFFFF",
    card_background: "#1E293B",
    card_foreground: "#FFFFFF",
    border: "#334155",
    primary: "#0EA5E9",
    primary_foreground: "#FFFFFF",
    accent: "#38BDF8",
    accent_light: "rgba(14, 165, 233, 0.1)",
    text: "#FFFFFF",
    text_secondary: "#CBD5E1",
    text_tertiary: "#94A3B8",
    hover: "rgba(30, 41, 59, 0.5)",
};

static PURPLE: Palette = Palette {
    background: "#0F0B1D",
    foreground: "#FFFFFF",
    sidebar_background: "#1A1333",
    sidebar_foreground: "#FFFFFF",
    card_background: "#1A1333",
    card_foreground: "#FFFFFF",
    border: "#3E2D5C",
    primary: "#A855F7",
    primary_foreground: "#FFFFFF",
    accent: "#D8B4FE",
    accent_light: "rgba(168, 85, 247, 0.1)",
    text: "#FFFFFF",
    text_secondary: "#E9D5FF",
    text_tertiary: "#D8B4FE",
    hover: "rgba(26, 19, 51, 0.5)",
};

static GREEN: Palette = Palette {
    background: "#051512",
    foreground: "#FFFFFF",
    sidebar_background: "#134E4A",
    sidebar_foreground: "#FFFFFF",
    card_background: "#1F4D4A",
    card_foreground: "#FFFFFF",
    border: "#2D6A64",
    primary: "#10B981",
    primary_foreground: "#FFFFFF",
    accent: "#6EE7B7",
    accent_light: "rgba(16, 185, 129, 0.1)",
    text: "#FFFFFF",
    text_secondary: "#A7F3D0",
    text_tertiary: "#6EE7B7",
    hover: "rgba(19, 78, 74, 0.5)",
};

static AMBER: Palette = Palette {
    background: "#1B1410",
    foreground: "#FFFFFF",
    sidebar_background: "#292415",
    sidebar_foreground: "#FFFFFF",
    card_background: "#3F3428",
    card_foreground: "#FFFFFF",
    border: "#654321",
    primary: "#F59E0B",
    primary_foreground: "#FFFFFF",
    accent: "#FBBF24",
    accent_light: "rgba(245, 158, 11, 0.1)",
    text: "#FFFFFF",
    text_secondary: "#FEF08A",
    text_tertiary: "#FCD34D",
    hover: "rgba(41, 36, 21, 0.5)",
};

pub(crate) fn palette_for(id: ThemeId) -> &'static Palette {
    match id {
        ThemeId::Dark => &DARK,
        ThemeId::Light => &LIGHT,
        ThemeId::Blue => &BLUE,
        ThemeId::Purple => &PURPLE,
        ThemeId::Green => &GREEN,
        ThemeId::Amber => &AMBER,
    }
}
