//! Mosaic colour themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Rgba;

/// Mosaic colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// The eight named colours a mosaic is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Month mosaic background.
    pub background: Rgba,
    /// Year mosaic background.
    pub background_deep: Rgba,
    /// Fill for days without an entry.
    pub surface: Rgba,
    /// Titles.
    pub text_primary: Rgba,
    /// Subtitles and legends.
    pub text_secondary: Rgba,
    /// Weekday headers.
    pub text_tertiary: Rgba,
    /// Day numbers in empty cells.
    pub text_muted: Rgba,
    pub footer: Rgba,
}

const DARK: ThemeColors = ThemeColors {
    background: Rgba::rgb(0x1A, 0x1A, 0x1A),
    background_deep: Rgba::rgb(0x0D, 0x0D, 0x0D),
    surface: Rgba::rgb(0x2D, 0x2D, 0x2D),
    text_primary: Rgba::rgb(0xFF, 0xFF, 0xFF),
    text_secondary: Rgba::rgb(0x88, 0x88, 0x88),
    text_tertiary: Rgba::rgb(0x66, 0x66, 0x66),
    text_muted: Rgba::rgb(0x55, 0x55, 0x55),
    footer: Rgba::rgb(0x44, 0x44, 0x44),
};

const LIGHT: ThemeColors = ThemeColors {
    background: Rgba::rgb(0xFA, 0xFA, 0xFA),
    background_deep: Rgba::rgb(0xFF, 0xFF, 0xFF),
    surface: Rgba::rgb(0xE0, 0xE0, 0xE0),
    text_primary: Rgba::rgb(0x1A, 0x1A, 0x1A),
    text_secondary: Rgba::rgb(0x66, 0x66, 0x66),
    text_tertiary: Rgba::rgb(0x88, 0x88, 0x88),
    text_muted: Rgba::rgb(0xAA, 0xAA, 0xAA),
    footer: Rgba::rgb(0x99, 0x99, 0x99),
};

impl Theme {
    /// Resolves a dark-mode flag.
    #[must_use]
    pub const fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn colors(self) -> ThemeColors {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("invalid theme: {s} (expected dark or light)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
    }

    #[test]
    fn test_dark_theme_colors() {
        let c = Theme::Dark.colors();
        assert_eq!(c.background.to_hex(), "#1A1A1A");
        assert_eq!(c.surface.to_hex(), "#2D2D2D");
        assert_eq!(c.text_primary, Rgba::WHITE);
        assert_eq!(c.footer.to_hex(), "#444444");
    }

    #[test]
    fn test_light_theme_colors() {
        let c = Theme::Light.colors();
        assert_eq!(c.background.to_hex(), "#FAFAFA");
        assert_eq!(c.background_deep, Rgba::WHITE);
        assert_eq!(c.text_primary.to_hex(), "#1A1A1A");
        assert_eq!(c.text_muted.to_hex(), "#AAAAAA");
    }

    #[test]
    fn test_titles_are_legible_on_both_backgrounds() {
        for theme in [Theme::Dark, Theme::Light] {
            let c = theme.colors();
            assert!(c.text_primary.contrast_ratio(c.background) >= 4.5, "{theme}");
            assert!(c.text_primary.contrast_ratio(c.background_deep) >= 4.5, "{theme}");
            assert!(c.text_secondary.contrast_ratio(c.background) >= 3.0, "{theme}");
        }
    }

    #[test]
    fn test_fills_differ_from_text() {
        for theme in [Theme::Dark, Theme::Light] {
            let c = theme.colors();
            assert_ne!(c.surface, c.text_muted);
            assert_ne!(c.background, c.text_primary);
            assert!(c.text_muted.contrast_ratio(c.surface) > 1.5, "{theme}");
        }
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
