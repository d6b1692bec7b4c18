// Theme system for the TUI
//
// A small fixed set of themes, cyclable at runtime with 't'. Each theme
// defines colors for all UI elements.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Paper,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Paper]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Paper => "paper",
        }
    }

    /// Resolve a configured theme name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "paper" => ThemeKind::Paper,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Paper => Theme::paper(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub title: Color,
    /// Author line and highlights
    pub accent: Color,
    /// Secondary text (source line, hints, reveal transition)
    pub dim: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    fn dark() -> Self {
        Self {
            background: Color::Rgb(0x1e, 0x1e, 0x2e),
            foreground: Color::Rgb(0xcd, 0xd6, 0xf4),
            border: Color::Rgb(0x45, 0x47, 0x5a),
            title: Color::Rgb(0x89, 0xb4, 0xfa),
            accent: Color::Rgb(0xf9, 0xe2, 0xaf),
            dim: Color::Rgb(0x6c, 0x70, 0x86),
            error: Color::Rgb(0xf3, 0x8b, 0xa8),
            success: Color::Rgb(0xa6, 0xe3, 0xa1),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(0xef, 0xf1, 0xf5),
            foreground: Color::Rgb(0x4c, 0x4f, 0x69),
            border: Color::Rgb(0xac, 0xb0, 0xbe),
            title: Color::Rgb(0x1e, 0x66, 0xf5),
            accent: Color::Rgb(0xdf, 0x8e, 0x1d),
            dim: Color::Rgb(0x9c, 0xa0, 0xb0),
            error: Color::Rgb(0xd2, 0x0f, 0x39),
            success: Color::Rgb(0x40, 0xa0, 0x2b),
        }
    }

    /// Warm, low-contrast reading theme
    fn paper() -> Self {
        Self {
            background: Color::Rgb(0xf4, 0xec, 0xd8),
            foreground: Color::Rgb(0x3b, 0x32, 0x28),
            border: Color::Rgb(0xc3, 0xb8, 0x9c),
            title: Color::Rgb(0x8b, 0x5a, 0x2b),
            accent: Color::Rgb(0xa0, 0x52, 0x2d),
            dim: Color::Rgb(0x8a, 0x7e, 0x66),
            error: Color::Rgb(0xb0, 0x30, 0x30),
            success: Color::Rgb(0x4a, 0x7a, 0x3a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_all_themes() {
        let mut kind = ThemeKind::Dark;
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::all().len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("Paper"), ThemeKind::Paper);
    }
}
