//! Theme context - active light/dark theme persisted in local storage

use anyhow::Result;
use ratatui::style::Color;

use crate::constants::LOCAL_STORAGE_THEME_KEY;
use crate::storage::LocalStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                inverted_bg: Color::Blue,
                inverted_fg: Color::White,
                error: Color::Red,
                success: Color::Green,
            },
            Theme::Dark => Palette {
                bg: Color::Black,
                fg: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                inverted_bg: Color::Cyan,
                inverted_fg: Color::Black,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }
}

/// Colors the frame is drawn with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub inverted_bg: Color,
    pub inverted_fg: Color,
    pub error: Color,
    pub success: Color,
}

/// Holds the active theme for the session.
///
/// Built once from storage at startup; every change is written back under
/// [`LOCAL_STORAGE_THEME_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    /// Read the persisted theme, defaulting to light when absent or unparseable
    pub fn init(storage: &LocalStorage) -> Self {
        let theme = storage
            .get(LOCAL_STORAGE_THEME_KEY)
            .and_then(Theme::parse)
            .unwrap_or_default();
        ThemeContext { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to `theme`. The in-memory value changes even if persisting fails.
    pub fn set(&mut self, theme: Theme, storage: &mut LocalStorage) -> Result<()> {
        self.theme = theme;
        storage.set(LOCAL_STORAGE_THEME_KEY, theme.as_str())
    }

    pub fn toggle(&mut self, storage: &mut LocalStorage) -> Result<Theme> {
        let next = self.theme.toggle();
        self.set(next, storage)?;
        Ok(next)
    }
}
