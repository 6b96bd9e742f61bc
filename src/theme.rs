//! Mapping from the configured reading mode to the iced theme.

use crate::config::ThemeMode;
use iced::Theme as IcedTheme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Paper,
    Dusk,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Day => Theme::Paper,
            ThemeMode::Night => Theme::Dusk,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Paper => IcedTheme::Light,
            Theme::Dusk => IcedTheme::Dark,
        }
    }
}
