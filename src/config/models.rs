use folio_core::FlipOptions;
use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_zoom")]
    pub zoom: f32,
    #[serde(default = "crate::config::defaults::default_zoom_step")]
    pub zoom_step: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub page_flip: FlipOptions,
    #[serde(default = "crate::config::defaults::default_daily_goal_minutes")]
    pub daily_goal_minutes: u32,
    #[serde(default = "crate::config::defaults::default_exp_per_minute")]
    pub exp_per_minute: u32,
    #[serde(default = "crate::config::defaults::default_reading_tick_secs")]
    pub reading_tick_secs: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next_page")]
    pub key_next_page: String,
    #[serde(default = "crate::config::defaults::default_key_prev_page")]
    pub key_prev_page: String,
    #[serde(default = "crate::config::defaults::default_key_save_bookmark")]
    pub key_save_bookmark: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_in")]
    pub key_zoom_in: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_out")]
    pub key_zoom_out: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            zoom: crate::config::defaults::default_zoom(),
            zoom_step: crate::config::defaults::default_zoom_step(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            page_flip: FlipOptions::default(),
            daily_goal_minutes: crate::config::defaults::default_daily_goal_minutes(),
            exp_per_minute: crate::config::defaults::default_exp_per_minute(),
            reading_tick_secs: crate::config::defaults::default_reading_tick_secs(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_page: crate::config::defaults::default_key_next_page(),
            key_prev_page: crate::config::defaults::default_key_prev_page(),
            key_save_bookmark: crate::config::defaults::default_key_save_bookmark(),
            key_zoom_in: crate::config::defaults::default_key_zoom_in(),
            key_zoom_out: crate::config::defaults::default_key_zoom_out(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
