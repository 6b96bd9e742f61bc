use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use folio_core::FlipOptions;
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    page_flip: FlipOptions,
    #[serde(default)]
    reading: ReadingConfig,
    #[serde(default)]
    keys: KeyConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    window: WindowConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            zoom: tables.appearance.zoom,
            zoom_step: tables.appearance.zoom_step,
            window_width: tables.window.width,
            window_height: tables.window.height,
            page_flip: tables.page_flip.sanitized(),
            daily_goal_minutes: tables.reading.daily_goal_minutes,
            exp_per_minute: tables.reading.exp_per_minute,
            reading_tick_secs: tables.reading.tick_secs,
            log_level: tables.logging.log_level,
            key_next_page: tables.keys.next_page,
            key_prev_page: tables.keys.prev_page,
            key_save_bookmark: tables.keys.save_bookmark,
            key_zoom_in: tables.keys.zoom_in,
            key_zoom_out: tables.keys.zoom_out,
            key_toggle_theme: tables.keys.toggle_theme,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                zoom: config.zoom,
                zoom_step: config.zoom_step,
            },
            page_flip: config.page_flip,
            reading: ReadingConfig {
                daily_goal_minutes: config.daily_goal_minutes,
                exp_per_minute: config.exp_per_minute,
                tick_secs: config.reading_tick_secs,
            },
            keys: KeyConfig {
                next_page: config.key_next_page.clone(),
                prev_page: config.key_prev_page.clone(),
                save_bookmark: config.key_save_bookmark.clone(),
                zoom_in: config.key_zoom_in.clone(),
                zoom_out: config.key_zoom_out.clone(),
                toggle_theme: config.key_toggle_theme.clone(),
                safe_quit: config.key_safe_quit.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_zoom")]
    zoom: f32,
    #[serde(default = "defaults::default_zoom_step")]
    zoom_step: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            zoom: defaults::default_zoom(),
            zoom_step: defaults::default_zoom_step(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ReadingConfig {
    #[serde(default = "defaults::default_daily_goal_minutes")]
    daily_goal_minutes: u32,
    #[serde(default = "defaults::default_exp_per_minute")]
    exp_per_minute: u32,
    #[serde(default = "defaults::default_reading_tick_secs")]
    tick_secs: u64,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            daily_goal_minutes: defaults::default_daily_goal_minutes(),
            exp_per_minute: defaults::default_exp_per_minute(),
            tick_secs: defaults::default_reading_tick_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeyConfig {
    #[serde(default = "defaults::default_key_next_page")]
    next_page: String,
    #[serde(default = "defaults::default_key_prev_page")]
    prev_page: String,
    #[serde(default = "defaults::default_key_save_bookmark")]
    save_bookmark: String,
    #[serde(default = "defaults::default_key_zoom_in")]
    zoom_in: String,
    #[serde(default = "defaults::default_key_zoom_out")]
    zoom_out: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            next_page: defaults::default_key_next_page(),
            prev_page: defaults::default_key_prev_page(),
            save_bookmark: defaults::default_key_save_bookmark(),
            zoom_in: defaults::default_key_zoom_in(),
            zoom_out: defaults::default_key_zoom_out(),
            toggle_theme: defaults::default_key_toggle_theme(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}
