use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config tables")?;
    let mut config = AppConfig::from(tables);
    config.zoom = crate::document::clamp_zoom(config.zoom);
    if !(config.zoom_step.is_finite() && config.zoom_step > 0.0) {
        config.zoom_step = super::defaults::default_zoom_step();
    }
    if config.reading_tick_secs == 0 {
        config.reading_tick_secs = super::defaults::default_reading_tick_secs();
    }
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use folio_core::Easing;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.zoom, 1.0);
        assert_eq!(config.page_flip.duration_ms, 400);
        assert_eq!(config.page_flip.accept_threshold, 0.3);
        assert_eq!(config.daily_goal_minutes, 30);
        assert_eq!(config.key_next_page, "right");
    }

    #[test]
    fn tables_map_onto_flat_config() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "night"
            zoom = 1.5

            [page_flip]
            duration_ms = 250
            easing = "linear"

            [reading]
            daily_goal_minutes = 45

            [keys]
            next_page = "space"

            [logging]
            log_level = "warn"

            [window]
            width = 900.0
            "#,
        )
        .expect("config parses");

        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.zoom, 1.5);
        assert_eq!(config.page_flip.duration_ms, 250);
        assert_eq!(config.page_flip.easing, Easing::Linear);
        assert_eq!(config.page_flip.direction_lock_px, 20.0);
        assert_eq!(config.daily_goal_minutes, 45);
        assert_eq!(config.key_next_page, "space");
        assert_eq!(config.key_prev_page, "left");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.window_width, 900.0);
        assert_eq!(config.window_height, 800.0);
    }

    #[test]
    fn out_of_range_zoom_is_clamped() {
        let config = parse_config("[appearance]\nzoom = 9.0\nzoom_step = -1.0\n").expect("parses");
        assert_eq!(config.zoom, 3.0);
        assert_eq!(config.zoom_step, 0.1);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[appearance\ntheme = ").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Night;
        config.key_zoom_in = "ctrl+=".to_string();
        let text = serialize_config(&config).expect("serializes");
        assert!(text.contains("[page_flip]"));
        let parsed = parse_config(&text).expect("parses back");
        assert_eq!(parsed.theme, ThemeMode::Night);
        assert_eq!(parsed.key_zoom_in, "ctrl+=");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("folio-reader-missing-config.toml");
        let _ = fs::remove_file(&path);
        let config = load_config(&path);
        assert_eq!(config.zoom_step, 0.1);
    }
}
