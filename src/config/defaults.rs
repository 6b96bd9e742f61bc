pub(crate) fn default_zoom() -> f32 {
    1.0
}

pub(crate) fn default_zoom_step() -> f32 {
    0.1
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_daily_goal_minutes() -> u32 {
    30
}

pub(crate) fn default_exp_per_minute() -> u32 {
    10
}

pub(crate) fn default_reading_tick_secs() -> u64 {
    60
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next_page() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "left".to_string()
}

pub(crate) fn default_key_save_bookmark() -> String {
    "ctrl+b".to_string()
}

pub(crate) fn default_key_zoom_in() -> String {
    "=".to_string()
}

pub(crate) fn default_key_zoom_out() -> String {
    "-".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
