mod messages;
mod state;
mod update;
mod view;

pub use state::{App, page_area_size};

use crate::cache::Bookmark;
use crate::config::AppConfig;
use crate::document::Document;
use iced::{Size, Theme, window};

/// Helper to launch the app with an opened document.
pub fn run_app(
    document: Document,
    config: AppConfig,
    doc_path: std::path::PathBuf,
    bookmark: Option<Bookmark>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application("Folio Reader", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(crate::theme::Theme::from(app.config.theme)))
        .run_with(move || App::bootstrap(document, config, doc_path, bookmark))
}
