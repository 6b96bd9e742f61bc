mod constants;
mod reader;

use crate::cache::Bookmark;
use crate::config::AppConfig;
use crate::document::Document;
use crate::goals::GoalTracker;
use folio_core::PageTurnCoordinator;
use iced::{Point, Task};
use std::path::PathBuf;
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use reader::ReaderState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) reader: ReaderState,
    pub(super) goals: GoalTracker,
    pub(super) config: AppConfig,
    pub(super) doc_path: PathBuf,
    pub(super) window_size: (f32, f32),
    /// Last transient notice shown in the footer.
    pub(super) notice: Option<String>,
}

/// Pixel size of the page area inside a window of the given size.
pub fn page_area_size(window_width: f32, window_height: f32) -> (u32, u32) {
    let width = window_width - 2.0 * PAGE_AREA_PADDING_PX;
    let height = window_height
        - CONTROL_BAR_HEIGHT_PX
        - FOOTER_HEIGHT_PX
        - 2.0 * PAGE_AREA_PADDING_PX;
    (width.max(1.0).floor() as u32, height.max(1.0).floor() as u32)
}

/// Window coordinates of the page area's top-left corner.
pub fn page_area_origin() -> (f32, f32) {
    (
        PAGE_AREA_PADDING_PX,
        CONTROL_BAR_HEIGHT_PX + PAGE_AREA_PADDING_PX,
    )
}

impl App {
    pub(super) fn bootstrap(
        document: Document,
        config: AppConfig,
        doc_path: PathBuf,
        bookmark: Option<Bookmark>,
    ) -> (App, Task<Message>) {
        let goals = GoalTracker::load(config.daily_goal_minutes, config.exp_per_minute);
        let app = Self::with_parts(document, config, doc_path, bookmark, goals);
        info!(
            path = %app.doc_path.display(),
            position = app.reader.document().position(),
            zoom = app.reader.document().zoom(),
            "Reader ready"
        );
        (app, Task::none())
    }

    pub(in crate::app) fn with_parts(
        mut document: Document,
        config: AppConfig,
        doc_path: PathBuf,
        bookmark: Option<Bookmark>,
        goals: GoalTracker,
    ) -> App {
        let window_size = (config.window_width, config.window_height);
        let (width, height) = page_area_size(window_size.0, window_size.1);
        document.set_viewport(width, height);
        if let Some(bookmark) = bookmark {
            document.set_position(bookmark.position);
        }
        let coordinator = PageTurnCoordinator::new(document, config.page_flip);
        let mut app = App {
            reader: ReaderState {
                coordinator,
                frame: None,
                cursor: Point::ORIGIN,
                pending_viewport: None,
            },
            goals,
            config,
            doc_path,
            window_size,
            notice: None,
        };
        app.reader.refresh_frame();
        app
    }

    pub(super) fn page_area(&self) -> (u32, u32) {
        page_area_size(self.window_size.0, self.window_size.1)
    }

    pub(super) fn current_bookmark(&self) -> Bookmark {
        let document = self.reader.document();
        Bookmark {
            position: document.position(),
            zoom: document.zoom(),
        }
    }

    pub(super) fn persist_bookmark(&self) {
        let bookmark = self.current_bookmark();
        crate::cache::save_bookmark(&self.doc_path, bookmark);
        info!(
            path = %self.doc_path.display(),
            position = bookmark.position,
            "Bookmark saved"
        );
    }
}
