use crate::document::Document;
use folio_core::{FlipDirection, PageTurnCoordinator};
use iced::widget::image::Handle;
use iced::Point;

/// Reader-related model: the flip engine owning the document, plus the
/// frame currently handed to the image widget.
pub struct ReaderState {
    pub(in crate::app) coordinator: PageTurnCoordinator<Document>,
    pub(in crate::app) frame: Option<Handle>,
    pub(in crate::app) cursor: Point,
    /// Viewport size waiting for the running flip to finish.
    pub(in crate::app) pending_viewport: Option<(u32, u32)>,
}

impl ReaderState {
    pub(in crate::app) fn document(&self) -> &Document {
        self.coordinator.viewer()
    }

    pub(in crate::app) fn can_turn(&self, direction: FlipDirection) -> bool {
        self.coordinator.is_idle() && self.document().can_advance(direction)
    }

    /// Recompose the displayed frame from the coordinator.
    pub(in crate::app) fn refresh_frame(&mut self) {
        self.frame = self.coordinator.display_frame().map(|bitmap| {
            let (width, height) = bitmap.dimensions();
            Handle::from_rgba(width, height, bitmap.into_raw())
        });
    }
}
