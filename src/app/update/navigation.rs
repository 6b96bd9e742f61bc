use super::super::state::{App, WHEEL_LINE_PX, page_area_origin};
use super::Effect;
use folio_core::{FlipDirection, FlipResolution, Point};
use iced::mouse::ScrollDelta;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_page_turn(&mut self, direction: FlipDirection, effects: &mut Vec<Effect>) {
        if self
            .reader
            .coordinator
            .request_page_turn(direction, Instant::now())
        {
            effects.push(Effect::RefreshFrame);
        }
    }

    pub(super) fn handle_pointer_moved(&mut self, position: iced::Point, effects: &mut Vec<Effect>) {
        // The page area and the window listener both report moves during a drag.
        if self.reader.coordinator.drag().active && position == self.reader.cursor {
            return;
        }
        self.reader.cursor = position;
        if self
            .reader
            .coordinator
            .pointer_moved(Point::new(position.x, position.y))
            && self.reader.coordinator.session().is_some()
        {
            effects.push(Effect::RefreshFrame);
        }
    }

    /// Keeps a drag tracking the cursor after it leaves the page area.
    pub(super) fn handle_window_cursor_moved(
        &mut self,
        position: iced::Point,
        effects: &mut Vec<Effect>,
    ) {
        if !self.reader.coordinator.drag().active {
            return;
        }
        let (origin_x, origin_y) = page_area_origin();
        let local = iced::Point::new(position.x - origin_x, position.y - origin_y);
        self.handle_pointer_moved(local, effects);
    }

    pub(super) fn handle_pointer_pressed(&mut self) {
        let cursor = self.reader.cursor;
        self.reader
            .coordinator
            .pointer_pressed(Point::new(cursor.x, cursor.y));
    }

    pub(super) fn handle_pointer_released(&mut self, effects: &mut Vec<Effect>) {
        if self.reader.coordinator.pointer_released(Instant::now()) {
            effects.push(Effect::RefreshFrame);
        }
    }

    pub(super) fn handle_flip_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.reader.coordinator.session().is_none() {
            return;
        }
        let resolution = self.reader.coordinator.tick(now);
        if let Some(FlipResolution::Completed(direction)) = resolution {
            let document = self.reader.document();
            info!(
                %direction,
                position = document.position(),
                label = %document.footer_label(),
                "Moved to new position"
            );
            effects.push(Effect::SaveBookmark);
        }
        if resolution.is_some() {
            self.apply_pending_viewport();
        }
        effects.push(Effect::RefreshFrame);
    }

    pub(super) fn handle_wheel_scrolled(&mut self, delta: ScrollDelta, effects: &mut Vec<Effect>) {
        let dy = match delta {
            ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_PX,
            ScrollDelta::Pixels { y, .. } => y,
        };
        let Some(document) = self.reader.coordinator.viewer_mut() else {
            debug!("Ignoring wheel input during flip");
            return;
        };
        // Wheel deltas are positive when scrolling up.
        if document.scroll_by(-dy) {
            effects.push(Effect::RefreshFrame);
        }
    }
}
