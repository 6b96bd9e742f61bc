use super::super::state::{App, page_area_size};
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_zoom_step(&mut self, sign: f32, effects: &mut Vec<Effect>) {
        let step = self.config.zoom_step * sign;
        let Some(document) = self.reader.coordinator.viewer_mut() else {
            debug!("Ignoring zoom during flip");
            return;
        };
        let before = document.zoom();
        let after = document.set_zoom(before + step);
        if (after - before).abs() > f32::EPSILON {
            info!(from = before, to = after, "Zoom changed");
            self.config.zoom = after;
            effects.push(Effect::RefreshFrame);
        }
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Toggled theme");
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.window_size = (width, height);
        let (area_width, area_height) = page_area_size(width, height);
        match self.reader.coordinator.viewer_mut() {
            Some(document) => {
                document.set_viewport(area_width, area_height);
                debug!(width = area_width, height = area_height, "Viewport resized");
                effects.push(Effect::RefreshFrame);
            }
            None => {
                self.reader.pending_viewport = Some((area_width, area_height));
            }
        }
    }

    /// Apply a resize that arrived while a flip was running.
    pub(super) fn apply_pending_viewport(&mut self) {
        let Some((width, height)) = self.reader.pending_viewport else {
            return;
        };
        if let Some(document) = self.reader.coordinator.viewer_mut() {
            document.set_viewport(width, height);
            self.reader.pending_viewport = None;
            debug!(width, height, "Applied deferred viewport resize");
        }
    }
}
