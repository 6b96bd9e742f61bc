//! Compositing of flip overlay frames.
//!
//! A frame is the background fill, the page that will be showing once the
//! flip ends, the page being pulled away squeezed into a shrinking
//! left-aligned strip, and a soft shadow just inside that strip's edge.

use crate::geometry::FlipGeometry;
use crate::options::FlipOptions;
use crate::session::FlipSession;
use crate::types::{Bitmap, FlipDirection};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Horizontal position of the moving edge inside a page of `width` pixels.
///
/// Forward flips shrink the outgoing page from the right, backward flips
/// grow the incoming page from the left; both place the edge at the same
/// spot for mirrored progress values.
pub fn seam_x(direction: FlipDirection, progress: f32, width: f32) -> f32 {
    match direction {
        FlipDirection::Forward => width * (1.0 - progress),
        FlipDirection::Backward => width * progress,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlipRenderer {
    shadow_width: f32,
    shadow_peak_opacity: u8,
    filter: FilterType,
}

impl Default for FlipRenderer {
    fn default() -> Self {
        Self::new(&FlipOptions::default())
    }
}

impl FlipRenderer {
    pub fn new(options: &FlipOptions) -> Self {
        Self {
            shadow_width: options.shadow_width_px,
            shadow_peak_opacity: options.shadow_peak_opacity,
            filter: FilterType::Triangle,
        }
    }

    /// Allocate a `width × height` surface and paint `session` onto it.
    pub fn render<V>(&self, width: u32, height: u32, session: &FlipSession<V>) -> RgbaImage {
        let mut surface = RgbaImage::new(width, height);
        self.paint(&mut surface, session);
        surface
    }

    /// Paint one frame. Missing bitmaps skip their layer; nothing is drawn
    /// outside `surface`.
    pub fn paint<V>(&self, surface: &mut RgbaImage, session: &FlipSession<V>) {
        for pixel in surface.pixels_mut() {
            *pixel = session.background;
        }

        let rect = session.page_rect;
        if rect.is_empty() {
            return;
        }
        let (width, height) = (rect.width, rect.height);

        let (under, over) = match session.direction() {
            FlipDirection::Forward => (session.next.as_ref(), session.current.as_ref()),
            FlipDirection::Backward => (session.current.as_ref(), session.next.as_ref()),
        };

        if let Some(bitmap) = under {
            self.draw_scaled(surface, bitmap, rect.x, rect.y, width, height);
        }

        let seam = seam_x(session.direction(), session.progress(), width as f32);
        if seam <= 1.0 {
            return;
        }
        let Some(bitmap) = over else {
            return;
        };

        let strip_width = (seam.round() as u32).clamp(1, width);
        self.draw_scaled(surface, bitmap, rect.x, rect.y, strip_width, height);
        self.paint_shadow(surface, rect.x as f32 + seam, rect.y, height);
    }

    /// Paint the resting view: background plus the current page in place.
    pub fn render_still(&self, width: u32, height: u32, geometry: &FlipGeometry) -> RgbaImage {
        let mut surface = RgbaImage::from_pixel(width, height, geometry.background);
        let rect = geometry.page_rect;
        if !rect.is_empty() {
            self.draw_scaled(&mut surface, &geometry.current, rect.x, rect.y, rect.width, rect.height);
        }
        surface
    }

    fn draw_scaled(
        &self,
        surface: &mut RgbaImage,
        bitmap: &Bitmap,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) {
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return;
        }
        if bitmap.dimensions() == (width, height) {
            imageops::overlay(surface, bitmap, x as i64, y as i64);
        } else {
            let scaled = imageops::resize(bitmap, width, height, self.filter);
            imageops::overlay(surface, &scaled, x as i64, y as i64);
        }
    }

    /// Darken `[edge - shadow_width, edge)` with alpha fading from the peak at
    /// the edge to zero at the far end.
    fn paint_shadow(&self, surface: &mut RgbaImage, edge: f32, top: i32, height: u32) {
        if self.shadow_width <= 0.0 || self.shadow_peak_opacity == 0 {
            return;
        }
        let peak = self.shadow_peak_opacity as f32 / 255.0;

        let x_start = ((edge - self.shadow_width).floor() as i64).max(0);
        let x_end = (edge.ceil() as i64).min(surface.width() as i64);
        let y_start = (top as i64).max(0);
        let y_end = (top as i64 + height as i64).min(surface.height() as i64);
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        for x in x_start..x_end {
            let distance = edge - (x as f32 + 0.5);
            if !(0.0..=self.shadow_width).contains(&distance) {
                continue;
            }
            let alpha = peak * (1.0 - distance / self.shadow_width);
            for y in y_start..y_end {
                darken(surface.get_pixel_mut(x as u32, y as u32), alpha);
            }
        }
    }
}

fn darken(pixel: &mut Rgba<u8>, alpha: f32) {
    let keep = 1.0 - alpha.clamp(0.0, 1.0);
    for channel in pixel.0.iter_mut().take(3) {
        *channel = (*channel as f32 * keep).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const GRAY: Rgba<u8> = Rgba([0x52, 0x52, 0x52, 255]);

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> Bitmap {
        RgbaImage::from_pixel(width, height, color)
    }

    fn session(direction: FlipDirection, progress: f32, rect: Rect) -> FlipSession<()> {
        let mut session = FlipSession::new(
            Some(solid(rect.width, rect.height, RED)),
            Some(solid(rect.width, rect.height, BLUE)),
            direction,
            rect,
            GRAY,
            None,
        );
        session.set_progress(progress);
        session
    }

    #[test]
    fn forward_half_way_splits_at_center_with_shadow() {
        let renderer = FlipRenderer::default();
        let frame = renderer.render(100, 50, &session(FlipDirection::Forward, 0.5, Rect::from_size(100, 50)));

        assert_eq!(*frame.get_pixel(5, 10), RED);
        assert_eq!(*frame.get_pixel(75, 10), BLUE);

        let near_edge = frame.get_pixel(49, 10);
        assert!(near_edge[0] < 255 && near_edge[0] > 150, "shadow at edge: {near_edge:?}");
        let mid_shadow = frame.get_pixel(30, 10);
        assert!(mid_shadow[0] > near_edge[0]);
    }

    #[test]
    fn forward_complete_shows_only_next_page() {
        let renderer = FlipRenderer::default();
        let frame = renderer.render(100, 50, &session(FlipDirection::Forward, 1.0, Rect::from_size(100, 50)));
        assert!(frame.pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn backward_at_zero_shows_current_and_at_one_shows_previous() {
        let renderer = FlipRenderer::default();
        let rect = Rect::from_size(100, 50);
        let start = renderer.render(100, 50, &session(FlipDirection::Backward, 0.0, rect));
        assert!(start.pixels().all(|p| *p == RED));

        let end = renderer.render(100, 50, &session(FlipDirection::Backward, 1.0, rect));
        assert_eq!(*end.get_pixel(5, 5), BLUE);
        assert_eq!(*end.get_pixel(50, 5), BLUE);
    }

    #[test]
    fn page_rect_is_surrounded_by_background() {
        let renderer = FlipRenderer::default();
        let frame = renderer.render(200, 100, &session(FlipDirection::Forward, 0.0, Rect::new(50, 0, 100, 100)));
        assert_eq!(*frame.get_pixel(10, 10), GRAY);
        assert_eq!(*frame.get_pixel(190, 10), GRAY);
        assert_eq!(*frame.get_pixel(60, 10), RED);
    }

    #[test]
    fn missing_bitmaps_leave_only_background() {
        let renderer = FlipRenderer::default();
        let empty: FlipSession<()> = FlipSession::new(
            None,
            None,
            FlipDirection::Forward,
            Rect::from_size(40, 40),
            GRAY,
            None,
        );
        let frame = renderer.render(40, 40, &empty);
        assert!(frame.pixels().all(|p| *p == GRAY));
    }

    #[test]
    fn shadow_bleeding_past_the_surface_is_clipped() {
        let renderer = FlipRenderer::default();
        let frame = renderer.render(100, 50, &session(FlipDirection::Forward, 0.95, Rect::new(-10, 0, 100, 50)));
        assert_eq!(frame.dimensions(), (100, 50));
        assert_eq!(*frame.get_pixel(80, 10), BLUE);
        assert_eq!(*frame.get_pixel(95, 10), GRAY);
    }

    #[test]
    fn smaller_bitmaps_are_stretched_to_the_page_rect() {
        let renderer = FlipRenderer::default();
        let mut session = FlipSession::<()>::new(
            Some(solid(10, 10, RED)),
            Some(solid(10, 10, BLUE)),
            FlipDirection::Forward,
            Rect::from_size(80, 40),
            GRAY,
            None,
        );
        session.set_progress(1.0);
        let frame = renderer.render(80, 40, &session);
        assert_eq!(*frame.get_pixel(79, 39), BLUE);
    }

    #[test]
    fn still_frame_places_page_on_background() {
        let renderer = FlipRenderer::default();
        let geometry = FlipGeometry {
            current: solid(20, 20, RED),
            page_rect: Rect::new(10, 0, 20, 20),
            background: GRAY,
        };
        let frame = renderer.render_still(40, 20, &geometry);
        assert_eq!(*frame.get_pixel(0, 5), GRAY);
        assert_eq!(*frame.get_pixel(15, 5), RED);
        assert_eq!(*frame.get_pixel(35, 5), GRAY);
    }

    #[test]
    fn seam_position_is_direction_consistent() {
        for p in [0.0_f32, 0.1, 0.25, 0.5, 0.8, 1.0] {
            let forward = seam_x(FlipDirection::Forward, p, 320.0);
            let backward = seam_x(FlipDirection::Backward, 1.0 - p, 320.0);
            assert!((forward - backward).abs() < 1e-3, "p={p}");
        }
    }
}
