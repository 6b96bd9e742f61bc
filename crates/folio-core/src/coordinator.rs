//! Input-facing state machine that turns button presses and pointer drags
//! into flip sessions and commits the resulting position change.

use crate::geometry::compute_geometry;
use crate::options::FlipOptions;
use crate::progress::{FlipProgressController, FlipResolution};
use crate::render::FlipRenderer;
use crate::session::{CommitCallback, FlipSession};
use crate::source::PageSource;
use crate::types::{Bitmap, FlipDirection, Point};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    /// A timed animation is running (button turn or released drag).
    Committing,
    /// The pointer owns the progress value.
    Dragging,
}

/// Pointer gesture bookkeeping. `direction` stays `None` until the drag
/// crosses the lock distance and then never changes within the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub active: bool,
    pub start: Point,
    pub direction: Option<FlipDirection>,
}

pub struct PageTurnCoordinator<V> {
    viewer: V,
    controller: FlipProgressController<V>,
    renderer: FlipRenderer,
    drag: DragState,
    state: CoordinatorState,
    direction_lock_px: f32,
}

impl<V: PageSource + 'static> PageTurnCoordinator<V> {
    pub fn new(viewer: V, options: FlipOptions) -> Self {
        let options = options.sanitized();
        Self {
            viewer,
            controller: FlipProgressController::new(&options),
            renderer: FlipRenderer::new(&options),
            drag: DragState::default(),
            state: CoordinatorState::Idle,
            direction_lock_px: options.direction_lock_px,
        }
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Mutable access to the viewer, only while no session exists.
    pub fn viewer_mut(&mut self) -> Option<&mut V> {
        if self.is_idle() {
            Some(&mut self.viewer)
        } else {
            None
        }
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_idle(&self) -> bool {
        self.state == CoordinatorState::Idle && self.controller.is_idle()
    }

    /// Whether timer ticks are needed to advance an animation.
    pub fn needs_ticks(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn session(&self) -> Option<&FlipSession<V>> {
        self.controller.session()
    }

    pub fn progress(&self) -> f32 {
        self.controller.progress()
    }

    /// Animated single-step turn. Returns `false` when nothing started: a
    /// session is already running or there is no adjacent content.
    pub fn request_page_turn(&mut self, direction: FlipDirection, now: Instant) -> bool {
        if !self.is_idle() {
            debug!(%direction, state = ?self.state, "Page turn ignored; flip in progress");
            return false;
        }
        let Some(session) = self.build_session(direction) else {
            debug!(%direction, "Page turn ignored; no adjacent content");
            return false;
        };
        if self.controller.start_flip(session, now) {
            self.state = CoordinatorState::Committing;
            true
        } else {
            false
        }
    }

    /// Begin tracking a gesture. No session exists until the drag locks.
    pub fn pointer_pressed(&mut self, position: Point) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.drag = DragState {
            active: true,
            start: position,
            direction: None,
        };
        true
    }

    /// Returns `true` once the gesture has a locked direction and the event
    /// belongs to the flip.
    pub fn pointer_moved(&mut self, position: Point) -> bool {
        if !self.drag.active {
            return false;
        }
        let dx = position.x - self.drag.start.x;

        if self.drag.direction.is_none() {
            if dx.abs() <= self.direction_lock_px {
                return false;
            }
            let direction = FlipDirection::from_drag(dx);
            self.drag.direction = Some(direction);
            debug!(%direction, dx, "Drag direction locked");
            if self.is_idle() {
                match self.build_session(direction) {
                    Some(session) => {
                        if self.controller.start_drag(session) {
                            self.state = CoordinatorState::Dragging;
                        }
                    }
                    None => debug!(%direction, "Drag ignored; no adjacent content"),
                }
            }
        }

        if self.state == CoordinatorState::Dragging {
            let width = self.viewer.content_area().width.max(1) as f32;
            self.controller.set_manual_progress(dx.abs() / width);
        }
        true
    }

    /// Finish a gesture. A live drag session is settled by the accept
    /// threshold; the gesture record is reset either way.
    pub fn pointer_released(&mut self, now: Instant) -> bool {
        if !self.drag.active {
            return false;
        }
        let had_direction = self.drag.direction.is_some();
        self.drag = DragState::default();

        if self.state == CoordinatorState::Dragging {
            self.controller.resolve_drag(now);
            self.state = CoordinatorState::Committing;
        }
        had_direction
    }

    /// Advance any running animation; returns the resolution on the tick
    /// that ends the session.
    pub fn tick(&mut self, now: Instant) -> Option<FlipResolution> {
        let resolution = self.controller.tick(now, &mut self.viewer)?;
        self.state = CoordinatorState::Idle;
        match resolution {
            FlipResolution::Completed(direction) => info!(%direction, "Page turn committed"),
            FlipResolution::Cancelled(direction) => info!(%direction, "Page turn cancelled"),
        }
        Some(resolution)
    }

    /// Composited overlay for the active session, sized to the content area.
    pub fn frame(&self) -> Option<Bitmap> {
        let session = self.controller.session()?;
        let area = self.viewer.content_area();
        if area.is_empty() {
            return None;
        }
        Some(self.renderer.render(area.width, area.height, session))
    }

    /// The viewer's current page composed on its background, for display
    /// while no session is running.
    pub fn still_frame(&self) -> Option<Bitmap> {
        let area = self.viewer.content_area();
        if area.is_empty() {
            return None;
        }
        let geometry = compute_geometry(&self.viewer)?;
        Some(self.renderer.render_still(area.width, area.height, &geometry))
    }

    /// Whatever should be on screen now: the flip overlay while a session
    /// exists, otherwise the still page.
    pub fn display_frame(&self) -> Option<Bitmap> {
        self.frame().or_else(|| self.still_frame())
    }

    fn build_session(&self, direction: FlipDirection) -> Option<FlipSession<V>> {
        let geometry = compute_geometry(&self.viewer)?;
        let next = self.viewer.adjacent_bitmap(direction)?;
        let commit: CommitCallback<V> =
            Box::new(move |viewer: &mut V| viewer.advance_position(direction));
        Some(FlipSession::from_geometry(
            geometry,
            next,
            direction,
            Some(commit),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ViewerLayout;
    use crate::types::Rect;
    use image::{Rgba, RgbaImage};
    use std::time::Duration;

    struct MockBook {
        pages: usize,
        current: usize,
        commits: u32,
    }

    impl MockBook {
        fn new(pages: usize, current: usize) -> Self {
            Self {
                pages,
                current,
                commits: 0,
            }
        }

        fn page(index: usize) -> Bitmap {
            RgbaImage::from_pixel(300, 400, Rgba([(index * 20) as u8, 0, 0, 255]))
        }
    }

    impl PageSource for MockBook {
        fn layout(&self) -> ViewerLayout {
            ViewerLayout::FixedPage
        }

        fn current_bitmap(&self) -> Option<Bitmap> {
            Some(Self::page(self.current))
        }

        fn adjacent_bitmap(&self, direction: FlipDirection) -> Option<Bitmap> {
            let target = self.current as i64 + direction.step();
            if target < 0 || target >= self.pages as i64 {
                return None;
            }
            Some(Self::page(target as usize))
        }

        fn content_area(&self) -> Rect {
            Rect::from_size(300, 400)
        }

        fn advance_position(&mut self, direction: FlipDirection) {
            self.commits += 1;
            let target = (self.current as i64 + direction.step()).clamp(0, self.pages as i64 - 1);
            self.current = target as usize;
        }
    }

    fn coordinator(current: usize) -> PageTurnCoordinator<MockBook> {
        PageTurnCoordinator::new(MockBook::new(10, current), FlipOptions::default())
    }

    fn finish(coordinator: &mut PageTurnCoordinator<MockBook>, now: Instant) -> FlipResolution {
        coordinator
            .tick(now + Duration::from_millis(401))
            .expect("animation resolves")
    }

    fn at(x: f32) -> Point {
        Point::new(x, 200.0)
    }

    #[test]
    fn button_turn_advances_once() {
        let mut coordinator = coordinator(2);
        let t0 = Instant::now();
        assert!(coordinator.request_page_turn(FlipDirection::Forward, t0));
        assert_eq!(coordinator.state(), CoordinatorState::Committing);
        assert_eq!(
            coordinator.session().map(FlipSession::direction),
            Some(FlipDirection::Forward)
        );

        assert_eq!(finish(&mut coordinator, t0), FlipResolution::Completed(FlipDirection::Forward));
        assert_eq!(coordinator.viewer().current, 3);
        assert_eq!(coordinator.viewer().commits, 1);
        assert_eq!(coordinator.state(), CoordinatorState::Idle);
        assert!(coordinator.session().is_none());
    }

    #[test]
    fn button_turn_at_last_page_is_a_no_op() {
        let mut coordinator = coordinator(9);
        let t0 = Instant::now();
        assert!(!coordinator.request_page_turn(FlipDirection::Forward, t0));
        assert!(coordinator.session().is_none());
        assert!(coordinator.frame().is_none());
        assert_eq!(coordinator.tick(t0 + Duration::from_secs(1)), None);
        assert_eq!(coordinator.viewer().current, 9);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut coordinator = coordinator(2);
        let t0 = Instant::now();
        assert!(coordinator.pointer_pressed(at(100.0)));
        assert!(coordinator.pointer_moved(at(70.0)));
        assert_eq!(coordinator.state(), CoordinatorState::Dragging);
        assert_eq!(coordinator.drag().direction, Some(FlipDirection::Forward));
        assert!(coordinator.pointer_moved(at(40.0)));
        assert!((coordinator.progress() - 0.2).abs() < 1e-6);

        assert!(coordinator.pointer_released(t0));
        assert!(!coordinator.drag().active);
        assert_eq!(finish(&mut coordinator, t0), FlipResolution::Cancelled(FlipDirection::Forward));
        assert_eq!(coordinator.viewer().current, 2);
        assert_eq!(coordinator.viewer().commits, 0);
        assert!(coordinator.is_idle());
    }

    #[test]
    fn long_drag_commits() {
        let mut coordinator = coordinator(2);
        let t0 = Instant::now();
        coordinator.pointer_pressed(at(100.0));
        coordinator.pointer_moved(at(70.0));
        coordinator.pointer_moved(at(10.0));
        assert!((coordinator.progress() - 0.3).abs() < 1e-6);
        coordinator.pointer_moved(at(-20.0));
        assert!((coordinator.progress() - 0.4).abs() < 1e-6);

        coordinator.pointer_released(t0);
        assert_eq!(finish(&mut coordinator, t0), FlipResolution::Completed(FlipDirection::Forward));
        assert_eq!(coordinator.viewer().current, 3);
        assert_eq!(coordinator.viewer().commits, 1);
    }

    #[test]
    fn release_exactly_at_threshold_rejects() {
        let mut coordinator = coordinator(2);
        let t0 = Instant::now();
        coordinator.pointer_pressed(at(100.0));
        coordinator.pointer_moved(at(10.0));
        coordinator.pointer_released(t0);
        assert_eq!(finish(&mut coordinator, t0), FlipResolution::Cancelled(FlipDirection::Forward));
        assert_eq!(coordinator.viewer().current, 2);
    }

    #[test]
    fn locked_direction_survives_reversal() {
        let mut coordinator = coordinator(2);
        coordinator.pointer_pressed(at(100.0));
        coordinator.pointer_moved(at(70.0));
        coordinator.pointer_moved(at(150.0));
        assert_eq!(coordinator.drag().direction, Some(FlipDirection::Forward));
        assert_eq!(
            coordinator.session().map(FlipSession::direction),
            Some(FlipDirection::Forward)
        );
        assert!((coordinator.progress() - 50.0 / 300.0).abs() < 1e-6);
    }

    #[test]
    fn small_moves_do_not_lock_or_start_a_session() {
        let mut coordinator = coordinator(2);
        coordinator.pointer_pressed(at(100.0));
        assert!(!coordinator.pointer_moved(at(85.0)));
        assert!(!coordinator.pointer_moved(at(120.0)));
        assert_eq!(coordinator.drag().direction, None);
        assert!(coordinator.session().is_none());

        assert!(!coordinator.pointer_released(Instant::now()));
        assert!(coordinator.is_idle());
    }

    #[test]
    fn drag_past_first_page_locks_but_never_shows_overlay() {
        let mut coordinator = coordinator(0);
        let t0 = Instant::now();
        coordinator.pointer_pressed(at(100.0));
        assert!(coordinator.pointer_moved(at(160.0)));
        assert_eq!(coordinator.drag().direction, Some(FlipDirection::Backward));
        assert!(coordinator.session().is_none());
        assert_eq!(coordinator.state(), CoordinatorState::Idle);

        coordinator.pointer_released(t0);
        assert_eq!(coordinator.tick(t0 + Duration::from_secs(1)), None);
        assert_eq!(coordinator.viewer().current, 0);
    }

    #[test]
    fn overlapping_requests_are_ignored() {
        let mut coordinator = coordinator(4);
        let t0 = Instant::now();
        assert!(coordinator.request_page_turn(FlipDirection::Forward, t0));
        coordinator.tick(t0 + Duration::from_millis(100));
        let before = coordinator.progress();

        assert!(!coordinator.request_page_turn(FlipDirection::Backward, t0));
        assert!(!coordinator.pointer_pressed(at(100.0)));
        assert!(!coordinator.pointer_moved(at(10.0)));
        assert_eq!(coordinator.progress(), before);
        assert_eq!(
            coordinator.session().map(FlipSession::direction),
            Some(FlipDirection::Forward)
        );

        finish(&mut coordinator, t0);
        assert_eq!(coordinator.viewer().current, 5);
        assert_eq!(coordinator.viewer().commits, 1);
    }

    #[test]
    fn button_turn_during_drag_is_ignored() {
        let mut coordinator = coordinator(4);
        let t0 = Instant::now();
        coordinator.pointer_pressed(at(200.0));
        coordinator.pointer_moved(at(100.0));
        assert!(!coordinator.request_page_turn(FlipDirection::Forward, t0));
        assert_eq!(coordinator.state(), CoordinatorState::Dragging);
    }

    #[test]
    fn frame_covers_content_area_while_flipping() {
        let mut coordinator = coordinator(1);
        assert!(coordinator.frame().is_none());
        coordinator.request_page_turn(FlipDirection::Backward, Instant::now());
        let frame = coordinator.frame().expect("frame during flip");
        assert_eq!(frame.dimensions(), (300, 400));
    }

    #[test]
    fn display_frame_falls_back_to_the_still_page() {
        let mut coordinator = coordinator(3);
        let still = coordinator.display_frame().expect("still frame");
        assert_eq!(*still.get_pixel(150, 200), Rgba([60, 0, 0, 255]));

        let t0 = Instant::now();
        coordinator.request_page_turn(FlipDirection::Forward, t0);
        coordinator.tick(t0 + Duration::from_millis(200));
        let flipping = coordinator.display_frame().expect("flip frame");
        assert_eq!(*flipping.get_pixel(295, 200), Rgba([80, 0, 0, 255]));
    }

    #[test]
    fn viewer_is_locked_while_a_session_runs() {
        let mut coordinator = coordinator(1);
        assert!(coordinator.viewer_mut().is_some());
        coordinator.request_page_turn(FlipDirection::Forward, Instant::now());
        assert!(coordinator.viewer_mut().is_none());
    }
}
