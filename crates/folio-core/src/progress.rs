//! Drives a session's progress value over time or from pointer input.

use crate::options::{Easing, FlipOptions};
use crate::session::{FlipSession, clamp_progress};
use crate::types::FlipDirection;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressState {
    Idle,
    Animating {
        target: f32,
        start_value: f32,
        started_at: Instant,
    },
    ManualDrag,
}

/// Terminal outcome of a session, reported by the tick that ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResolution {
    /// Progress reached 1.0; the commit (if any) has already run.
    Completed(FlipDirection),
    /// Progress snapped back to 0.0; nothing was committed.
    Cancelled(FlipDirection),
}

pub struct FlipProgressController<V> {
    state: ProgressState,
    session: Option<FlipSession<V>>,
    duration: Duration,
    easing: Easing,
    accept_threshold: f32,
}

impl<V> FlipProgressController<V> {
    pub fn new(options: &FlipOptions) -> Self {
        Self {
            state: ProgressState::Idle,
            session: None,
            duration: options.duration(),
            easing: options.easing,
            accept_threshold: options.accept_threshold,
        }
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ProgressState::Idle)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, ProgressState::Animating { .. })
    }

    pub fn session(&self) -> Option<&FlipSession<V>> {
        self.session.as_ref()
    }

    /// Progress of the active session, 0.0 when there is none.
    pub fn progress(&self) -> f32 {
        self.session.as_ref().map(FlipSession::progress).unwrap_or(0.0)
    }

    /// Animate a fresh session to completion. Rejected unless idle.
    pub fn start_flip(&mut self, mut session: FlipSession<V>, now: Instant) -> bool {
        if !self.is_idle() {
            debug!(direction = %session.direction(), "Ignoring flip request; session in flight");
            return false;
        }
        session.set_progress(0.0);
        debug!(direction = %session.direction(), "Starting timed flip");
        self.session = Some(session);
        self.animate_to(1.0, now);
        true
    }

    /// Show a session at progress 0 and hand progress over to the pointer.
    pub fn start_drag(&mut self, mut session: FlipSession<V>) -> bool {
        if !self.is_idle() {
            debug!(direction = %session.direction(), "Ignoring drag start; session in flight");
            return false;
        }
        session.set_progress(0.0);
        debug!(direction = %session.direction(), "Starting manual flip");
        self.session = Some(session);
        self.state = ProgressState::ManualDrag;
        true
    }

    /// Returns `true` when progress was stored and a repaint is due.
    pub fn set_manual_progress(&mut self, value: f32) -> bool {
        if !matches!(self.state, ProgressState::ManualDrag) {
            return false;
        }
        match self.session.as_mut() {
            Some(session) => {
                session.set_progress(value);
                true
            }
            None => false,
        }
    }

    /// Settle a manual drag: accept above the threshold, otherwise snap back
    /// without committing. Returns the animation target.
    pub fn resolve_drag(&mut self, now: Instant) -> Option<f32> {
        if !matches!(self.state, ProgressState::ManualDrag) {
            return None;
        }
        let session = self.session.as_mut()?;
        let released_at = session.progress();
        let target = if released_at > self.accept_threshold {
            1.0
        } else {
            session.clear_commit();
            0.0
        };
        debug!(
            progress = released_at,
            target,
            threshold = self.accept_threshold,
            "Resolving drag"
        );
        self.animate_to(target, now);
        Some(target)
    }

    /// Advance the running animation. The tick that reaches the target runs
    /// the commit against `viewer`, drops the session and reports how it ended.
    pub fn tick(&mut self, now: Instant, viewer: &mut V) -> Option<FlipResolution> {
        let ProgressState::Animating {
            target,
            start_value,
            started_at,
        } = self.state
        else {
            return None;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        if t < 1.0 {
            let value = start_value + (target - start_value) * self.easing.apply(t);
            if let Some(session) = self.session.as_mut() {
                session.set_progress(value);
            }
            return None;
        }

        self.state = ProgressState::Idle;
        let mut session = self.session.take()?;
        session.set_progress(target);
        let direction = session.direction();
        if target >= 1.0 {
            if let Some(commit) = session.take_commit() {
                commit(viewer);
            }
            debug!(direction = %direction, "Flip completed");
            Some(FlipResolution::Completed(direction))
        } else {
            debug!(direction = %direction, "Flip cancelled");
            Some(FlipResolution::Cancelled(direction))
        }
    }

    fn animate_to(&mut self, target: f32, now: Instant) {
        let start_value = clamp_progress(self.progress());
        self.state = ProgressState::Animating {
            target,
            start_value,
            started_at: now,
        };
    }
}
