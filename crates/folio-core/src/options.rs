//! Tunables for the flip animation and drag handling.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DURATION_MS: u64 = 400;
pub const DEFAULT_DIRECTION_LOCK_PX: f32 = 20.0;
pub const DEFAULT_ACCEPT_THRESHOLD: f32 = 0.3;
pub const DEFAULT_SHADOW_WIDTH_PX: f32 = 40.0;
/// Alpha at the seam, out of 255 (≈24%).
pub const DEFAULT_SHADOW_PEAK_OPACITY: u8 = 60;

/// Easing profile applied to normalized animation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    OutQuad,
    InOutQuad,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::OutQuad
    }
}

impl Easing {
    /// Map `t` in [0,1] to eased progress in [0,1].
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Easing::Linear => t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Easing::Linear => "linear",
            Easing::OutQuad => "out-quad",
            Easing::InOutQuad => "in-out-quad",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlipOptions {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_direction_lock_px")]
    pub direction_lock_px: f32,
    #[serde(default = "default_accept_threshold")]
    pub accept_threshold: f32,
    #[serde(default = "default_shadow_width_px")]
    pub shadow_width_px: f32,
    #[serde(default = "default_shadow_peak_opacity")]
    pub shadow_peak_opacity: u8,
}

impl Default for FlipOptions {
    fn default() -> Self {
        FlipOptions {
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
            direction_lock_px: default_direction_lock_px(),
            accept_threshold: default_accept_threshold(),
            shadow_width_px: default_shadow_width_px(),
            shadow_peak_opacity: default_shadow_peak_opacity(),
        }
    }
}

impl FlipOptions {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Clamp user-supplied values into ranges the engine can work with.
    pub fn sanitized(mut self) -> Self {
        self.direction_lock_px = if self.direction_lock_px.is_finite() {
            self.direction_lock_px.max(0.0)
        } else {
            DEFAULT_DIRECTION_LOCK_PX
        };
        self.accept_threshold = if self.accept_threshold.is_finite() {
            self.accept_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_ACCEPT_THRESHOLD
        };
        self.shadow_width_px = if self.shadow_width_px.is_finite() {
            self.shadow_width_px.max(0.0)
        } else {
            DEFAULT_SHADOW_WIDTH_PX
        };
        self
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_direction_lock_px() -> f32 {
    DEFAULT_DIRECTION_LOCK_PX
}

fn default_accept_threshold() -> f32 {
    DEFAULT_ACCEPT_THRESHOLD
}

fn default_shadow_width_px() -> f32 {
    DEFAULT_SHADOW_WIDTH_PX
}

fn default_shadow_peak_opacity() -> u8 {
    DEFAULT_SHADOW_PEAK_OPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_quad_hits_endpoints_and_front_loads_motion() {
        assert_eq!(Easing::OutQuad.apply(0.0), 0.0);
        assert_eq!(Easing::OutQuad.apply(1.0), 1.0);
        assert!((Easing::OutQuad.apply(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn easing_clamps_out_of_range_time() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
        assert_eq!(Easing::InOutQuad.apply(f32::NAN), 1.0);
    }

    #[test]
    fn defaults_match_documented_constants() {
        let options = FlipOptions::default();
        assert_eq!(options.duration(), Duration::from_millis(400));
        assert_eq!(options.easing, Easing::OutQuad);
        assert_eq!(options.direction_lock_px, 20.0);
        assert_eq!(options.accept_threshold, 0.3);
        assert_eq!(options.shadow_width_px, 40.0);
        assert_eq!(options.shadow_peak_opacity, 60);
    }

    #[test]
    fn sanitized_rejects_non_finite_thresholds() {
        let options = FlipOptions {
            accept_threshold: f32::INFINITY,
            direction_lock_px: -5.0,
            ..FlipOptions::default()
        }
        .sanitized();
        assert_eq!(options.accept_threshold, DEFAULT_ACCEPT_THRESHOLD);
        assert_eq!(options.direction_lock_px, 0.0);
    }
}
