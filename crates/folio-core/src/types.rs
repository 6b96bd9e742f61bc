use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Owned page snapshot. Once captured it is never shared with live viewer state.
pub type Bitmap = RgbaImage;

/// Which way a flip moves the reading position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlipDirection {
    /// Towards the next page or viewport.
    Forward,
    /// Back to the previous page or viewport.
    Backward,
}

impl FlipDirection {
    /// Signed step applied to a page index or viewport count.
    pub fn step(self) -> i64 {
        match self {
            FlipDirection::Forward => 1,
            FlipDirection::Backward => -1,
        }
    }

    /// Direction implied by a horizontal drag: dragging left turns forward.
    pub fn from_drag(dx: f32) -> Self {
        if dx < 0.0 {
            FlipDirection::Forward
        } else {
            FlipDirection::Backward
        }
    }
}

impl std::fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FlipDirection::Forward => "forward",
            FlipDirection::Backward => "backward",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in overlay-surface pixels. The origin may be
/// negative when a zoomed page is larger than the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Rectangle of `inner_width × inner_height` centered inside `self`.
    pub fn centered(&self, inner_width: u32, inner_height: u32) -> Rect {
        let x = (self.width as i64 - inner_width as i64) / 2;
        let y = (self.height as i64 - inner_height as i64) / 2;
        Rect {
            x: self.x + x as i32,
            y: self.y + y as i32,
            width: inner_width,
            height: inner_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
