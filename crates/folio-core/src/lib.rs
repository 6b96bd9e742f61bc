//! Page-flip engine for the Folio reader.
//!
//! The crate owns everything between "the user asked for the next page" and
//! "the reading position moved": capturing the page geometry, driving the
//! flip progress (timed or pointer-driven), compositing overlay frames and
//! committing the new position exactly once. Content rendering is injected
//! through [`PageSource`], so the engine never touches files or widgets.

pub mod coordinator;
pub mod geometry;
pub mod options;
pub mod progress;
pub mod render;
pub mod session;
pub mod source;
pub mod types;

pub use coordinator::{CoordinatorState, DragState, PageTurnCoordinator};
pub use geometry::{FIXED_PAGE_BACKGROUND, FlipGeometry, SCROLL_PAGE_BACKGROUND, compute_geometry};
pub use options::{Easing, FlipOptions};
pub use progress::{FlipProgressController, FlipResolution, ProgressState};
pub use render::{FlipRenderer, seam_x};
pub use session::{CommitCallback, FlipSession};
pub use source::{PageSource, ViewerLayout};
pub use types::{Bitmap, FlipDirection, Point, Rect};
