use iced::keyboard::{Key, Modifiers};
use iced::mouse::ScrollDelta;
use iced::Point;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    ZoomIn,
    ZoomOut,
    ToggleTheme,
    SaveBookmark,
    SafeQuit,
    /// Cursor position inside the page area.
    PointerMoved(Point),
    /// Cursor position anywhere in the window.
    WindowCursorMoved(Point),
    PointerPressed,
    PointerReleased,
    WheelScrolled(ScrollDelta),
    FlipTick(Instant),
    ReadingTick(Instant),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}
