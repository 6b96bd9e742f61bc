mod appearance;
mod core;
mod navigation;
mod reading;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Effect {
    SaveBookmark,
    RefreshFrame,
    QuitSafely,
}
