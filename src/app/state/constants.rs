/// Layout sizes around the page area and input limits.
pub(crate) const CONTROL_BAR_HEIGHT_PX: f32 = 44.0;
pub(crate) const FOOTER_HEIGHT_PX: f32 = 28.0;
pub(crate) const PAGE_AREA_PADDING_PX: f32 = 8.0;
pub(crate) const FLIP_TICK_MS: u64 = 16;
pub(crate) const WHEEL_LINE_PX: f32 = 48.0;
