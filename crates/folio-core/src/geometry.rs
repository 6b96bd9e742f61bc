//! Where the page sits on the overlay and what surrounds it.

use crate::source::{PageSource, ViewerLayout};
use crate::types::{Bitmap, Rect};
use image::Rgba;

/// Neutral gray around rasterized pages.
pub const FIXED_PAGE_BACKGROUND: Rgba<u8> = Rgba([0x52, 0x52, 0x52, 0xff]);
/// Paper white behind scrollable content.
pub const SCROLL_PAGE_BACKGROUND: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

pub struct FlipGeometry {
    pub current: Bitmap,
    pub page_rect: Rect,
    pub background: Rgba<u8>,
}

/// Capture the current snapshot together with its placement.
///
/// Returns `None` only when the source cannot produce a current bitmap.
pub fn compute_geometry<S: PageSource + ?Sized>(source: &S) -> Option<FlipGeometry> {
    let current = source.current_bitmap()?;
    let area = source.content_area();
    let (page_rect, background) = placement(source.layout(), area, current.dimensions());
    Some(FlipGeometry {
        current,
        page_rect,
        background,
    })
}

pub fn placement(layout: ViewerLayout, area: Rect, bitmap_size: (u32, u32)) -> (Rect, Rgba<u8>) {
    match layout {
        ViewerLayout::FixedPage => {
            let (width, height) = bitmap_size;
            (area.centered(width, height), FIXED_PAGE_BACKGROUND)
        }
        ViewerLayout::Scrollable => (area, SCROLL_PAGE_BACKGROUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlipDirection;

    struct StaticSource {
        layout: ViewerLayout,
        page: Option<(u32, u32)>,
        area: Rect,
    }

    impl PageSource for StaticSource {
        fn layout(&self) -> ViewerLayout {
            self.layout
        }

        fn current_bitmap(&self) -> Option<Bitmap> {
            self.page.map(|(w, h)| Bitmap::new(w, h))
        }

        fn adjacent_bitmap(&self, _direction: FlipDirection) -> Option<Bitmap> {
            None
        }

        fn content_area(&self) -> Rect {
            self.area
        }

        fn advance_position(&mut self, _direction: FlipDirection) {}
    }

    #[test]
    fn fixed_page_is_centered_on_gray() {
        let source = StaticSource {
            layout: ViewerLayout::FixedPage,
            page: Some((600, 800)),
            area: Rect::from_size(1000, 900),
        };
        let geometry = compute_geometry(&source).expect("geometry");
        assert_eq!(geometry.page_rect, Rect::new(200, 50, 600, 800));
        assert_eq!(geometry.background, FIXED_PAGE_BACKGROUND);
    }

    #[test]
    fn scrollable_fills_content_area_on_white() {
        let source = StaticSource {
            layout: ViewerLayout::Scrollable,
            page: Some((1000, 900)),
            area: Rect::from_size(1000, 900),
        };
        let geometry = compute_geometry(&source).expect("geometry");
        assert_eq!(geometry.page_rect, Rect::from_size(1000, 900));
        assert_eq!(geometry.background, SCROLL_PAGE_BACKGROUND);
    }

    #[test]
    fn missing_current_bitmap_yields_nothing() {
        let source = StaticSource {
            layout: ViewerLayout::FixedPage,
            page: None,
            area: Rect::from_size(100, 100),
        };
        assert!(compute_geometry(&source).is_none());
    }
}
