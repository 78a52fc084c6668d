use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Coordinate system a rectangle lives in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Space {
    /// Source page coordinates: typographic points, top-left origin.
    Document,
    /// Rendered raster coordinates: pixels, top-left origin.
    Pixel,
}

/// Page dimensions in document points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Full-page rectangle in document space, for clamping expanded fields.
    pub fn bounds(&self) -> Rect {
        Rect::document(0.0, 0.0, self.width, self.height)
    }
}

/// Canvas dimensions in pixels. Every [`crate::NormalizedBox`] is defined
/// relative to exactly one canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle tagged with the space its coordinates live in.
///
/// Invariant expected from callers: `x1 >= x0` and `y1 >= y0`. Zero-area
/// rectangles are legal everywhere in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub space: Space,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32, space: Space) -> Self {
        Self { x0, y0, x1, y1, space }
    }

    /// Rectangle in document points.
    pub fn document(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(x0, y0, x1, y1, Space::Document)
    }

    /// Rectangle in image pixels.
    pub fn pixel(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(x0, y0, x1, y1, Space::Pixel)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new((self.x0 + self.x1) * 0.5, (self.y0 + self.y1) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_cover_the_whole_page() {
        let page = PageSize::new(612.0, 792.0);
        let b = page.bounds();
        assert_eq!(b.space, Space::Document);
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (0.0, 0.0, 612.0, 792.0));
    }

    #[test]
    fn rect_extent_and_center() {
        let r = Rect::document(10.0, 20.0, 30.0, 60.0);
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 40.0);
        assert_eq!(r.center(), Point2::new(20.0, 40.0));
    }
}
