use nalgebra::Point2;

use crate::{clamp_unit, CanvasSize, GeomError, NormalizedBox, PageSize, Rect, Space};

/// Map a document-space field rectangle onto a rendered canvas.
///
/// Both axes get independent scale factors even when the render DPI is
/// isotropic: callers do not guarantee the page and image aspect ratios
/// match. Document and pixel space share a top-left origin, so no vertical
/// flip happens here. Clamping is applied to the final normalized values
/// only, never to intermediate pixel coordinates.
///
/// A zero-area input produces a legal `w = h = 0` box; writers drop such
/// boxes before anything is persisted.
pub fn map_rect_to_box(
    rect: &Rect,
    page: PageSize,
    canvas: CanvasSize,
    class_id: u32,
) -> Result<NormalizedBox, GeomError> {
    if !(page.width > 0.0) || !(page.height > 0.0) {
        return Err(GeomError::InvalidPageSize {
            width: page.width,
            height: page.height,
        });
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(GeomError::InvalidCanvasSize {
            width: canvas.width,
            height: canvas.height,
        });
    }
    if rect.space != Space::Document {
        return Err(GeomError::SpaceMismatch {
            expected: Space::Document,
            found: rect.space,
        });
    }

    let img_w = canvas.width as f32;
    let img_h = canvas.height as f32;
    let scale_x = img_w / page.width;
    let scale_y = img_h / page.height;

    let top_left = Point2::new(rect.x0 * scale_x, rect.y0 * scale_y);
    let bottom_right = Point2::new(rect.x1 * scale_x, rect.y1 * scale_y);

    Ok(NormalizedBox {
        class_id,
        cx: clamp_unit((top_left.x + bottom_right.x) * 0.5 / img_w),
        cy: clamp_unit((top_left.y + bottom_right.y) * 0.5 / img_h),
        w: clamp_unit((bottom_right.x - top_left.x).abs() / img_w),
        h: clamp_unit((bottom_right.y - top_left.y).abs() / img_h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
    const CANVAS_200DPI: CanvasSize = CanvasSize {
        width: 1700,
        height: 2200,
    };

    #[test]
    fn letter_page_at_200_dpi() {
        let rect = Rect::document(100.0, 700.0, 200.0, 720.0);
        let b = map_rect_to_box(&rect, LETTER, CANVAS_200DPI, 3).expect("map");
        assert_eq!(b.class_id, 3);
        assert_relative_eq!(b.cx, 0.245098, epsilon = 1e-4);
        assert_relative_eq!(b.cy, 0.896463, epsilon = 1e-4);
        assert_relative_eq!(b.w, 0.163399, epsilon = 1e-4);
        assert_relative_eq!(b.h, 0.025253, epsilon = 1e-4);
    }

    #[test]
    fn output_stays_in_the_unit_interval() {
        // Rectangle hanging off the page edge still yields in-range values.
        let rect = Rect::document(-50.0, 780.0, 700.0, 900.0);
        let b = map_rect_to_box(&rect, LETTER, CANVAS_200DPI, 0).expect("map");
        for v in [b.cx, b.cy, b.w, b.h] {
            assert!((0.0..=1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn mapping_is_deterministic() {
        let rect = Rect::document(10.0, 10.0, 40.0, 25.0);
        let a = map_rect_to_box(&rect, LETTER, CANVAS_200DPI, 1).expect("map");
        let b = map_rect_to_box(&rect, LETTER, CANVAS_200DPI, 1).expect("map");
        assert_eq!(a, b);
    }

    #[test]
    fn zero_area_rect_is_a_legal_input() {
        let rect = Rect::document(100.0, 100.0, 100.0, 100.0);
        let b = map_rect_to_box(&rect, LETTER, CANVAS_200DPI, 0).expect("map");
        assert_eq!(b.w, 0.0);
        assert_eq!(b.h, 0.0);
        assert!(b.is_degenerate());
    }

    #[test]
    fn zero_page_or_canvas_dimension_is_rejected() {
        let rect = Rect::document(0.0, 0.0, 10.0, 10.0);
        let bad_page = PageSize::new(0.0, 792.0);
        assert!(matches!(
            map_rect_to_box(&rect, bad_page, CANVAS_200DPI, 0),
            Err(GeomError::InvalidPageSize { .. })
        ));
        let bad_canvas = CanvasSize::new(1700, 0);
        assert!(matches!(
            map_rect_to_box(&rect, LETTER, bad_canvas, 0),
            Err(GeomError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn pixel_space_rect_is_rejected() {
        let rect = Rect::pixel(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(
            map_rect_to_box(&rect, LETTER, CANVAS_200DPI, 0),
            Err(GeomError::SpaceMismatch { .. })
        ));
    }
}
