use serde::{Deserialize, Serialize};

/// Clamp a normalized scalar into the closed unit interval.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Center-form bounding box with all fields normalized to its canvas.
///
/// Every operation in this workspace keeps `cx`, `cy`, `w`, `h` inside
/// `[0, 1]`; boxes that end up with an empty extent are dropped by the
/// writers, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    pub class_id: u32,
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
}

impl NormalizedBox {
    pub fn new(class_id: u32, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self { class_id, cx, cy, w, h }
    }

    /// Edge positions `(left, top, right, bottom)` in normalized units.
    pub fn edges(&self) -> (f32, f32, f32, f32) {
        (
            self.cx - 0.5 * self.w,
            self.cy - 0.5 * self.h,
            self.cx + 0.5 * self.w,
            self.cy + 0.5 * self.h,
        )
    }

    /// Clamp all four scalars into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            class_id: self.class_id,
            cx: clamp_unit(self.cx),
            cy: clamp_unit(self.cy),
            w: clamp_unit(self.w),
            h: clamp_unit(self.h),
        }
    }

    /// True when the box must not be persisted: non-finite fields or an
    /// empty extent.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.cx.is_finite()
            && self.cy.is_finite()
            && self.w.is_finite()
            && self.h.is_finite();
        !finite || self.w <= 0.0 || self.h <= 0.0
    }
}
