//! Scan/fax distortion: independent per-axis scaling of the whole canvas,
//! re-centered onto a fixed-size output of the original dimensions.
//!
//! Models how the same page arrives at different DPIs from real scanners,
//! with fax machines stretching one axis slightly. Overhang is cropped,
//! shortfall is left as background fill, and every box follows the exact
//! placement arithmetic applied to the pixels.

use formset_core::{GeomError, NormalizedBox};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::AugmentedSample;

fn default_scale_range() -> (f32, f32) {
    (0.7, 1.3)
}

fn default_jitter_range() -> (f32, f32) {
    (0.95, 1.05)
}

fn default_background() -> [u8; 3] {
    [255, 255, 255]
}

fn default_cull_margin() -> f32 {
    0.02
}

fn default_min_canvas_px() -> u32 {
    64
}

/// Parameter ranges and fixed knobs for the scan/fax transform.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanFaxConfig {
    /// Overall scale range; the default spans roughly 150-300 DPI scans of
    /// the same page.
    #[serde(default = "default_scale_range")]
    pub scale_range: (f32, f32),
    /// Per-axis aspect jitter range. Fax machines tend to stretch the
    /// vertical axis a little.
    #[serde(default = "default_jitter_range")]
    pub jitter_range: (f32, f32),
    /// Fill color for letterboxed regions of the output canvas.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    /// A box whose visible extent falls inside this fraction of the canvas
    /// edge is culled from the output.
    #[serde(default = "default_cull_margin")]
    pub cull_margin: f32,
    /// Floor for the resized canvas dimensions.
    #[serde(default = "default_min_canvas_px")]
    pub min_canvas_px: u32,
}

impl Default for ScanFaxConfig {
    fn default() -> Self {
        Self {
            scale_range: default_scale_range(),
            jitter_range: default_jitter_range(),
            background: default_background(),
            cull_margin: default_cull_margin(),
            min_canvas_px: default_min_canvas_px(),
        }
    }
}

/// One invocation's sampled factors. For fixed params the transform is a
/// pure function of the input box and canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanFaxParams {
    pub scale: f32,
    pub jitter_x: f32,
    pub jitter_y: f32,
}

impl ScanFaxParams {
    /// Draw the base scale and both jitter factors independently. This is
    /// the only place the transform touches an RNG.
    pub fn sample(config: &ScanFaxConfig, rng: &mut impl Rng) -> Self {
        let (s0, s1) = config.scale_range;
        let (j0, j1) = config.jitter_range;
        Self {
            scale: rng.random_range(s0..=s1),
            jitter_x: rng.random_range(j0..=j1),
            jitter_y: rng.random_range(j0..=j1),
        }
    }

    /// Params that leave canvas and boxes unchanged.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            jitter_x: 1.0,
            jitter_y: 1.0,
        }
    }
}

/// Apply the scan/fax distortion to a canvas and its boxes.
///
/// The scaled image is centered on an output canvas of the *original*
/// dimensions; boxes are denormalized against the source, scaled by the
/// nominal per-axis factors, translated by the same placement offset as the
/// pixels, renormalized against the output canvas, and clamped to `[0, 1]`.
/// Culling is decided on the pre-clamp edge positions, so a box whose center
/// clamps into range but whose true extent sits almost entirely off-canvas
/// is still dropped.
pub fn scan_fax(
    image: &RgbImage,
    boxes: &[NormalizedBox],
    params: &ScanFaxParams,
    config: &ScanFaxConfig,
) -> Result<AugmentedSample, GeomError> {
    let (orig_w, orig_h) = image.dimensions();
    if orig_w == 0 || orig_h == 0 {
        return Err(GeomError::InvalidCanvasSize {
            width: orig_w,
            height: orig_h,
        });
    }

    let sx = params.scale * params.jitter_x;
    let sy = params.scale * params.jitter_y;
    let new_w = ((orig_w as f32 * sx).round() as u32).max(config.min_canvas_px);
    let new_h = ((orig_h as f32 * sy).round() as u32).max(config.min_canvas_px);

    let resized = imageops::resize(image, new_w, new_h, FilterType::Lanczos3);
    let mut canvas = RgbImage::from_pixel(orig_w, orig_h, Rgb(config.background));
    let paste_x = (orig_w as i64 - new_w as i64).div_euclid(2);
    let paste_y = (orig_h as i64 - new_h as i64).div_euclid(2);
    imageops::overlay(&mut canvas, &resized, paste_x, paste_y);

    let w_px = orig_w as f32;
    let h_px = orig_h as f32;
    let margin = config.cull_margin;

    let mut kept = Vec::with_capacity(boxes.len());
    for b in boxes {
        let px_cx = b.cx * w_px * sx + paste_x as f32;
        let px_cy = b.cy * h_px * sy + paste_y as f32;
        let px_w = b.w * w_px * sx;
        let px_h = b.h * h_px * sy;

        let mapped = NormalizedBox::new(
            b.class_id,
            px_cx / w_px,
            px_cy / h_px,
            px_w / w_px,
            px_h / h_px,
        );
        let (left, top, right, bottom) = mapped.edges();
        if right < margin || left > 1.0 - margin || bottom < margin || top > 1.0 - margin {
            log::debug!("culling off-canvas box for class {}", b.class_id);
            continue;
        }
        let clamped = mapped.clamped();
        if clamped.is_degenerate() {
            continue;
        }
        kept.push(clamped);
    }

    Ok(AugmentedSample {
        image: canvas,
        boxes: kept,
    })
}
