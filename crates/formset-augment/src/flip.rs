use formset_core::NormalizedBox;
use image::imageops;
use image::RgbImage;

use crate::AugmentedSample;

/// Mirror the canvas left-to-right and every box with it.
///
/// Per box only `cx` changes, to `1 - cx`; size and class are untouched by a
/// pure horizontal mirror, so no box is culled. Applying the flip twice
/// reproduces the input up to float rounding.
pub fn flip_horizontal(image: &RgbImage, boxes: &[NormalizedBox]) -> AugmentedSample {
    let mirrored = imageops::flip_horizontal(image);
    let boxes = boxes
        .iter()
        .map(|b| NormalizedBox { cx: 1.0 - b.cx, ..*b })
        .collect();
    AugmentedSample {
        image: mirrored,
        boxes,
    }
}
