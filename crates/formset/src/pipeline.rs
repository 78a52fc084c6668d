//! Per-page labeling and augmentation.
//!
//! Within one page the stages are strictly ordered: pad expansion in
//! document space, then the mapper, then the codec; only then may an
//! augmentation consume the resulting box set. Across pages everything is
//! independent given a frozen [`LabelSet`], so a batch runner may process
//! pages in parallel without coordination.

use formset_augment::{flip_horizontal, scan_fax, AugmentedSample, ScanFaxParams};
use formset_core::{
    expand_rect, map_rect_to_box, CanvasSize, GeomError, NormalizedBox, PadPolicy, PageSize,
    Rect,
};
use formset_labels::LabelSet;
use image::RgbImage;
use rand::Rng;

use crate::AugmentConfig;

/// One form field as delivered by the widget enumerator: its class name and
/// untransformed document-space rectangle.
#[derive(Clone, Debug)]
pub struct FieldRect {
    pub class_name: String,
    pub rect: Rect,
}

impl FieldRect {
    pub fn new(class_name: impl Into<String>, rect: Rect) -> Self {
        Self {
            class_name: class_name.into(),
            rect,
        }
    }
}

/// Map every field of one rendered page to a normalized box.
///
/// Fields whose class name is not in the frozen registry are dropped with a
/// warning; boxes that come out with an empty extent are dropped silently.
/// A bad page or canvas size fails the whole page, since every field shares
/// those dimensions.
pub fn label_page(
    page: PageSize,
    canvas: CanvasSize,
    fields: &[FieldRect],
    labels: &LabelSet,
    pad: &PadPolicy,
) -> Result<Vec<NormalizedBox>, GeomError> {
    let bounds = page.bounds();
    let mut boxes = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(class_id) = labels.id(&field.class_name) else {
            log::warn!("unknown class {:?}, field dropped", field.class_name);
            continue;
        };
        let rect = expand_rect(&field.rect, pad.factor_for(&field.class_name), &bounds);
        let b = map_rect_to_box(&rect, page, canvas, class_id)?;
        if b.is_degenerate() {
            log::debug!("degenerate box for class {:?}, dropped", field.class_name);
            continue;
        }
        boxes.push(b);
    }
    Ok(boxes)
}

/// Derive augmented samples from one rendered page and its mapped boxes.
///
/// One mirrored sample when `config.flip` is set, then
/// `config.scan_fax_samples` independently sampled scan/fax distortions.
/// The RNG is consulted for parameter sampling only.
pub fn augment_page(
    image: &RgbImage,
    boxes: &[NormalizedBox],
    config: &AugmentConfig,
    rng: &mut impl Rng,
) -> Result<Vec<AugmentedSample>, GeomError> {
    let mut samples = Vec::new();
    if config.flip {
        samples.push(flip_horizontal(image, boxes));
    }
    for _ in 0..config.scan_fax_samples {
        let params = ScanFaxParams::sample(&config.scan_fax, rng);
        samples.push(scan_fax(image, boxes, &params, &config.scan_fax)?);
    }
    Ok(samples)
}
