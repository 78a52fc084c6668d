use formset_core::NormalizedBox;
use image::RgbImage;

/// Owned output of one augmentation: a new canvas plus the box set derived
/// from it.
///
/// Samples derived from the same source image share no state, so a batch
/// runner may produce them in parallel without coordination.
#[derive(Clone, Debug)]
pub struct AugmentedSample {
    pub image: RgbImage,
    pub boxes: Vec<NormalizedBox>,
}
