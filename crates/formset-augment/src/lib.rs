//! Geometric augmentations for labeled form images.
//!
//! Every operation here is pure: the source canvas and box set are borrowed,
//! and a fresh [`AugmentedSample`] is returned. Randomness never enters the
//! per-box arithmetic; the scan/fax transform takes pre-sampled
//! [`ScanFaxParams`], and sampling them is the caller's one interaction with
//! an RNG.

mod flip;
mod sample;
mod scanfax;

pub use flip::flip_horizontal;
pub use sample::AugmentedSample;
pub use scanfax::{scan_fax, ScanFaxConfig, ScanFaxParams};
