//! High-level facade crate for the `formset-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying geometry, label, and
//!   augmentation crates
//! - the per-page pipeline that turns enumerated form fields into detector
//!   label lines, and derives augmented (image, label) pairs from a rendered
//!   page
//!
//! ## Quickstart
//!
//! ```
//! use formset::labels::encode;
//! use formset::{map_rect_to_box, CanvasSize, PageSize, Rect};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A Letter page rendered at 200 DPI.
//! let page = PageSize::new(612.0, 792.0);
//! let canvas = CanvasSize::new(1700, 2200);
//!
//! let field = Rect::document(100.0, 700.0, 200.0, 720.0);
//! let b = map_rect_to_box(&field, page, canvas, 0)?;
//! println!("{}", encode(&b));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `formset::core`: coordinate spaces, rectangles, the mapper, the pad
//!   expander.
//! - `formset::labels`: label-line codec, label files, the class registry.
//! - `formset::augment`: horizontal mirror and scan/fax distortion.
//! - `formset::pipeline`: expander → mapper → codec per page, plus derived
//!   augmented samples.

pub use formset_augment as augment;
pub use formset_core as core;
pub use formset_labels as labels;

pub use formset_augment::{
    flip_horizontal, scan_fax, AugmentedSample, ScanFaxConfig, ScanFaxParams,
};
pub use formset_core::{
    expand_rect, map_rect_to_box, CanvasSize, GeomError, NormalizedBox, PadPolicy, PageSize,
    Rect, Space,
};
pub use formset_labels::{LabelSet, LabelSetBuilder};

mod config;
pub mod pipeline;

pub use config::{AugmentConfig, ConfigError};
pub use pipeline::{augment_page, label_page, FieldRect};
