//! Label lines, label files, and the class registry.
//!
//! The label line format is the boundary contract with the detector
//! trainer: `<class_id> <cx> <cy> <w> <h>`, floats rendered with exactly
//! six decimal places, single spaces between fields. It must stay
//! byte-compatible across releases.

mod classes;
mod codec;
mod files;

pub use classes::{LabelSet, LabelSetBuilder};
pub use codec::{decode, encode, CodecError, Decoded};
pub use files::{
    label_path_for, read_label_file, render_label_lines, write_label_file, LabelIoError,
};
