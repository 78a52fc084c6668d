//! Core geometry for synthetic form-field labeling.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any image container or label file format: it maps document-space
//! field rectangles into normalized detector boxes and nothing else.

mod error;
mod logger;
mod map;
mod nbox;
mod pad;
mod space;

pub use error::GeomError;
pub use map::map_rect_to_box;
pub use nbox::{clamp_unit, NormalizedBox};
pub use pad::{expand_rect, PadPolicy};
pub use space::{CanvasSize, PageSize, Rect, Space};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
