use crate::Space;

/// Errors from the geometric core.
///
/// All of these are local to the one rectangle or canvas they concern; the
/// surrounding batch loop decides whether to skip-and-continue or abort.
#[derive(thiserror::Error, Debug)]
pub enum GeomError {
    #[error("page size must be positive, got {width}x{height} pt")]
    InvalidPageSize { width: f32, height: f32 },
    #[error("canvas size must be positive, got {width}x{height} px")]
    InvalidCanvasSize { width: u32, height: u32 },
    #[error("expected a rectangle in {expected:?} space, got {found:?}")]
    SpaceMismatch { expected: Space, found: Space },
}
