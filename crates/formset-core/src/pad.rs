use serde::{Deserialize, Serialize};

use crate::Rect;

/// Which classes get pad expansion, and by how much.
///
/// Point-scale checkable fields are below a reliable detection size once
/// rendered; growing the label target to take in the border and adjacent
/// text trades localization precision for recall.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PadPolicy {
    /// Fraction of the rectangle's own extent added on each side.
    #[serde(default = "default_pad_factor")]
    pub pad_factor: f32,
    /// Class names the expansion applies to; every other class passes
    /// through unchanged.
    #[serde(default = "default_pad_classes")]
    pub classes: Vec<String>,
}

fn default_pad_factor() -> f32 {
    1.0
}

fn default_pad_classes() -> Vec<String> {
    vec!["checkbox".to_string()]
}

impl Default for PadPolicy {
    fn default() -> Self {
        Self {
            pad_factor: default_pad_factor(),
            classes: default_pad_classes(),
        }
    }
}

impl PadPolicy {
    /// Effective pad factor for one class name; zero means identity.
    pub fn factor_for(&self, class_name: &str) -> f32 {
        if self.classes.iter().any(|c| c == class_name) {
            self.pad_factor
        } else {
            0.0
        }
    }
}

/// Grow `rect` symmetrically by `pad_factor` of its own width and height,
/// clamped to `bounds`. `pad_factor = 0` is the identity.
pub fn expand_rect(rect: &Rect, pad_factor: f32, bounds: &Rect) -> Rect {
    let pad_x = rect.width() * pad_factor;
    let pad_y = rect.height() * pad_factor;
    Rect {
        x0: (rect.x0 - pad_x).max(bounds.x0),
        y0: (rect.y0 - pad_y).max(bounds.y0),
        x1: (rect.x1 + pad_x).min(bounds.x1),
        y1: (rect.y1 + pad_y).min(bounds.y1),
        space: rect.space,
    }
}
