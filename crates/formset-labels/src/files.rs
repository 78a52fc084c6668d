use std::fs;
use std::path::{Path, PathBuf};

use formset_core::NormalizedBox;

use crate::codec::{decode, encode, Decoded};

#[derive(thiserror::Error, Debug)]
pub enum LabelIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Sibling `.txt` label path for an image file.
pub fn label_path_for(image_path: &Path) -> PathBuf {
    image_path.with_extension("txt")
}

/// Read every well-formed box from a label file.
///
/// Lines with the wrong token count are ignored outright; lines with
/// unparseable numbers are skipped with a warning. Neither aborts the file.
pub fn read_label_file(path: &Path) -> Result<Vec<NormalizedBox>, LabelIoError> {
    let raw = fs::read_to_string(path)?;
    let mut boxes = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        match decode(line) {
            Ok(Decoded::Box(b)) => boxes.push(b),
            Ok(Decoded::Skip) => {}
            Err(err) => log::warn!("{}:{}: {err}", path.display(), line_no + 1),
        }
    }
    Ok(boxes)
}

/// Join encoded label lines with single newlines between records.
///
/// Degenerate boxes (empty extent, non-finite fields) are dropped here and
/// never reach the persisted label set.
pub fn render_label_lines(boxes: &[NormalizedBox]) -> String {
    let mut out = String::new();
    for b in boxes {
        if b.is_degenerate() {
            log::debug!("dropping degenerate box for class {}", b.class_id);
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&encode(b));
    }
    out
}

/// Write one label file, one line per non-degenerate box.
pub fn write_label_file(path: &Path, boxes: &[NormalizedBox]) -> Result<(), LabelIoError> {
    fs::write(path, render_label_lines(boxes))?;
    Ok(())
}
