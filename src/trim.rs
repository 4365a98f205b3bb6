//! Cuts the scratch grid down to the filled area plus padding.

use crate::grid::{Grid, Position};
use crate::placement::PlacedWord;

/// Crop `grid` to the bounding box of its letters grown by `padding` cells
/// (clamped to the grid), and shift every word's position into the new grid.
///
/// A grid with no letters is returned unchanged.
#[must_use]
pub fn trim(grid: &Grid, words: Vec<PlacedWord>, padding: usize) -> (Grid, Vec<PlacedWord>) {
    let Some(bbox) = grid.bounding_box() else {
        return (grid.clone(), words);
    };

    let padded = bbox.padded(padding, grid.height(), grid.width());
    let origin = padded.origin();
    let trimmed = grid.cropped(&padded);

    let shifted = words
        .into_iter()
        .map(|w| PlacedWord {
            position: Position::new(w.position.row - origin.row, w.position.col - origin.col),
            ..w
        })
        .collect();

    (trimmed, shifted)
}
