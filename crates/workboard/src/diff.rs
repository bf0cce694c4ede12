//! Dirty-row detection between a snapshot and an edited view

use crate::view::BoardView;

/// Indices of rows that differ between `old` and `new`
///
/// Rows are compared cell by cell over every display column. Rows present
/// in only one of the two views count as dirty.
pub fn dirty_rows(old: &BoardView, new: &BoardView) -> Vec<usize> {
    let len = old.len().max(new.len());
    (0..len).filter(|&i| old.get(i) != new.get(i)).collect()
}
