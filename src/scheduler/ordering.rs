//! Placement order for the subject catalogue.
//!
//! Labs come first because they need adjacent free pairs, which single
//! periods would otherwise fragment. Within each group, lower `priority`
//! goes first; ties keep catalogue order.

use crate::models::Subject;

/// Returns subject indices in placement order.
///
/// The sort is stable, so the order among equal keys is the catalogue
/// order. When the grid saturates, the last index is the first to lose
/// periods.
pub fn placement_order(subjects: &[Subject]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..subjects.len()).collect();
    indices.sort_by_key(|&i| (!subjects[i].is_lab, subjects[i].priority));
    indices
}
