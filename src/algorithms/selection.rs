//! Picks the offspring closest to the target.

use crate::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Position of the winner in the batch.
    pub index: usize,
    /// Winner's Hamming distance to the target.
    pub distance: usize,
}

/// Finds the offspring closest to `target`.
///
/// Only a strictly smaller distance displaces the current best, so among
/// equally close offspring the earliest in the batch wins. Returns `None`
/// for an empty batch.
pub fn select_fittest(batch: &[Sequence], target: &Sequence) -> Option<Selection> {
    let mut best: Option<Selection> = None;
    for (index, candidate) in batch.iter().enumerate() {
        let distance = candidate.distance(target);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Selection { index, distance });
        }
    }
    best
}
