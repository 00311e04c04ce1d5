//! Locked and free positions.

use crate::Sequence;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Partition of `0..len` into locked and free positions.
///
/// Positions only ever move from free to locked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionLocks {
    locked: Vec<bool>,
}

impl PositionLocks {
    /// All `len` positions start free.
    pub fn new(len: usize) -> Self {
        Self {
            locked: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    pub fn is_locked(&self, pos: usize) -> bool {
        self.locked.get(pos).copied().unwrap_or(false)
    }

    /// Free positions in ascending order.
    pub fn free(&self) -> impl Iterator<Item = usize> + '_ {
        self.locked
            .iter()
            .enumerate()
            .filter(|(_, locked)| !**locked)
            .map(|(pos, _)| pos)
    }

    /// Locked positions in ascending order.
    pub fn locked(&self) -> impl Iterator<Item = usize> + '_ {
        self.locked
            .iter()
            .enumerate()
            .filter(|(_, locked)| **locked)
            .map(|(pos, _)| pos)
    }

    pub fn locked_set(&self) -> BTreeSet<usize> {
        self.locked().collect()
    }

    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|l| **l).count()
    }

    pub fn free_count(&self) -> usize {
        self.len() - self.locked_count()
    }

    /// Locks every free position where `winner` matches `target` and returns
    /// the newly locked positions.
    pub fn lock_matching(&mut self, winner: &Sequence, target: &Sequence) -> Vec<usize> {
        let to_lock: Vec<usize> = self
            .free()
            .filter(|&pos| winner.get(pos) == target.get(pos))
            .collect();
        for &pos in &to_lock {
            self.locked[pos] = true;
        }
        to_lock
    }
}
