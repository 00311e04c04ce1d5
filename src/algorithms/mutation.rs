//! Offspring generation and point mutation.

use crate::{Alphabet, MutationEffect, MutationStats, Sequence};
use rand::Rng;

/// Copies `parent` verbatim `count` times.
pub fn clone_batch(parent: &Sequence, count: usize) -> Vec<Sequence> {
    vec![parent.clone(); count]
}

/// Substitutes symbols at free positions and classifies each substitution
/// against the target.
pub struct MutationOperator<'a> {
    alphabet: &'a Alphabet,
    target: &'a Sequence,
    rate: f64,
}

impl<'a> MutationOperator<'a> {
    pub fn new(alphabet: &'a Alphabet, target: &'a Sequence, rate: f64) -> Self {
        Self {
            alphabet,
            target,
            rate,
        }
    }

    /// Visits each position in `free` once, in the given order, and
    /// substitutes it with probability `rate`. Returns whether anything
    /// changed.
    pub fn mutate<R: Rng>(
        &self,
        offspring: &mut Sequence,
        free: &[usize],
        rng: &mut R,
        stats: &mut MutationStats,
    ) -> bool {
        let mut changed = false;
        for &pos in free {
            if rng.random::<f64>() >= self.rate {
                continue;
            }
            let (Some(old), Some(target)) = (offspring.get(pos), self.target.get(pos)) else {
                continue;
            };
            let new = self.alphabet.substitute(old, rng);
            offspring.set(pos, new);
            stats.record(MutationEffect::classify(old, new, target));
            changed = true;
        }
        changed
    }

    /// Produces `count` mutated copies of `parent` together with the
    /// batch's mutation counters.
    pub fn breed<R: Rng>(
        &self,
        parent: &Sequence,
        free: &[usize],
        count: usize,
        rng: &mut R,
    ) -> (Vec<Sequence>, MutationStats) {
        let mut stats = MutationStats::default();
        let mut batch = clone_batch(parent, count);
        for offspring in &mut batch {
            if !self.mutate(offspring, free, rng, &mut stats) {
                stats.unchanged += 1;
            }
        }
        (batch, stats)
    }
}
