use crate::{MutationFractions, MutationStats, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of one finished generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: u64,
    /// The winning offspring, now the parent.
    pub best: Sequence,
    /// `best` with wrong positions lowercased.
    pub masked: String,
    pub distance: usize,
    pub length: usize,
    pub stats: MutationStats,
    /// Locked positions after this generation.
    pub locked: usize,
    pub newly_locked: Vec<usize>,
}

impl GenerationReport {
    /// Fraction of positions that match the target.
    pub fn fitness(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.length.saturating_sub(self.distance) as f64 / self.length as f64
    }

    pub fn fractions(&self) -> MutationFractions {
        self.stats.fractions()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fractions = self.fractions();
        write!(
            f,
            "{}     ** Gen: {:4}   Dif: {:3}   Fit: {:.4}   Bene: {:.4}  Detr: {:.4}  Neu: {:.4}   Unchanged: {:3}",
            self.masked,
            self.generation,
            self.distance,
            self.fitness(),
            fractions.beneficial,
            fractions.detrimental,
            fractions.neutral,
            self.stats.unchanged,
        )
    }
}
