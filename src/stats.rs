//! Mutation effect classification and per-generation counters.

use serde::{Deserialize, Serialize};

/// Effect of a single substitution, judged against the target symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationEffect {
    /// A wrong symbol became the right one.
    Beneficial,
    /// A right symbol was overwritten.
    Detrimental,
    /// A wrong symbol became another wrong one.
    Neutral,
}

impl MutationEffect {
    pub fn classify(old: char, new: char, target: char) -> Self {
        if old == target {
            Self::Detrimental
        } else if new == target {
            Self::Beneficial
        } else {
            Self::Neutral
        }
    }
}

/// Per-generation mutation counters. Reset every generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationStats {
    pub beneficial: usize,
    pub detrimental: usize,
    pub neutral: usize,
    /// Total substitutions across the whole batch.
    pub events: usize,
    /// Offspring that received no substitution at all.
    pub unchanged: usize,
}

impl MutationStats {
    pub fn record(&mut self, effect: MutationEffect) {
        self.events += 1;
        match effect {
            MutationEffect::Beneficial => self.beneficial += 1,
            MutationEffect::Detrimental => self.detrimental += 1,
            MutationEffect::Neutral => self.neutral += 1,
        }
    }

    /// Share of each effect among all events. A generation without any
    /// event reports zero for every share.
    pub fn fractions(&self) -> MutationFractions {
        if self.events == 0 {
            return MutationFractions::default();
        }
        let total = self.events as f64;
        MutationFractions {
            beneficial: self.beneficial as f64 / total,
            detrimental: self.detrimental as f64 / total,
            neutral: self.neutral as f64 / total,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationFractions {
    pub beneficial: f64,
    pub detrimental: f64,
    pub neutral: f64,
}
