//! Run parameters, loadable from TOML.

use crate::{Alphabet, Sequence, WeaselError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TARGET: &str = "METHINKS IT IS LIKE A WEASEL";

/// Uppercase letters plus a blank.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

pub const DEFAULT_OFFSPRING: usize = 50;

pub const DEFAULT_MUTATION_RATE: f64 = 0.08;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaselConfig {
    pub target: String,
    pub alphabet: String,
    /// Offspring per generation.
    pub offspring: usize,
    /// Per-position probability that a free symbol is substituted.
    pub mutation_rate: f64,
    /// Seed for the run. A fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Optional safety cap; the loop is otherwise unbounded.
    pub max_generations: Option<u64>,
}

impl Default for WeaselConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            offspring: DEFAULT_OFFSPRING,
            mutation_rate: DEFAULT_MUTATION_RATE,
            seed: None,
            max_generations: None,
        }
    }
}

impl WeaselConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WeaselError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the settings for a complete run. On top of the engine checks,
    /// a zero mutation rate needs `max_generations`, since a wrong parent can
    /// then never improve.
    pub fn validate(&self) -> Result<(), WeaselError> {
        self.resolve()?;
        if self.mutation_rate == 0.0 && self.max_generations.is_none() {
            return Err(WeaselError::UnboundedZeroRate);
        }
        Ok(())
    }

    /// Builds the validated target and alphabet.
    pub(crate) fn resolve(&self) -> Result<(Sequence, Alphabet), WeaselError> {
        let target = Sequence::from(self.target.as_str());
        let alphabet = Alphabet::new(&self.alphabet)?;
        check_settings(&target, &alphabet, self.offspring, self.mutation_rate)?;
        Ok((target, alphabet))
    }
}

pub(crate) fn check_settings(
    target: &Sequence,
    alphabet: &Alphabet,
    offspring: usize,
    mutation_rate: f64,
) -> Result<(), WeaselError> {
    if target.is_empty() {
        return Err(WeaselError::EmptyTarget);
    }
    // A symbol outside the alphabet can never be produced, so the run would never end.
    if let Some((position, &symbol)) = target
        .symbols()
        .iter()
        .enumerate()
        .find(|(_, s)| !alphabet.contains(**s))
    {
        return Err(WeaselError::SymbolNotInAlphabet { symbol, position });
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(WeaselError::InvalidMutationRate(mutation_rate));
    }
    if offspring == 0 {
        return Err(WeaselError::NoOffspring);
    }
    Ok(())
}
