//! Dawkins' weasel program with position locking.
//!
//! A single parent string is copied into a batch of offspring, the free
//! positions of each copy are mutated, the offspring closest to the target
//! becomes the next parent, and any position that now matches the target is
//! locked so it can never mutate again. The loop ends when the parent spells
//! the target exactly.
//!
//! # Example
//!
//! ```rust
//! use locked_weasel::{Evolver, WeaselConfig, algorithms::locked::LockedWeasel};
//!
//! let config = WeaselConfig {
//!     target: "CAT".into(),
//!     alphabet: "ABCT ".into(),
//!     offspring: 20,
//!     mutation_rate: 0.3,
//!     ..WeaselConfig::default()
//! };
//!
//! let mut weasel = LockedWeasel::new(&config, 42).unwrap();
//! let generations = weasel.run(Some(10_000), |report| println!("{report}")).unwrap();
//!
//! assert_eq!(weasel.parent().to_string(), "CAT");
//! assert_eq!(weasel.generation(), generations);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod alphabet;
pub mod config;
pub mod error;
pub mod report;
pub mod stats;

pub use alphabet::Alphabet;
pub use config::WeaselConfig;
pub use error::WeaselError;
pub use report::GenerationReport;
pub use stats::{MutationEffect, MutationFractions, MutationStats};

/// An ordered string of symbols: the target, a parent, or one offspring.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence(Vec<char>);

impl Sequence {
    pub fn new(symbols: Vec<char>) -> Self {
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.0
    }

    pub fn get(&self, pos: usize) -> Option<char> {
        self.0.get(pos).copied()
    }

    pub(crate) fn set(&mut self, pos: usize, symbol: char) {
        self.0[pos] = symbol;
    }

    /// Hamming distance to `target`: the number of positions that differ.
    ///
    /// Any length difference counts as mismatched positions.
    pub fn distance(&self, target: &Sequence) -> usize {
        let differing = self.0.iter().zip(&target.0).filter(|(a, b)| a != b).count();
        differing + self.len().abs_diff(target.len())
    }

    /// Number of positions where `self` agrees with `target`.
    pub fn matches(&self, target: &Sequence) -> usize {
        self.0.iter().zip(&target.0).filter(|(a, b)| a == b).count()
    }

    /// Renders the sequence with correct positions as-is and wrong
    /// positions lowercased.
    pub fn masked(&self, target: &Sequence) -> String {
        let mut out = String::with_capacity(self.len());
        for (pos, &symbol) in self.0.iter().enumerate() {
            if target.get(pos) == Some(symbol) {
                out.push(symbol);
            } else {
                out.extend(symbol.to_lowercase());
            }
        }
        out
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// The master engine trait.
pub trait Evolver {
    /// Advances one generation. Returns `None` once the run is done.
    fn step(&mut self) -> Option<GenerationReport>;

    fn is_done(&self) -> bool;

    /// Generations completed so far.
    fn generation(&self) -> u64;

    /// Mismatches between the current parent and the target.
    fn distance(&self) -> usize;

    /// Steps until done, handing each report to `on_report`.
    ///
    /// Returns the final generation count, or
    /// [`WeaselError::GenerationCapReached`] if `max_generations` runs out
    /// first.
    fn run<F>(&mut self, max_generations: Option<u64>, mut on_report: F) -> Result<u64, WeaselError>
    where
        F: FnMut(&GenerationReport),
    {
        while !self.is_done() {
            if let Some(cap) = max_generations {
                if self.generation() >= cap {
                    log::warn!("generation cap {cap} reached at distance {}", self.distance());
                    return Err(WeaselError::GenerationCapReached {
                        cap,
                        distance: self.distance(),
                    });
                }
            }
            match self.step() {
                Some(report) => on_report(&report),
                None => break,
            }
        }
        Ok(self.generation())
    }
}

pub mod algorithms {
    pub mod locked;
    pub mod locks;
    pub mod mutation;
    pub mod selection;
}
