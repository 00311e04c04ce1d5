//! The symbol set used to build the first parent and to pick substitutes.

use crate::{Sequence, WeaselError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Symbols available to the simulation.
///
/// The raw symbol list is kept as given and drives random initialization, so
/// a repeated symbol is proportionally more likely there. Substitution draws
/// from the distinct symbols only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    distinct: Vec<char>,
}

impl Alphabet {
    /// Fails with [`WeaselError::AlphabetTooSmall`] when fewer than two
    /// distinct symbols are given, since a substitution must change the
    /// symbol it replaces.
    pub fn new(symbols: &str) -> Result<Self, WeaselError> {
        let symbols: Vec<char> = symbols.chars().collect();
        let mut distinct = Vec::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }
        if distinct.len() < 2 {
            return Err(WeaselError::AlphabetTooSmall {
                distinct: distinct.len(),
            });
        }
        Ok(Self { symbols, distinct })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn distinct(&self) -> &[char] {
        &self.distinct
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.distinct.contains(&symbol)
    }

    pub fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Draws `len` symbols independently and uniformly.
    pub fn random_sequence<R: Rng>(&self, len: usize, rng: &mut R) -> Sequence {
        Sequence::new((0..len).map(|_| self.random_symbol(rng)).collect())
    }

    /// Picks a replacement for `old` uniformly among the distinct symbols
    /// that are not equal to it.
    pub fn substitute<R: Rng>(&self, old: char, rng: &mut R) -> char {
        let n = self.distinct.len();
        match self.distinct.iter().position(|&s| s == old) {
            Some(skip) => {
                let i = rng.random_range(0..n - 1);
                self.distinct[if i >= skip { i + 1 } else { i }]
            }
            None => self.distinct[rng.random_range(0..n)],
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = WeaselError;

    fn try_from(symbols: String) -> Result<Self, Self::Error> {
        Self::new(&symbols)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}
