//! The locked weasel: cumulative selection where correct positions freeze.
//!
//! Each generation:
//! 1. Copies the parent into a batch of offspring
//! 2. Mutates the free positions of every copy
//! 3. Picks the offspring closest to the target (earliest wins ties)
//! 4. Locks every free position the winner now gets right
//! 5. Replaces the parent with the winner
//!
//! The run is done once the parent equals the target.

use super::locks::PositionLocks;
use super::mutation::MutationOperator;
use super::selection::select_fittest;
use crate::config::check_settings;
use crate::{Alphabet, Evolver, GenerationReport, Sequence, WeaselConfig, WeaselError};
use log::{debug, info};
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64; // Specific, serializable generator
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Done,
}

/// Serialized form of [`LockedWeasel`]; validated on the way back in.
#[derive(Deserialize)]
struct LockedWeaselData {
    target: Sequence,
    alphabet: Alphabet,
    offspring: usize,
    mutation_rate: f64,
    parent: Sequence,
    locks: PositionLocks,
    generation: u64,
    state: RunState,
    rng: Pcg64,
}

#[derive(Clone)]
pub struct LockedWeasel {
    target: Sequence,
    alphabet: Alphabet,
    offspring: usize,
    mutation_rate: f64,
    parent: Sequence,
    locks: PositionLocks,
    generation: u64,
    state: RunState,
    rng: Pcg64,
}

impl LockedWeasel {
    /// Starts a run from a random parent drawn from the alphabet.
    pub fn new(config: &WeaselConfig, seed: u64) -> Result<Self, WeaselError> {
        let (target, alphabet) = config.resolve()?;
        let mut rng = Pcg64::seed_from_u64(seed);
        let parent = alphabet.random_sequence(target.len(), &mut rng);
        info!(
            "starting run: target {:?}, {} offspring, mutation rate {}, seed {seed}",
            config.target, config.offspring, config.mutation_rate
        );
        Ok(Self::from_parts(target, alphabet, config, parent, rng))
    }

    /// Starts a run from a given parent. Every position starts free, even
    /// ones that already match.
    pub fn with_parent(
        config: &WeaselConfig,
        parent: Sequence,
        seed: u64,
    ) -> Result<Self, WeaselError> {
        let (target, alphabet) = config.resolve()?;
        if parent.len() != target.len() {
            return Err(WeaselError::ParentLengthMismatch {
                expected: target.len(),
                actual: parent.len(),
            });
        }
        let rng = Pcg64::seed_from_u64(seed);
        Ok(Self::from_parts(target, alphabet, config, parent, rng))
    }

    fn from_parts(
        target: Sequence,
        alphabet: Alphabet,
        config: &WeaselConfig,
        parent: Sequence,
        rng: Pcg64,
    ) -> Self {
        Self {
            locks: PositionLocks::new(target.len()),
            target,
            alphabet,
            offspring: config.offspring,
            mutation_rate: config.mutation_rate,
            parent,
            generation: 0,
            state: RunState::Running,
            rng,
        }
    }

    pub fn target(&self) -> &Sequence {
        &self.target
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn parent(&self) -> &Sequence {
        &self.parent
    }

    pub fn locks(&self) -> &PositionLocks {
        &self.locks
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn offspring(&self) -> usize {
        self.offspring
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

impl Evolver for LockedWeasel {
    fn step(&mut self) -> Option<GenerationReport> {
        if self.state == RunState::Done {
            return None;
        }
        self.generation += 1;

        let free: Vec<usize> = self.locks.free().collect();
        let operator = MutationOperator::new(&self.alphabet, &self.target, self.mutation_rate);
        let (mut batch, stats) =
            operator.breed(&self.parent, &free, self.offspring, &mut self.rng);

        // offspring > 0 is checked at construction, so the batch is never empty
        let selection = select_fittest(&batch, &self.target)?;
        let winner = batch.swap_remove(selection.index);

        let newly_locked = self.locks.lock_matching(&winner, &self.target);
        self.parent = winner;

        debug!(
            "gen {}: distance {}, {} mutations, locked {:?}",
            self.generation, selection.distance, stats.events, newly_locked
        );

        if self.parent == self.target {
            self.state = RunState::Done;
            info!("target reached at generation {}", self.generation);
        }

        Some(GenerationReport {
            generation: self.generation,
            masked: self.parent.masked(&self.target),
            best: self.parent.clone(),
            distance: selection.distance,
            length: self.target.len(),
            stats,
            locked: self.locks.locked_count(),
            newly_locked,
        })
    }

    fn is_done(&self) -> bool {
        self.state == RunState::Done
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn distance(&self) -> usize {
        self.parent.distance(&self.target)
    }
}

impl Serialize for LockedWeasel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("LockedWeasel", 9)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("alphabet", &self.alphabet)?;
        state.serialize_field("offspring", &self.offspring)?;
        state.serialize_field("mutation_rate", &self.mutation_rate)?;
        state.serialize_field("parent", &self.parent)?;
        state.serialize_field("locks", &self.locks)?;
        state.serialize_field("generation", &self.generation)?;
        state.serialize_field("state", &self.state)?;
        state.serialize_field("rng", &self.rng)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for LockedWeasel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = LockedWeaselData::deserialize(deserializer)?;
        Self::from_data(data).map_err(serde::de::Error::custom)
    }
}

impl LockedWeasel {
    fn from_data(data: LockedWeaselData) -> Result<Self, WeaselError> {
        check_settings(&data.target, &data.alphabet, data.offspring, data.mutation_rate)?;
        let len = data.target.len();
        if data.parent.len() != len {
            return Err(WeaselError::ParentLengthMismatch {
                expected: len,
                actual: data.parent.len(),
            });
        }
        if data.locks.len() != len {
            return Err(WeaselError::InvalidSnapshot(format!(
                "{} lock slots for a target of length {len}",
                data.locks.len()
            )));
        }
        if let Some(pos) = data
            .locks
            .locked()
            .find(|&pos| data.parent.get(pos) != data.target.get(pos))
        {
            return Err(WeaselError::InvalidSnapshot(format!(
                "locked position {pos} does not match the target"
            )));
        }
        if data.state == RunState::Done && data.parent != data.target {
            return Err(WeaselError::InvalidSnapshot(
                "run marked done but parent differs from target".to_string(),
            ));
        }
        Ok(Self {
            target: data.target,
            alphabet: data.alphabet,
            offspring: data.offspring,
            mutation_rate: data.mutation_rate,
            parent: data.parent,
            locks: data.locks,
            generation: data.generation,
            state: data.state,
            rng: data.rng,
        })
    }
}
