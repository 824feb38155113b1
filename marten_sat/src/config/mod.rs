//! Configuration details.
//!
//! All configuration for a context is fixed when the context is created.
//! The databases clone their part of the configuration, so a context holds no
//! references back to the config it was built from.

pub mod dbs;
pub mod defaults;

use std::time::Duration;

/// Representation used for atom and clause activity.
pub type Activity = f64;

/// Representation for the probability of choosing `true` when no phase is saved.
pub type PolarityLean = f64;

/// Representation for the probability of making a random choice.
pub type RandomChoiceFrequency = f64;

/// Which heuristic orders atoms when a choice is to be made.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Heuristic {
    /// Activity from conflicts, bumped additively and decayed by increment growth.
    Vsids,
    /// Static literal scores of 2^(-length) summed over clauses.
    JeroslowWang,
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vsids => write!(f, "VSIDS"),
            Self::JeroslowWang => write!(f, "Jeroslow-Wang"),
        }
    }
}

/// When to restart, counted in conflicts since the last restart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RestartPolicy {
    /// Restart each time the count reaches a fixed interval.
    Fixed(usize),
    /// Restart each time the count reaches the unit scaled by the luby sequence.
    Luby(usize),
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(interval) => write!(f, "fixed ({interval})"),
            Self::Luby(unit) => write!(f, "luby ({unit})"),
        }
    }
}

/// Scheduler for learnt clause reductions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReductionScheduler {
    /// Reduce the clause database every `conflict` conflicts, if set.
    pub conflict: Option<u32>,
}

/// Switches for parts of a solve which may be disabled outright.
#[derive(Clone, Copy, Debug)]
pub struct Switches {
    pub phase_saving: bool,
    pub restart: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub heuristic: Heuristic,
    pub restart_policy: RestartPolicy,

    pub polarity_lean: PolarityLean,
    pub random_choice_frequency: RandomChoiceFrequency,

    pub scheduler: ReductionScheduler,
    pub switch: Switches,

    /// A wall-clock budget for a solve, checked between rounds of propagation.
    pub time_limit: Option<Duration>,
    /// A conflict budget for a solve, checked between rounds of propagation.
    pub conflict_limit: Option<usize>,

    pub rng_seed: u64,

    pub atom_db: dbs::AtomDBConfig,
    pub clause_db: dbs::ClauseDBConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: defaults::HEURISTIC,
            restart_policy: RestartPolicy::Luby(defaults::LUBY_U),

            polarity_lean: defaults::POLARITY_LEAN,
            random_choice_frequency: defaults::RANDOM_CHOICE_FREQUENCY,

            scheduler: ReductionScheduler { conflict: None },
            switch: Switches {
                phase_saving: true,
                restart: true,
            },

            time_limit: None,
            conflict_limit: None,

            rng_seed: defaults::RNG_SEED,

            atom_db: dbs::AtomDBConfig::default(),
            clause_db: dbs::ClauseDBConfig::default(),
        }
    }
}
