use crate::config::{self};

pub const ATOM_BUMP: config::Activity = 1.0;
pub const ATOM_DECAY: config::Activity = 50.0;

pub const CLAUSE_BUMP: config::Activity = 1.0;
pub const CLAUSE_DECAY: config::Activity = 20.0;

/// Activities are rescaled before a bump would exceed this.
pub const MAX_BUMP: config::Activity = 1e100;

pub const HEURISTIC: config::Heuristic = config::Heuristic::Vsids;

pub const LUBY_U: usize = 128;
pub const FIXED_RESTART_INTERVAL: usize = 100;

pub const POLARITY_LEAN: config::PolarityLean = 0.0;
pub const RANDOM_CHOICE_FREQUENCY: config::RandomChoiceFrequency = 0.0;

pub const RNG_SEED: u64 = 0;
