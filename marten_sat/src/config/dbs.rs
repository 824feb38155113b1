use crate::config::{defaults, Activity};

/// Configuration cloned into the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The amount added to an atom's activity when bumped.
    pub bump: Activity,
    /// The decay factor, scaled by 1e-3 when applied.
    pub decay: Activity,
    /// The activity at which all activities are rescaled.
    pub max_bump: Activity,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: defaults::ATOM_BUMP,
            decay: defaults::ATOM_DECAY,
            max_bump: defaults::MAX_BUMP,
        }
    }
}

/// Configuration cloned into the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    pub bump: Activity,
    pub decay: Activity,
    pub max_bump: Activity,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: defaults::CLAUSE_BUMP,
            decay: defaults::CLAUSE_DECAY,
            max_bump: defaults::MAX_BUMP,
        }
    }
}
