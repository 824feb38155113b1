//! The context of a solve: databases, counters, and configuration.

use std::time::Duration;

use rand::SeedableRng;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, consequence_q::ConsequenceQ, literal::LiteralDB},
    generic::{luby::Luby, minimal_pcg::MinimalPCG32},
    structures::{atom::Atom, clause::Clause},
    types::gen::{dbStatus, Report},
};

pub struct Counters {
    pub total_conflicts: usize,
    pub fresh_conflicts: usize,
    pub total_choices: usize,
    pub total_iterations: usize,
    pub restarts: usize,
    pub time: Duration,
    pub luby: Luby,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,
            total_choices: 0,
            total_iterations: 0,
            restarts: 0,
            time: Duration::from_secs(0),
            luby: Luby::default(),
        }
    }
}

/// A context over a generic source of randomness.
///
/// The source is taken and restored around use, so it must be cheap to
/// construct a placeholder via [Default].
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    pub config: Config,

    pub counters: Counters,
    pub rng: R,

    pub atom_db: AtomDB,
    pub clause_db: ClauseDB,
    pub literal_db: LiteralDB,

    pub status: dbStatus,
    pub consequence_q: ConsequenceQ,
}

pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    pub fn from_config(config: Config) -> Self {
        Self {
            counters: Counters::default(),
            rng: MinimalPCG32::from_seed(config.rng_seed.to_le_bytes()),

            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            literal_db: LiteralDB::new(),

            config,
            status: dbStatus::Unknown,
            consequence_q: ConsequenceQ::default(),
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn report(&self) -> Report {
        match self.status {
            dbStatus::Consistent => Report::Satisfiable,
            dbStatus::Inconsistent => Report::Unsatisfiable,
            dbStatus::Unknown => Report::Unknown,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// A total assignment as signed external variables, in variable order.
    ///
    /// Atoms without a value take their saved phase, so the assignment is
    /// arbitrary on any atom the solve never needed to settle.
    pub fn assignment(&self) -> Vec<i32> {
        (0..self.atom_db.count() as Atom)
            .map(|atom| {
                let polarity = self
                    .atom_db
                    .value_of(atom)
                    .unwrap_or_else(|| self.atom_db.previous_value_of(atom));
                let external = (atom + 1) as i32;
                match polarity {
                    true => external,
                    false => -external,
                }
            })
            .collect()
    }

    /// The clause database as DIMACS body lines: unit clauses, then original
    /// clauses, then learnt clauses.
    pub fn clause_database(&self) -> Vec<String> {
        self.clause_db
            .unit_clauses()
            .map(|literal| format!("{literal} 0"))
            .chain(self.clause_db.all_clauses().map(|clause| clause.as_dimacs()))
            .collect()
    }
}
