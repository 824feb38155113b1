//! Plain enums recording the result or status of some part of a solve.

use crate::{db::keys::ClauseKey, structures::literal::Literal};

/// Results of conflict analysis.
pub enum Analysis {
    /// The conflicting clause was already asserting below the current level.
    MissedImplication(ClauseKey, Literal),
    /// Resolution derived a clause of a single literal.
    UnitClause(Literal),
    /// Resolution derived a clause which asserts its literal after a backjump.
    AssertingClause(ClauseKey, Literal),
}

/// Results of reading a sequence of clauses into the resolution buffer.
#[derive(Debug)]
pub enum RBuf {
    /// Resolution stopped at the first unique implication point.
    FirstUIP,
    /// Every clause in the sequence was considered.
    Exhausted,
    /// The conflicting clause asserts a literal without any resolution.
    Missed(ClauseKey, Literal),
}

/// The status of the formula held in a context, relative to its valuation.
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum dbStatus {
    Consistent,
    Inconsistent,
    Unknown,
}

/// What a solve has to say about a formula.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Report {
    Satisfiable,
    Unsatisfiable,
    /// A time or conflict budget was spent before the formula was decided.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The result of valuing an atom.
pub enum Value {
    /// The atom had no value.
    NotSet,
    /// The atom already had the given value.
    Match,
    /// The atom has the complement value.
    Conflict,
}

/// Sources of clauses and literals.
pub mod src {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    pub enum Clause {
        /// Read from a formula.
        Original,
        /// Derived by resolution during analysis.
        Resolution,
    }

    /// How a literal came to be on the trail.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Literal {
        /// A choice, where the alternative polarity may make a difference.
        Choice,
        /// Forced by the noted clause during propagation.
        BCP(ClauseKey),
        /// A unit clause, given or derived.
        Unit,
    }
}
