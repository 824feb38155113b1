//! Error types used in the library.
//!
//! - Some of these are internally expected --- e.g. BCP conflicts are used to control the flow of a solve.
//! - Some are fatal to a solve --- e.g. a parse error, or a corrupt clause key.
//!
//! Names of the error enums for the most part overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::keys::ClauseKey;

/// Noted errors while reading a DIMACS formula.
///
/// Each variant carrying an index notes the one-based line on which the issue was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    /// No `p cnf <atoms> <clauses>` line before the body of the formula.
    MissingProblem,
    /// A malformed problem line.
    Problem(usize),
    /// An unreadable literal.
    Literal(usize),
    /// A variable outside those declared by the problem line.
    OutOfBounds(usize),
    /// A line which could not be read at all.
    Line(usize),
}

impl std::fmt::Display for Parse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProblem => write!(f, "no problem line found"),
            Self::Problem(line) => write!(f, "line {line}: malformed problem line"),
            Self::Literal(line) => write!(f, "line {line}: unreadable literal"),
            Self::OutOfBounds(line) => write!(f, "line {line}: variable outside the declared range"),
            Self::Line(line) => write!(f, "line {line}: unreadable line"),
        }
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BCP {
    /// A clause was falsified.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

/// An error in the clause database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseDB {
    /// Some attempt was made to store an empty clause.
    EmptyClause,
    /// Some attempt was made to store a unit clause, as units are recorded on the trail instead.
    UnitClause,
    /// A clause conflicts with the level zero valuation.
    ImmediateConflict,
    /// An invalid key token.
    InvalidKeyToken,
    /// An invalid key index.
    InvalidKeyIndex,
    /// A learnt clause is missing.
    MissingLearned,
    /// All possible keys have been used for some clause kind.
    StorageExhausted,
}

/// Noted errors during conflict analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,
    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,
    /// Some issue with the resolution buffer.
    Buffer,
    /// Some issue with the clause store.
    ClauseDB,
}

/// An error during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionBuffer {
    /// A clause could not be found.
    LostClause,
    /// Somehow the resolved clause is satisfied on the valuation used for assertion checking.
    SatisfiedClause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queue {
    /// The complement of the queued literal already holds.
    Conflict,
}

/// An error in the context, wrapping errors from the parts of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Failed to queue a literal.
    QueueConflict,
    /// The error from an interaction with the clause database.
    ClauseDB,
    /// Failed to find the level to backjump to.
    Backjump,
    /// Analysis failed for some reason.
    Analysis,
}

/// Noted errors when building a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Build {
    /// An error while parsing.
    Parse(Parse),
    /// Interaction with the clause database led to an error.
    ClauseDB(ClauseDB),
    /// A request to some other part of the context led to an error.
    Context(Context),
}

// Ignore the reason for failing to retrieve a clause
impl From<ClauseDB> for Analysis {
    fn from(_: ClauseDB) -> Self {
        Analysis::ClauseDB
    }
}

impl From<ResolutionBuffer> for Analysis {
    fn from(_: ResolutionBuffer) -> Self {
        Analysis::Buffer
    }
}

impl From<Queue> for Context {
    fn from(_: Queue) -> Self {
        Self::QueueConflict
    }
}

impl From<ClauseDB> for Context {
    fn from(_: ClauseDB) -> Self {
        Context::ClauseDB
    }
}

impl From<Analysis> for Context {
    fn from(_: Analysis) -> Self {
        Context::Analysis
    }
}

impl From<Parse> for Build {
    fn from(e: Parse) -> Self {
        Self::Parse(e)
    }
}

impl From<ClauseDB> for Build {
    fn from(e: ClauseDB) -> Self {
        Self::ClauseDB(e)
    }
}

impl From<Context> for Build {
    fn from(e: Context) -> Self {
        Self::Context(e)
    }
}
