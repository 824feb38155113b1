//! Applies queued consequences.
//!
//! A loop over a handful of more basic procedures:
//! - Take a queued consequence.
//! - Apply boolean constraint propagation with respect to the consequence.
//! - If no conflict is found, continue.
//! - Otherwise, perform conflict analysis and break.
//!
//! The queue is drained unless a conflict requires attention from the driver,
//! so on an `Exhausted` result propagation has run to fixpoint.

use crate::{
    context::GenericContext,
    db::keys::ClauseKey,
    structures::literal::Literal,
    types::{
        err::{self},
        gen::{self, dbStatus, src},
    },
};

/// Ok results of apply_consequences.
pub enum Ok {
    /// A conflict was found with no choice in play, so the formula is unsatisfiable.
    FundamentalConflict,
    /// Analysis derived the unit clause of the literal.
    UnitClause(Literal),
    /// Analysis derived a clause which asserts the literal after a backjump.
    AssertingClause(ClauseKey, Literal),
    /// Nothing remains to be propagated.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Expand queued consequences, analysing any conflict found.
    pub fn apply_consequences(&mut self) -> Result<Ok, err::Context> {
        'application: while let Some((literal, _)) = self.consequence_q.pop_front() {
            match unsafe { self.bcp(literal) } {
                Ok(()) => {}

                Err(err::BCP::Conflict(key)) => {
                    if !self.literal_db.choice_made() {
                        self.status = dbStatus::Inconsistent;
                        return Ok(Ok::FundamentalConflict);
                    }

                    match self.conflict_analysis(key)? {
                        gen::Analysis::MissedImplication(key, literal) => {
                            let the_clause = self.clause_db.get_db_clause(key)?;
                            let index = self.backjump_level(the_clause)?;
                            self.backjump(index);

                            self.q_literal(literal)?;
                            self.literal_db.record_literal(literal, src::Literal::BCP(key));

                            continue 'application;
                        }

                        gen::Analysis::UnitClause(literal) => {
                            return Ok(Ok::UnitClause(literal));
                        }

                        gen::Analysis::AssertingClause(key, literal) => {
                            return Ok(Ok::AssertingClause(key, literal));
                        }
                    }
                }
            }
        }
        Ok(Ok::Exhausted)
    }
}
