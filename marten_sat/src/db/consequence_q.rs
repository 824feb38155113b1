//! A queue of observed consequences to be propagated.
//!
//! The queue head separates assignments which have been propagated from those
//! still pending: a literal is valued the moment it is queued, and the
//! consequences of the value are explored when the literal is taken from the
//! queue during a round of propagation.

use std::borrow::Borrow;

use crate::{
    context::GenericContext,
    db::keys::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

/// Queued consequences, paired with the level at which each was observed.
pub type ConsequenceQ = std::collections::VecDeque<(Literal, LevelIndex)>;

/// Possible 'Ok' results of queuing a literal.
pub enum Ok {
    /// The literal was (successfully) queued.
    Qd,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Clears all queued consequences from the given level index up to the
    /// current level index.
    pub fn clear_q(&mut self, from: LevelIndex) {
        self.consequence_q.retain(|(_, level)| *level < from);
    }

    /// Queues a literal at the current level, if possible.
    ///
    /// A literal can be queued so long as it does not conflict with the current
    /// valuation. The value is set on queuing, so invariants over watched
    /// literals hold while the consequence is pending.
    pub fn q_literal(&mut self, literal: impl Borrow<Literal>) -> Result<Ok, err::Queue> {
        let literal = literal.borrow();
        let level = self.literal_db.choice_count();

        match self.atom_db.set_value(literal.atom(), literal.polarity(), Some(level)) {
            Ok(_) => {
                self.consequence_q.push_back((*literal, level));
                Ok(Ok::Qd)
            }
            Err(_) => {
                log::trace!(target: targets::QUEUE, "Queueing {literal} failed.");
                Err(err::Queue::Conflict)
            }
        }
    }
}
