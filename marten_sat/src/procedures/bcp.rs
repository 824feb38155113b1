//! Boolean constraint propagation.
//!
//! Take a queued literal and check the clauses watching its complement.
//! Each clause either rests on a satisfied watch, moves its watch to some other
//! non-false literal, is unit and forces its remaining watch, or is falsified.
//!
//! Stale keys from deleted clauses are swept from the list as they are found.

use std::borrow::Borrow;

use crate::{
    context::GenericContext,
    db::clause::stored::WatchStatus,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::{err::{self}, gen::src},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagate the consequences of a valued literal.
    ///
    /// # Safety
    /// The implementation requires a key invariant to be upheld:
    /// - Each stored clause watches the literals in its first two positions.
    ///
    /// The watch list of the complement is held as a raw pointer while clauses
    /// move their watches onto other lists of the same database.
    pub unsafe fn bcp(&mut self, literal: impl Borrow<Literal>) -> Result<(), err::BCP> {
        let literal = literal.borrow();
        let list = &mut *self.atom_db.watch_list(literal.atom(), !literal.polarity());

        let mut index = 0;
        let mut length = list.len();

        'watch_loop: while index < length {
            let key = *list.get_unchecked(index);

            let clause = match self.clause_db.get_db_clause_mut(key) {
                Some(stored_clause) => stored_clause,
                None => {
                    list.swap_remove(index);
                    length -= 1;
                    continue 'watch_loop;
                }
            };

            match clause.update_watch(literal.atom(), &self.atom_db) {
                WatchStatus::Moved => {
                    list.swap_remove(index);
                    length -= 1;
                    continue 'watch_loop;
                }

                WatchStatus::Witness => {}

                WatchStatus::Unit => {
                    let the_watch = *clause.get_unchecked(0);

                    match self.atom_db.value_of(the_watch.atom()) {
                        Some(value) if the_watch.polarity() != value => {
                            log::trace!(target: targets::PROPAGATION, "Conflict via {key} on {literal}.");
                            self.clause_db.note_use(key);

                            return Err(err::BCP::Conflict(key));
                        }

                        None => {
                            self.clause_db.note_use(key);

                            if self.q_literal(the_watch).is_err() {
                                return Err(err::BCP::Conflict(key));
                            }
                            self.literal_db.record_literal(the_watch, src::Literal::BCP(key));
                        }

                        Some(_) => {}
                    }
                }
            }

            index += 1;
            continue 'watch_loop;
        }

        Ok(())
    }
}
