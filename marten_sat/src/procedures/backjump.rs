//! Recovery from a conflict.
//!
//! A backjump undoes every choice above some target level, along with the
//! consequences of those choices. Values are dropped with their phase saved,
//! atoms return to the choice heap, and any queued consequence observed above
//! the target level is forgotten.
//!
//! The backjump level of an inconsistent clause is the second highest choice
//! index among its literals, so after the jump the clause asserts its literal
//! from the highest level.

use crate::{
    context::GenericContext,
    db::keys::LevelIndex,
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjump to the given target level.
    ///
    /// Passing a target level at or above the current level is safe --- nothing
    /// will happen.
    pub fn backjump(&mut self, target_level: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target_level}", self.literal_db.choice_count());

        // Sufficiently safe:
        // The number of pops is bounded by the height of the choice stack, and
        // any atom on the stack is in the atom database.
        for _ in 0..(self.literal_db.choice_count().saturating_sub(target_level)) {
            self.atom_db.drop_value(self.literal_db.last_choice().atom());
            for (_, literal) in self.literal_db.last_consequences() {
                self.atom_db.drop_value(literal.atom());
            }
            self.literal_db.forget_last_choice();
        }
        self.clear_q(target_level);
    }

    /// The backjump level of an inconsistent clause.
    ///
    /// Sound only when every literal of the clause has a value, as is so for a
    /// clause derived from a conflict before any jump is made.
    // Work through the clause, keeping an ordered record of the top two choice indices: (second_to_top, top)
    pub fn backjump_level(&self, clause: &impl Clause) -> Result<LevelIndex, err::Context> {
        match clause.size() {
            0 | 1 => Ok(0),
            _ => {
                let mut top_two = (None, None);
                for literal in clause.literals() {
                    let Some(level) = self.atom_db.choice_index_of(literal.atom()) else {
                        log::error!(target: targets::BACKJUMP, "{literal} has no level");
                        return Err(err::Context::Backjump);
                    };

                    match top_two {
                        (_, None) => top_two.1 = Some(level),
                        (_, Some(the_top)) if level > the_top => {
                            top_two.0 = top_two.1;
                            top_two.1 = Some(level);
                        }
                        (None, _) => top_two.0 = Some(level),
                        (Some(second_to_top), _) if level > second_to_top => {
                            top_two.0 = Some(level)
                        }
                        _ => {}
                    }
                }

                match top_two {
                    (None, _) => Ok(0),
                    (Some(second_to_top), _) => Ok(second_to_top),
                }
            }
        }
    }
}
