use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::Literal,
        valuation::Valuation,
    },
    types::{err, gen::dbStatus},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum Ok {
    /// Some truth value was assigned to some atom.
    Made,
    /// All atoms had already been assigned truth values, so no choice could be made.
    Exhausted,
}

/// Methods related to making choices.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Value some unvalued atom, polarised by its saved phase unless phase
    /// saving is off.
    pub fn make_choice(&mut self) -> Result<Ok, err::Queue> {
        // Takes ownership of the rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(choice_id) => {
                self.counters.total_choices += 1;

                let choice_literal = {
                    if self.config.switch.phase_saving {
                        Literal::fresh(choice_id, self.atom_db.previous_value_of(choice_id))
                    } else {
                        Literal::fresh(choice_id, self.rng.gen_bool(self.config.polarity_lean))
                    }
                };
                log::trace!(target: targets::CHOICE, "Choice of {choice_literal}");
                self.literal_db.note_choice(choice_literal);
                self.q_literal(choice_literal)?;

                Ok(Ok::Made)
            }
            None => {
                self.status = dbStatus::Consistent;
                Ok(Ok::Exhausted)
            }
        }
    }

    /// An atom with no value on the current valuation, by most activity, or at
    /// random at the configured frequency.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.gen_bool(self.config.random_choice_frequency) {
            true => self.atom_db.valuation().unvalued_atoms().choose(rng),
            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                self.atom_db.valuation().unvalued_atoms().next()
            }
        }
    }

    /// Resets all choices and consequences of those choices.
    ///
    /// In other words, backjumps to before any choice was made.
    pub fn clear_choices(&mut self) {
        self.backjump(0);
    }
}
