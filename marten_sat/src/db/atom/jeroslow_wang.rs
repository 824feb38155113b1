use crate::{
    config::{Activity, Heuristic},
    db::atom::AtomDB,
    structures::clause::Clause,
};

impl AtomDB {
    /// Fold the Jeroslow-Wang weight of a clause into the literal scores.
    ///
    /// The heap value of an atom is the greater of its two literal scores, so
    /// popping the heap yields the atom with the strongest literal.
    /// Scores accumulate over original clauses as a formula is read, and are
    /// refreshed with each learnt clause.
    ///
    /// A quiet no-op unless the context is using Jeroslow-Wang.
    pub fn jw_note_clause(&mut self, clause: &impl Clause) {
        if self.heuristic != Heuristic::JeroslowWang {
            return;
        }

        let weight = (2.0 as Activity).powi(-(clause.size() as i32));
        for literal in clause.literals() {
            let index = literal.atom() as usize;
            unsafe {
                match literal.polarity() {
                    true => *self.jw_positive.get_unchecked_mut(index) += weight,
                    false => *self.jw_negative.get_unchecked_mut(index) += weight,
                }
                let score = Activity::max(
                    *self.jw_positive.get_unchecked(index),
                    *self.jw_negative.get_unchecked(index),
                );
                self.activity_heap.revalue(index, score);
                self.activity_heap.heapify_if_active(index);
            }
        }
    }
}
