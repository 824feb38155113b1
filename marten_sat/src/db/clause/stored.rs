use crate::{
    db::{atom::AtomDB, keys::ClauseKey},
    structures::{
        atom::Atom,
        clause::{vClause, Clause},
        literal::Literal,
    },
};

use std::{borrow::Borrow, ops::Deref};

/// A clause in the database, with its watched literals in the first two positions.
#[allow(non_camel_case_types)]
#[derive(Debug)]
pub struct dbClause {
    key: ClauseKey,
    clause: vClause,
}

/// The status of a clause after a watch update.
#[derive(Clone, Copy, PartialEq)]
pub enum WatchStatus {
    /// The other watched literal is satisfied, so the clause may rest.
    Witness,
    /// The falsified watch was replaced, and the clause moved to the list of the replacement.
    Moved,
    /// No replacement exists, so the clause is unit on the other watched literal.
    Unit,
}

impl dbClause {
    /// Store a clause read from a formula, choosing non-false literals to watch
    /// where possible.
    pub(super) fn from(key: ClauseKey, clause: vClause, atoms: &AtomDB) -> Self {
        let mut stored_clause = Self { key, clause };
        stored_clause.initialise_watches(atoms);
        stored_clause
    }

    /// Store a clause derived by resolution.
    ///
    /// The first literal must be the literal the clause asserts, and is always
    /// watched. The second watch is the most recently set of the rest, so after a
    /// backjump the first watch is unvalued and the second is the first to be
    /// revisited.
    pub(super) fn from_asserting(key: ClauseKey, clause: vClause, atoms: &AtomDB) -> Self {
        let mut stored_clause = Self { key, clause };

        let mut deepest = 1;
        for index in 2..stored_clause.clause.len() {
            let index_level = {
                let literal = unsafe { stored_clause.clause.get_unchecked(index) };
                atoms.choice_index_of(literal.atom())
            };
            let deepest_level = {
                let literal = unsafe { stored_clause.clause.get_unchecked(deepest) };
                atoms.choice_index_of(literal.atom())
            };
            if index_level > deepest_level {
                deepest = index;
            }
        }
        stored_clause.clause.swap(1, deepest);

        unsafe {
            stored_clause.note_watch(*stored_clause.clause.get_unchecked(0), atoms);
            stored_clause.note_watch(*stored_clause.clause.get_unchecked(1), atoms);
        }

        stored_clause
    }

    pub(super) const fn key(&self) -> ClauseKey {
        self.key
    }
}

// Watches

impl dbClause {
    fn initialise_watches(&mut self, atoms: &AtomDB) {
        let last = self.clause.len() - 1;

        let mut index = 0;
        let watch_a = loop {
            if index == last {
                break index;
            }

            let literal = unsafe { self.clause.get_unchecked(index) };
            match atoms.value_of(literal.atom()) {
                None => break index,
                Some(value) if value == literal.polarity() => break index,
                Some(_) => index += 1,
            }
        };
        self.clause.swap(0, watch_a);

        let mut watch_b = 1;
        for index in 1..self.clause.len() {
            let literal = unsafe { self.clause.get_unchecked(index) };
            match atoms.value_of(literal.atom()) {
                Some(value) if value != literal.polarity() => {}
                _ => {
                    watch_b = index;
                    break;
                }
            }
        }
        self.clause.swap(1, watch_b);

        unsafe {
            self.note_watch(*self.clause.get_unchecked(0), atoms);
            self.note_watch(*self.clause.get_unchecked(1), atoms);
        }
    }

    unsafe fn note_watch(&self, literal: impl Borrow<Literal>, atoms: &AtomDB) {
        atoms.add_watch(literal.borrow(), self.key);
    }

    /// Update the watches of the clause given the atom of a falsified watched
    /// literal.
    ///
    /// The falsified watch is normalised to position one, so position zero holds
    /// the literal the clause may be unit on.
    #[inline(always)]
    pub fn update_watch(&mut self, atom: Atom, atoms: &AtomDB) -> WatchStatus {
        unsafe {
            if self.clause.get_unchecked(0).atom() == atom {
                self.clause.swap(0, 1);
            }

            let watch_a = *self.clause.get_unchecked(0);
            if let Some(value) = atoms.value_of(watch_a.atom()) {
                if value == watch_a.polarity() {
                    return WatchStatus::Witness;
                }
            }

            for index in 2..self.clause.len() {
                let candidate = *self.clause.get_unchecked(index);
                match atoms.value_of(candidate.atom()) {
                    Some(value) if value != candidate.polarity() => {}
                    _ => {
                        self.clause.swap(1, index);
                        self.note_watch(candidate, atoms);
                        return WatchStatus::Moved;
                    }
                }
            }

            WatchStatus::Unit
        }
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_dimacs())
    }
}

impl Deref for dbClause {
    type Target = [Literal];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl Clause for dbClause {
    fn size(&self) -> usize {
        self.clause.len()
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.clause.iter()
    }

    fn as_dimacs(&self) -> String {
        self.clause.as_dimacs()
    }
}
