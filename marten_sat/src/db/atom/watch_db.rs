//! Watch lists, a pair per atom.
//!
//! A clause of two or more literals keeps its watched literals in its first two
//! positions, and registers its key in the list matching each watched literal.
//! Keys are stable across the life of a clause, and keys of deleted clauses are
//! left in place to be swept out of a list during propagation when the key fails
//! to resolve.
//!
//! Lists are kept in [UnsafeCell]s as propagation traverses the list of one
//! literal while moving watches onto the lists of other literals of the same
//! database.

use std::{borrow::Borrow, cell::UnsafeCell};

use crate::{
    db::{atom::AtomDB, keys::ClauseKey},
    structures::{atom::Atom, literal::Literal},
};

pub(super) struct WatchDB {
    positive: UnsafeCell<Vec<ClauseKey>>,
    negative: UnsafeCell<Vec<ClauseKey>>,
}

impl WatchDB {
    pub(super) fn new() -> Self {
        Self {
            positive: UnsafeCell::new(Vec::default()),
            negative: UnsafeCell::new(Vec::default()),
        }
    }

    fn occurrences(&self, polarity: bool) -> *mut Vec<ClauseKey> {
        match polarity {
            true => self.positive.get(),
            false => self.negative.get(),
        }
    }
}

impl AtomDB {
    /// Note a clause watches the given literal.
    ///
    /// # Safety
    /// The atom of the literal must be present in the database.
    pub(crate) unsafe fn add_watch(&self, literal: impl Borrow<Literal>, key: ClauseKey) {
        let literal = literal.borrow();
        (*self
            .watch_dbs
            .get_unchecked(literal.atom() as usize)
            .occurrences(literal.polarity()))
        .push(key);
    }

    /// The list of clauses watching the literal of the given atom and polarity.
    ///
    /// # Safety
    /// The atom must be present in the database, and the pointer must not be
    /// held across a mutation of the set of atoms.
    pub(crate) unsafe fn watch_list(&self, atom: Atom, polarity: bool) -> *mut Vec<ClauseKey> {
        self.watch_dbs
            .get_unchecked(atom as usize)
            .occurrences(polarity)
    }
}
