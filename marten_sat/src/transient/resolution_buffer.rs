//! A buffer for applying resolution to a sequence of clauses.
//!
//! The buffer holds a cell for each atom, seeded from the valuation at the time
//! of a conflict. Atoms valued at the conflict level are cleared before
//! resolution begins, so any literal over those atoms reads as valueless, and
//! the count of valueless literals falling to one marks the first unique
//! implication point.

use std::borrow::Borrow;

use crate::{
    db::{atom::AtomDB, clause::ClauseDB, keys::ClauseKey, literal::LiteralDB},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{vClause, Clause},
        literal::Literal,
        valuation::Valuation,
    },
    types::{
        err::{self},
        gen::{self, src},
    },
};

/// Cells of a resolution buffer.
#[derive(Clone, Copy)]
enum Cell {
    /// Initial valuation.
    Value(Option<bool>),
    /// The atom was not valued.
    None(Literal),
    /// The atom had a conflicting value.
    Conflict(Literal),
    /// The atom was part of resolution but was already proven.
    Strengthened,
    /// The atom was used as a pivot when reading a clause into the buffer.
    Pivot,
}

pub struct ResolutionBuffer {
    valueless_count: usize,
    clause_length: usize,
    asserts: Option<Literal>,
    buffer: Vec<Cell>,
    used: Vec<bool>,
}

impl ResolutionBuffer {
    pub fn from_atom_db(atom_db: &AtomDB) -> Self {
        ResolutionBuffer {
            valueless_count: 0,
            clause_length: 0,
            asserts: None,

            buffer: atom_db.valuation().values().map(Cell::Value).collect(),
            used: vec![false; atom_db.count()],
        }
    }

    pub fn clause_length(&self) -> usize {
        self.clause_length
    }

    /// Mark an atom as valueless for the resolution to come.
    pub fn clear_literal(&mut self, literal: Literal) {
        self.set(literal.atom(), Cell::Value(None))
    }

    /// Resolve from the conflicting clause through the reasons of the current
    /// level, most recent first, until a single valueless literal remains.
    pub fn resolve_with(
        &mut self,
        conflict: ClauseKey,
        literal_db: &LiteralDB,
        clause_db: &mut ClauseDB,
    ) -> Result<gen::RBuf, err::ResolutionBuffer> {
        let conflict_clause = match clause_db.get_db_clause(conflict) {
            Ok(clause) => clause,
            Err(_) => return Err(err::ResolutionBuffer::LostClause),
        };
        self.merge_clause(conflict_clause)?;

        // Maybe the conflict clause was already asserting after the previous choice…
        if let Some(asserted_literal) = self.asserts() {
            return Ok(gen::RBuf::Missed(conflict, asserted_literal));
        };

        if let ClauseKey::Learned(index, _) = conflict {
            clause_db.bump_activity(index)
        };

        'resolution_loop: for (source, literal) in literal_db.last_consequences().iter().rev() {
            match source {
                src::Literal::BCP(the_key) => {
                    let source_clause = match clause_db.get_db_clause(*the_key) {
                        Err(_) => {
                            log::error!(target: targets::RESOLUTION, "Lost resolution clause {the_key}");
                            return Err(err::ResolutionBuffer::LostClause);
                        }
                        Ok(clause) => clause,
                    };

                    if self.resolve_clause(source_clause, literal).is_err() {
                        // the clause wasn't relevant
                        continue 'resolution_loop;
                    }

                    if let ClauseKey::Learned(index, _) = the_key {
                        clause_db.bump_activity(*index)
                    };
                }

                _ => panic!("resolution over a non-bcp consequence"),
            };

            if self.valueless_count == 1 {
                return Ok(gen::RBuf::FirstUIP);
            }
        }

        Ok(gen::RBuf::Exhausted)
    }

    /// Remove literals the proven literals conflict with from the clause.
    pub fn strengthen_given<'l>(&mut self, literals: impl Iterator<Item = &'l Literal>) {
        for literal in literals {
            match unsafe { *self.buffer.get_unchecked(literal.atom() as usize) } {
                Cell::None(_) | Cell::Conflict(_) => {
                    if let Some(length_minus_one) = self.clause_length.checked_sub(1) {
                        self.clause_length = length_minus_one;
                    }
                    self.set(literal.atom(), Cell::Strengthened)
                }
                _ => {}
            }
        }
    }

    /// The atoms of literals merged into the buffer during resolution.
    pub fn atoms_used(&self) -> impl Iterator<Item = Atom> + '_ {
        self.used
            .iter()
            .enumerate()
            .filter_map(|(index, used)| match used {
                true => Some(index as Atom),
                false => None,
            })
    }

    /// The asserted literal and the remainder of the clause held in the buffer.
    pub fn to_assertion_clause(&self) -> (Option<Literal>, vClause) {
        let mut the_clause = vec![];
        let mut asserted_literal = None;
        for item in &self.buffer {
            match item {
                Cell::Strengthened | Cell::Value(_) | Cell::Pivot => {}
                Cell::Conflict(literal) => the_clause.push(*literal),
                Cell::None(literal) => {
                    if self.valueless_count == 1 {
                        asserted_literal = Some(*literal);
                    } else {
                        the_clause.push(*literal);
                    }
                }
            }
        }

        (asserted_literal, the_clause)
    }
}

impl ResolutionBuffer {
    /// Merge a clause into the buffer.
    fn merge_clause(&mut self, clause: &impl Clause) -> Result<(), err::ResolutionBuffer> {
        for literal in clause.literals() {
            match unsafe { self.buffer.get_unchecked(literal.atom() as usize) } {
                Cell::Conflict(_) | Cell::None(_) | Cell::Pivot | Cell::Strengthened => {}
                Cell::Value(maybe) => match maybe {
                    None => {
                        unsafe { *self.used.get_unchecked_mut(literal.atom() as usize) = true };
                        self.clause_length += 1;
                        self.valueless_count += 1;
                        self.set(literal.atom(), Cell::None(*literal));
                        if self.asserts.is_none() {
                            self.asserts = Some(*literal);
                        }
                    }
                    Some(value) if *value != literal.polarity() => {
                        unsafe { *self.used.get_unchecked_mut(literal.atom() as usize) = true };
                        self.clause_length += 1;
                        self.set(literal.atom(), Cell::Conflict(*literal));
                    }
                    Some(_) => {
                        log::error!(target: targets::RESOLUTION, "Satisfied clause in resolution");
                        return Err(err::ResolutionBuffer::SatisfiedClause);
                    }
                },
            }
        }
        Ok(())
    }

    /// Resolve a clause into the buffer on the given pivot, so long as the
    /// complement of the pivot is present.
    fn resolve_clause(
        &mut self,
        clause: &impl Clause,
        using: impl Borrow<Literal>,
    ) -> Result<(), err::ResolutionBuffer> {
        let using = using.borrow();
        let contents = unsafe { *self.buffer.get_unchecked(using.atom() as usize) };
        match contents {
            Cell::None(literal) if *using == literal.negate() => {
                self.merge_clause(clause)?;
                self.clause_length -= 1;
                self.set(using.atom(), Cell::Pivot);
                self.valueless_count -= 1;

                Ok(())
            }
            Cell::Conflict(literal) if *using == literal.negate() => {
                self.merge_clause(clause)?;
                self.clause_length -= 1;
                self.set(using.atom(), Cell::Pivot);

                Ok(())
            }
            _ => {
                // Skip over any clauses which are not involved in the current resolution trail
                Err(err::ResolutionBuffer::LostClause)
            }
        }
    }

    fn set(&mut self, index: Atom, to: Cell) {
        *unsafe { self.buffer.get_unchecked_mut(index as usize) } = to
    }

    fn asserts(&self) -> Option<Literal> {
        if self.valueless_count == 1 {
            self.asserts
        } else {
            None
        }
    }
}
