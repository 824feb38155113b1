//! Methods for building the formula held in a context.
//!
//! Clauses may be added at level zero only. On admission duplicate literals are
//! merged, tautologies are dropped, and literals already falsified by proven
//! literals are stripped. Unit clauses are queued at level zero rather than
//! stored with watches.

use std::{borrow::Borrow, io::BufRead};

use crate::{
    context::GenericContext,
    db::consequence_q::{self},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::vClause,
        literal::Literal,
    },
    types::{
        err::{self},
        gen::src,
    },
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Extend the atom database to cover external variables up to `count`.
    pub fn fresh_atoms_to(&mut self, count: Atom) {
        while (self.atom_db.count() as Atom) < count {
            self.atom_db.fresh_atom();
        }
    }

    /// The literal of a signed external variable, growing the atom database as
    /// required. Zero is no literal.
    pub fn literal_from_int(&mut self, value: i64) -> Option<Literal> {
        if value == 0 {
            return None;
        }
        let magnitude = value.unsigned_abs();
        self.fresh_atoms_to(magnitude as Atom);
        Some(Literal::fresh((magnitude - 1) as Atom, value > 0))
    }

    /// Add the clause given by a string of whitespace-separated signed
    /// variables, e.g. `"1 -2 3"`.
    pub fn add_clause_string(&mut self, string: &str) -> Result<(), err::Build> {
        let mut the_clause = vec![];
        for item in string.split_whitespace() {
            let value: i64 = match item.parse() {
                Ok(value) => value,
                Err(_) => return Err(err::Build::Parse(err::Parse::Literal(0))),
            };
            match self.literal_from_int(value) {
                Some(literal) => the_clause.push(literal),
                None => return Err(err::Build::Parse(err::Parse::Literal(0))),
            }
        }
        self.add_clause(the_clause)
    }

    /// The internal representation of added clauses:
    ///
    /// - An empty clause is rejected, as it is equivalent to falsum.
    /// - Unit clauses are queued at level zero and noted as proven.
    /// - Clauses of two or more literals go to the clause database.
    pub fn add_clause(&mut self, clause: impl Borrow<vClause>) -> Result<(), err::Build> {
        let clause = clause.borrow();
        if clause.is_empty() {
            return Err(err::Build::ClauseDB(err::ClauseDB::EmptyClause));
        }

        let mut the_clause: vClause = vec![];
        for literal in clause {
            if the_clause.iter().any(|present| *present == literal.negate()) {
                log::trace!(target: targets::PARSER, "Tautology dropped");
                return Ok(());
            }
            if !the_clause.contains(literal) {
                the_clause.push(*literal);
            }
        }

        // Simplification against proven literals.
        let mut index = 0;
        let mut max = the_clause.len();
        while index < max {
            let this_literal = unsafe { *the_clause.get_unchecked(index) };
            match self.atom_db.value_of(this_literal.atom()) {
                Some(value) if value == this_literal.polarity() => return Ok(()),
                Some(_) => {
                    the_clause.swap_remove(index);
                    max -= 1;
                }
                None => index += 1,
            }
        }

        match the_clause.len() {
            0 => Err(err::Build::ClauseDB(err::ClauseDB::ImmediateConflict)),

            1 => {
                let literal = unsafe { *the_clause.get_unchecked(0) };
                match self.q_literal(literal) {
                    Ok(consequence_q::Ok::Qd) => {
                        self.clause_db.note_unit(literal);
                        self.literal_db.record_literal(literal, src::Literal::Unit);
                        Ok(())
                    }
                    Err(_) => Err(err::Build::ClauseDB(err::ClauseDB::ImmediateConflict)),
                }
            }

            _ => {
                self.atom_db.jw_note_clause(&the_clause);
                self.clause_db
                    .store(the_clause, src::Clause::Original, &self.atom_db)?;
                Ok(())
            }
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Read a DIMACS formula into the context.
    ///
    /// The problem line fixes the range of variables, and a variable outside the
    /// range is an error. A clause is free to span lines, and a line beginning
    /// `%` ends the formula.
    pub fn read_dimacs(&mut self, mut file_reader: impl BufRead) -> Result<(), err::Build> {
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: vClause = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;

        // first phase, read until the problem is found
        let declared_atoms: Atom = 'preamble_loop: loop {
            match file_reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::Build::Parse(err::Parse::MissingProblem)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::Build::Parse(err::Parse::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    if problem_details.next() != Some("p") || problem_details.next() != Some("cnf")
                    {
                        return Err(err::Build::Parse(err::Parse::Problem(line_counter)));
                    }

                    let atoms: Atom = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::Build::Parse(err::Parse::Problem(line_counter))),
                    };

                    let clauses: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::Build::Parse(err::Parse::Problem(line_counter))),
                    };

                    buffer.clear();
                    log::info!(target: targets::PARSER, "Expecting {atoms} atoms over {clauses} clauses");
                    break 'preamble_loop atoms;
                }

                _ => return Err(err::Build::Parse(err::Parse::MissingProblem)),
            }
        };

        self.fresh_atoms_to(declared_atoms);

        // second phase, read until the formula ends
        'formula_loop: loop {
            match file_reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::Build::Parse(err::Parse::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}
                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                clause_counter += 1;
                            }
                            _ => {
                                let value: i64 = match item.parse() {
                                    Ok(value) => value,
                                    Err(_) => {
                                        return Err(err::Build::Parse(err::Parse::Literal(
                                            line_counter,
                                        )))
                                    }
                                };
                                if value == 0 {
                                    return Err(err::Build::Parse(err::Parse::Literal(
                                        line_counter,
                                    )));
                                }
                                if value.unsigned_abs() > declared_atoms as u64 {
                                    return Err(err::Build::Parse(err::Parse::OutOfBounds(
                                        line_counter,
                                    )));
                                }

                                let the_literal =
                                    Literal::fresh((value.unsigned_abs() - 1) as Atom, value > 0);
                                if !clause_buffer.iter().any(|l| *l == the_literal) {
                                    clause_buffer.push(the_literal);
                                }
                            }
                        }
                    }
                }
            }

            buffer.clear();
        }

        if !clause_buffer.is_empty() {
            let the_clause = std::mem::take(&mut clause_buffer);
            self.add_clause(the_clause)?;
            clause_counter += 1;
        }

        log::info!(target: targets::PARSER, "Parsed {clause_counter} clauses");
        Ok(())
    }
}
