use crate::{
    context::GenericContext,
    db::keys::ClauseKey,
    misc::log::targets::{self},
    transient::resolution_buffer::ResolutionBuffer,
    types::{
        err::{self},
        gen::{self, src},
    },
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Derive a clause to avoid the given conflict, by resolution to the first
    /// unique implication point of the current level.
    ///
    /// The atoms of clauses used during resolution are bumped, and with them the
    /// Jeroslow-Wang scores are refreshed by the learnt clause, so analysis
    /// feeds whichever heuristic the context was built with.
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<gen::Analysis, err::Analysis> {
        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {}", self.literal_db.choice_count());

        let mut the_buffer = ResolutionBuffer::from_atom_db(&self.atom_db);

        the_buffer.clear_literal(self.literal_db.last_choice());
        for (_, literal) in self.literal_db.last_consequences() {
            the_buffer.clear_literal(*literal);
        }

        match the_buffer.resolve_with(key, &self.literal_db, &mut self.clause_db) {
            Ok(gen::RBuf::FirstUIP) => {}
            Ok(gen::RBuf::Missed(key, literal)) => {
                return Ok(gen::Analysis::MissedImplication(key, literal));
            }
            Ok(gen::RBuf::Exhausted) => {
                log::error!(target: targets::ANALYSIS, "Resolution failed to terminate at an asserting clause");
                return Err(err::Analysis::NoAssertion);
            }
            Err(buffer_error) => {
                return Err(err::Analysis::from(buffer_error));
            }
        }

        self.atom_db.apply_vsids(the_buffer.atoms_used());

        if the_buffer.clause_length() > 2 {
            the_buffer.strengthen_given(self.literal_db.proven_literals().iter());
        }

        let (asserted_literal, mut resolved_clause) = the_buffer.to_assertion_clause();

        let the_literal = match asserted_literal {
            None => {
                log::error!(target: targets::ANALYSIS, "Failed to resolve to an asserting clause");
                return Err(err::Analysis::NoAssertion);
            }
            Some(literal) => literal,
        };

        match resolved_clause.len() {
            0 => Ok(gen::Analysis::UnitClause(the_literal)),
            _ => {
                // The asserting literal leads, to become the first watch.
                resolved_clause.insert(0, the_literal);

                let key =
                    self.clause_db
                        .store(resolved_clause, src::Clause::Resolution, &self.atom_db)?;
                self.atom_db.jw_note_clause(self.clause_db.get_db_clause(key)?);

                Ok(gen::Analysis::AssertingClause(key, the_literal))
            }
        }
    }
}
