//! Determines the satisfiability of the formula in a context.
//!
//! The driver sequences the other procedures:
//! propagate, and when nothing remains to propagate make a choice; on a
//! conflict take the clause learnt by analysis, jump back to the level where
//! the clause asserts its literal, and queue the literal; from time to time
//! restart, and perhaps trim the learnt clauses.

use crate::{
    config::RestartPolicy,
    context::GenericContext,
    procedures::{
        apply_consequences::{self},
        choice::{self},
    },
    types::{
        err::{self},
        gen::{src, Report},
    },
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn solve(&mut self) -> Result<Report, err::Context> {
        let this_total_time = std::time::Instant::now();

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            log::trace!("Iteration {}", self.counters.total_iterations);

            self.counters.time = this_total_time.elapsed();
            if self
                .config
                .time_limit
                .is_some_and(|limit| self.counters.time > limit)
            {
                return Ok(Report::Unknown);
            }
            if self
                .config
                .conflict_limit
                .is_some_and(|limit| self.counters.total_conflicts >= limit)
            {
                return Ok(Report::Unknown);
            }

            let conflict_found;

            match self.apply_consequences()? {
                apply_consequences::Ok::FundamentalConflict => break 'solve_loop,

                apply_consequences::Ok::UnitClause(literal) => {
                    self.backjump(0);

                    self.q_literal(literal)?;
                    self.literal_db.record_literal(literal, src::Literal::Unit);

                    conflict_found = true;
                }

                apply_consequences::Ok::AssertingClause(key, literal) => {
                    let the_clause = self.clause_db.get_db_clause(key)?;
                    let index = self.backjump_level(the_clause)?;
                    self.backjump(index);

                    self.clause_db.note_use(key);
                    self.q_literal(literal)?;
                    self.literal_db.record_literal(literal, src::Literal::BCP(key));

                    conflict_found = true;
                }

                apply_consequences::Ok::Exhausted => {
                    match self.make_choice()? {
                        choice::Ok::Made => continue 'solve_loop,
                        choice::Ok::Exhausted => break 'solve_loop,
                    }
                }
            }

            if conflict_found {
                self.counters.total_conflicts += 1;
                self.counters.fresh_conflicts += 1;

                if self.config.switch.restart && self.restart_scheduled() {
                    self.restart();
                }

                if let Some(interval) = self.config.scheduler.conflict {
                    if self.counters.total_conflicts % (interval as usize) == 0 {
                        self.clause_db
                            .reduce_by(self.clause_db.current_addition_count() / 2)?;
                    }
                }
            }
        }

        Ok(self.report())
    }

    /// Forget all choices, keeping the learnt clauses and every activity.
    pub fn restart(&mut self) {
        self.backjump(0);
        self.clause_db.refresh_heap();
        if let RestartPolicy::Luby(_) = self.config.restart_policy {
            self.counters.luby.next();
        }
        self.counters.restarts += 1;
        self.counters.fresh_conflicts = 0;
    }

    #[inline(always)]
    pub fn restart_scheduled(&self) -> bool {
        match self.config.restart_policy {
            RestartPolicy::Fixed(interval) => self.counters.fresh_conflicts >= interval,
            RestartPolicy::Luby(unit) => {
                self.counters.fresh_conflicts >= unit.saturating_mul(self.counters.luby.current())
            }
        }
    }
}
