pub mod stored;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config},
    db::{
        atom::AtomDB,
        clause::stored::dbClause,
        keys::{ClauseKey, FormulaIndex},
    },
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        clause::{vClause, Clause},
        literal::Literal,
    },
    types::{
        err::{self},
        gen::{self},
    },
};

/// The clause store, partitioned into unit, original, and learnt clauses.
///
/// Unit clauses are held as literals, as their work is done once queued at level
/// zero. Learnt clause slots are reused after a reduction, with stale keys caught
/// by the token carried in every learnt key.
pub struct ClauseDB {
    counts: ClauseDBCounts,

    empty_keys: Vec<ClauseKey>,

    unit: Vec<Literal>,
    original: Vec<dbClause>,
    learned: Vec<Option<dbClause>>,

    activity_heap: IndexHeap<ReductionPriority>,
    activity_increment: Activity,
    config: ClauseDBConfig,
}

#[derive(Default)]
struct ClauseDBCounts {
    original: FormulaIndex,
    learned: FormulaIndex,
}

/*
Ordering is reversed on activity so the maximum of the heap is the prime
candidate for removal during a reduction.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
struct ReductionPriority {
    activity: Activity,
}

impl Default for ReductionPriority {
    fn default() -> Self {
        ReductionPriority { activity: 1.0 }
    }
}

impl PartialOrd for ReductionPriority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.activity.partial_cmp(&self.activity)
    }
}

impl ClauseDB {
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            counts: ClauseDBCounts::default(),
            empty_keys: Vec::default(),

            unit: Vec::default(),
            original: Vec::default(),
            learned: Vec::default(),

            activity_heap: IndexHeap::default(),
            activity_increment: config.clause_db.bump,
            config: config.clause_db.clone(),
        }
    }
}

impl ClauseDB {
    fn new_original_id(&mut self) -> Result<ClauseKey, err::ClauseDB> {
        if self.counts.original == FormulaIndex::MAX {
            return Err(err::ClauseDB::StorageExhausted);
        }
        let key = ClauseKey::Original(self.counts.original);
        self.counts.original += 1;
        Ok(key)
    }

    fn new_learned_id(&mut self) -> Result<ClauseKey, err::ClauseDB> {
        if self.learned.len() == FormulaIndex::MAX as usize {
            return Err(err::ClauseDB::StorageExhausted);
        }
        Ok(ClauseKey::Learned(self.learned.len() as FormulaIndex, 0))
    }
}

impl ClauseDB {
    /// Store a clause of two or more literals and install its watches.
    pub fn store(
        &mut self,
        clause: vClause,
        source: gen::src::Clause,
        atoms: &AtomDB,
    ) -> Result<ClauseKey, err::ClauseDB> {
        match clause.len() {
            0 => Err(err::ClauseDB::EmptyClause),
            1 => Err(err::ClauseDB::UnitClause),
            _ => match source {
                gen::src::Clause::Original => {
                    let the_key = self.new_original_id()?;
                    self.original.push(dbClause::from(the_key, clause, atoms));
                    Ok(the_key)
                }

                gen::src::Clause::Resolution => {
                    log::trace!(target: targets::CLAUSE_DB, "Learning clause {}", clause.as_dimacs());
                    self.counts.learned += 1;

                    let the_key = match self.empty_keys.pop() {
                        None => self.new_learned_id()?,
                        Some(key) => key.retoken()?,
                    };

                    let the_clause = dbClause::from_asserting(the_key, clause, atoms);
                    let priority = ReductionPriority::default();

                    match the_key {
                        ClauseKey::Learned(_, 0) => {
                            self.activity_heap.add(the_key.index(), priority);
                            self.activity_heap.activate(the_key.index());
                            self.learned.push(Some(the_clause));
                        }
                        ClauseKey::Learned(_, _) => unsafe {
                            self.activity_heap.revalue(the_key.index(), priority);
                            self.activity_heap.activate(the_key.index());
                            *self.learned.get_unchecked_mut(the_key.index()) = Some(the_clause);
                        },
                        ClauseKey::Original(_) => return Err(err::ClauseDB::InvalidKeyToken),
                    };

                    Ok(the_key)
                }
            },
        }
    }

    /// Note a unit clause, proven at level zero.
    pub fn note_unit(&mut self, literal: Literal) {
        self.unit.push(literal);
    }
}

impl ClauseDB {
    pub fn get_db_clause(&self, key: ClauseKey) -> Result<&dbClause, err::ClauseDB> {
        match key {
            ClauseKey::Original(index) => unsafe {
                Ok(self.original.get_unchecked(index as usize))
            },
            ClauseKey::Learned(index, token) => unsafe {
                match self.learned.get_unchecked(index as usize) {
                    Some(clause) => match clause.key() {
                        ClauseKey::Learned(_, clause_token) if clause_token == token => Ok(clause),
                        _ => Err(err::ClauseDB::InvalidKeyToken),
                    },
                    None => Err(err::ClauseDB::InvalidKeyIndex),
                }
            },
        }
    }

    /// A mutable borrow of a stored clause, or nothing for keys whose clause has
    /// been deleted. Propagation uses the miss to sweep stale keys from a watch
    /// list.
    pub fn get_db_clause_mut(&mut self, key: ClauseKey) -> Option<&mut dbClause> {
        match key {
            ClauseKey::Original(index) => self.original.get_mut(index as usize),
            ClauseKey::Learned(index, token) => match self.learned.get_mut(index as usize) {
                Some(Some(clause)) => match clause.key() {
                    ClauseKey::Learned(_, clause_token) if clause_token == token => Some(clause),
                    _ => None,
                },
                _ => None,
            },
        }
    }
}

// Activity and reduction

impl ClauseDB {
    /// Shield a clause from reduction while it is of use, e.g. as the reason for
    /// an assignment on the trail.
    pub fn note_use(&mut self, key: ClauseKey) {
        match key {
            ClauseKey::Learned(index, _) => {
                self.activity_heap.remove(index as usize);
            }
            ClauseKey::Original(_) => {}
        }
    }

    /// Return every stored learnt clause to the pool of reduction candidates.
    pub fn refresh_heap(&mut self) {
        for (index, slot) in self.learned.iter().enumerate() {
            if slot.is_some() {
                self.activity_heap.activate(index);
            }
        }
        self.activity_heap.reheap();
    }

    pub fn bump_activity(&mut self, index: FormulaIndex) {
        let index = index as usize;

        let activity = self.activity_heap.value_at(index).activity;
        if activity + self.activity_increment > self.config.max_bump {
            let factor = 1.0 / activity;
            let decay_activity = |p: &ReductionPriority| ReductionPriority {
                activity: p.activity * factor,
            };
            self.activity_heap.apply_to_all(decay_activity);
            self.activity_increment *= factor;
        }

        let increment = self.activity_increment;
        let bump_activity = |p: &ReductionPriority| ReductionPriority {
            activity: p.activity + increment,
        };
        self.activity_heap.apply_to_index(index, bump_activity);
        self.activity_heap.heapify_if_active(index);

        let factor = 1.0 / (1.0 - self.config.decay * 1e-3);
        self.activity_increment *= factor;
    }

    /// Delete up to `count` learnt clauses, least active first.
    pub fn reduce_by(&mut self, count: usize) -> Result<(), err::ClauseDB> {
        let before = self.counts.learned;

        for _ in 0..count {
            match self.activity_heap.peek_max() {
                Some(index) => self.remove_from_learned(index)?,
                None => break,
            }
        }

        log::debug!(target: targets::REDUCTION, "Learnt clauses reduced from {before} to {}", self.counts.learned);
        Ok(())
    }

    /*
    Elements of the learnt store are optional to allow the slot to be reused, so
    removal places a None at the index, as would be needed anyway.
    */
    fn remove_from_learned(&mut self, index: usize) -> Result<(), err::ClauseDB> {
        if unsafe { self.learned.get_unchecked(index) }.is_none() {
            log::error!(target: targets::CLAUSE_DB, "Attempt to remove a clause which is not there");
            Err(err::ClauseDB::MissingLearned)
        } else {
            let the_clause =
                std::mem::take(unsafe { self.learned.get_unchecked_mut(index) }).ok_or(err::ClauseDB::MissingLearned)?;
            log::trace!(target: targets::REDUCTION, "Forgot {the_clause}");

            self.activity_heap.remove(index);
            self.empty_keys.push(the_clause.key());
            self.counts.learned -= 1;
            Ok(())
        }
    }
}

impl ClauseDB {
    pub fn current_addition_count(&self) -> usize {
        self.counts.learned as usize
    }

    pub fn clause_count(&self) -> usize {
        self.unit.len() + (self.counts.original + self.counts.learned) as usize
    }

    pub fn unit_clauses(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.unit.iter()
    }

    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> + '_ {
        self.original.iter().chain(
            self.learned
                .iter()
                .flat_map(|maybe_clause| maybe_clause.as_ref()),
        )
    }
}
