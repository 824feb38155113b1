mod activity;
mod jeroslow_wang;
pub mod watch_db;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config, Heuristic},
    db::{atom::watch_db::WatchDB, keys::LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        valuation::{vValuation, Valuation},
    },
    types::gen::{self},
};

/// Everything about atoms: the valuation, decision levels, saved phases, watch
/// lists, and the activity used to order choices.
pub struct AtomDB {
    watch_dbs: Vec<WatchDB>,

    activity_heap: IndexHeap<Activity>,
    jw_positive: Vec<Activity>,
    jw_negative: Vec<Activity>,

    valuation: vValuation,
    previous_valuation: Vec<bool>,
    choice_indices: Vec<Option<LevelIndex>>,

    heuristic: Heuristic,
    config: AtomDBConfig,
}

impl AtomDB {
    pub fn new(config: &Config) -> Self {
        AtomDB {
            watch_dbs: Vec::default(),

            activity_heap: IndexHeap::default(),
            jw_positive: Vec::default(),
            jw_negative: Vec::default(),

            valuation: Vec::default(),
            previous_valuation: Vec::default(),
            choice_indices: Vec::default(),

            heuristic: config.heuristic,
            config: config.atom_db.clone(),
        }
    }

    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// Extend the database with a fresh atom, unvalued, with a negative saved
    /// phase and no activity.
    pub fn fresh_atom(&mut self) -> Atom {
        let the_atom = self.watch_dbs.len() as Atom;

        self.activity_heap.add(the_atom as usize, Activity::default());
        self.activity_heap.activate(the_atom as usize);
        self.jw_positive.push(Activity::default());
        self.jw_negative.push(Activity::default());

        self.watch_dbs.push(WatchDB::new());
        self.valuation.push(None);
        self.previous_valuation.push(false);
        self.choice_indices.push(None);

        the_atom
    }
}

impl AtomDB {
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        unsafe { *self.valuation.get_unchecked(atom as usize) }
    }

    pub fn previous_value_of(&self, atom: Atom) -> bool {
        unsafe { *self.previous_valuation.get_unchecked(atom as usize) }
    }

    pub fn choice_index_of(&self, atom: Atom) -> Option<LevelIndex> {
        unsafe { *self.choice_indices.get_unchecked(atom as usize) }
    }

    pub fn set_value(
        &mut self,
        atom: Atom,
        polarity: bool,
        level: Option<LevelIndex>,
    ) -> Result<gen::Value, gen::Value> {
        match self.value_of(atom) {
            None => unsafe {
                *self.valuation.get_unchecked_mut(atom as usize) = Some(polarity);
                *self.choice_indices.get_unchecked_mut(atom as usize) = level;
                Ok(gen::Value::NotSet)
            },
            Some(value) if value == polarity => Ok(gen::Value::Match),
            Some(_) => Err(gen::Value::Conflict),
        }
    }

    /// Unset an atom, saving its phase and returning it to the choice heap.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared: {atom}");
        unsafe {
            if let Some(value) = self.value_of(atom) {
                *self.previous_valuation.get_unchecked_mut(atom as usize) = value;
            }
            *self.valuation.get_unchecked_mut(atom as usize) = None;
            *self.choice_indices.get_unchecked_mut(atom as usize) = None;
        }
        self.activity_heap.activate(atom as usize);
    }

    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }
}
