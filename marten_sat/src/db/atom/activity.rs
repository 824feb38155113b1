use crate::{config::Heuristic, db::atom::AtomDB, structures::atom::Atom};

impl AtomDB {
    /// Bump the activity of each given atom and decay the increment.
    ///
    /// A quiet no-op unless the context is using VSIDS, as the heap otherwise
    /// holds Jeroslow-Wang scores.
    pub fn apply_vsids(&mut self, atoms: impl Iterator<Item = Atom>) {
        if self.heuristic != Heuristic::Vsids {
            return;
        }

        for atom in atoms {
            self.bump_activity(atom);
        }
        self.decay_increment();
    }
}

impl AtomDB {
    /// Add the increment to an atom's activity, rescoring everything once the
    /// ceiling is crossed.
    fn bump_activity(&mut self, atom: Atom) {
        let index = atom as usize;
        let bumped = self.activity_heap.value_at(index) + self.config.bump;
        self.activity_heap.revalue(index, bumped);
        self.activity_heap.heapify_if_active(index);

        if bumped > self.config.max_bump {
            self.rescore_activity();
        }
    }

    // Scaling every activity and the increment by the same constant preserves
    // relative order while making room for further bumps.
    fn rescore_activity(&mut self) {
        let ceiling = self.config.max_bump;
        self.activity_heap.apply_to_all(|activity| activity / ceiling);
        self.config.bump /= ceiling;
        self.activity_heap.reheap();
    }

    // Growing the increment is equivalent to decaying every activity.
    fn decay_increment(&mut self) {
        self.config.bump /= 1.0 - self.config.decay * 1e-3;
    }
}
