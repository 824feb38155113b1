/// An atom, aka. a propositional variable.
///
/// Atoms are dense and zero-based, so an atom doubles as an index into the atom database.
/// The external DIMACS variable `v` corresponds to the atom `v - 1`.
pub type Atom = u32;
