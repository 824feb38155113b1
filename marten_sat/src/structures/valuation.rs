use crate::structures::atom::Atom;

/// A valuation as a vector of optional truth values, indexed by atom.
#[allow(non_camel_case_types)]
pub type vValuation = Vec<Option<bool>>;

pub trait Valuation {
    /// The value given to an atom, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The values of all atoms, in atom order.
    fn values(&self) -> impl Iterator<Item = Option<bool>> + '_;

    /// The atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_;

    fn atom_count(&self) -> usize;
}

impl Valuation for vValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        unsafe { *self.get_unchecked(atom as usize) }
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        self.iter().copied()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter().enumerate().filter_map(|(index, value)| match value {
            None => Some(index as Atom),
            Some(_) => None,
        })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
