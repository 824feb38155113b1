use crate::structures::literal::Literal;

/// A clause as a vector of literals, read disjunctively.
#[allow(non_camel_case_types)]
pub type vClause = Vec<Literal>;

pub trait Clause {
    fn size(&self) -> usize;

    fn literals(&self) -> impl Iterator<Item = &Literal>;

    /// The clause as a DIMACS body line, terminated by zero.
    fn as_dimacs(&self) -> String;
}

impl Clause for [Literal] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter()
    }

    fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        the_string.push('0');
        the_string
    }
}

impl Clause for vClause {
    fn size(&self) -> usize {
        self.as_slice().size()
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.as_slice().iter()
    }

    fn as_dimacs(&self) -> String {
        self.as_slice().as_dimacs()
    }
}
