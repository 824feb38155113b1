pub mod atom;
pub mod clause;
pub mod consequence_q;
pub mod keys;
pub mod literal;
