use std::borrow::Borrow;

use crate::{structures::literal::Literal, types::gen::src};

/// A choice/decision level.
///
/// In other words, a choice and the *observed* consequences of that choice,
/// given prior choices and observed consequences.
pub struct Level {
    choice: Literal,
    consequences: Vec<(src::Literal, Literal)>,
}

impl Level {
    /// A new level from some choice, with no recorded consequences.
    pub fn new(choice: Literal) -> Self {
        Self {
            choice,
            consequences: vec![],
        }
    }

    pub fn choice(&self) -> Literal {
        self.choice
    }

    pub fn consequences(&self) -> &[(src::Literal, Literal)] {
        &self.consequences
    }

    /// Records a literal consequence of the level from some source.
    ///
    /// No effort is made to check the literal is really a consequence.
    pub fn record_consequence(&mut self, literal: impl Borrow<Literal>, source: src::Literal) {
        self.consequences.push((source, *literal.borrow()))
    }
}
