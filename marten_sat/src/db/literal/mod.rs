mod level;

pub use level::Level;

use crate::{
    db::keys::LevelIndex,
    structures::literal::Literal,
    types::gen::src,
};

/// The trail, abstracted over decision levels.
///
/// Level zero holds proven literals: unit clauses from the formula and anything
/// else settled without a choice. Each level above is a choice together with the
/// observed consequences of that choice.
pub struct LiteralDB {
    proven: Vec<Literal>,
    choice_stack: Vec<Level>,
}

impl LiteralDB {
    pub fn new() -> Self {
        LiteralDB {
            proven: Vec::default(),
            choice_stack: Vec::default(),
        }
    }
}

impl Default for LiteralDB {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralDB {
    pub fn note_choice(&mut self, choice: Literal) {
        self.choice_stack.push(Level::new(choice));
    }

    /// Record a literal against the current level, or as proven when no choice
    /// has been made.
    pub fn record_literal(&mut self, literal: Literal, source: src::Literal) {
        match source {
            // The choice is noted when its level is created.
            src::Literal::Choice => {}

            src::Literal::BCP(_) => match self.choice_stack.len() {
                0 => self.proven.push(literal),
                _ => self.top_mut().record_consequence(literal, source),
            },

            src::Literal::Unit => self.proven.push(literal),
        }
    }

    pub fn last_choice(&self) -> Literal {
        unsafe {
            self.choice_stack
                .get_unchecked(self.choice_stack.len() - 1)
                .choice()
        }
    }

    pub fn last_consequences(&self) -> &[(src::Literal, Literal)] {
        unsafe {
            self.choice_stack
                .get_unchecked(self.choice_stack.len() - 1)
                .consequences()
        }
    }

    pub fn forget_last_choice(&mut self) {
        self.choice_stack.pop();
    }

    pub fn choice_made(&self) -> bool {
        !self.choice_stack.is_empty()
    }

    pub fn choice_count(&self) -> LevelIndex {
        self.choice_stack.len() as LevelIndex
    }

    pub fn proven_literals(&self) -> &[Literal] {
        &self.proven
    }
}

impl LiteralDB {
    fn top_mut(&mut self) -> &mut Level {
        let last_choice_index = self.choice_stack.len() - 1;
        unsafe { self.choice_stack.get_unchecked_mut(last_choice_index) }
    }
}
