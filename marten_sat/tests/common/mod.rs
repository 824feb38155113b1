#![allow(dead_code)]

use marten_sat::{
    config::Config,
    context::Context,
    structures::{atom::Atom, literal::Literal},
    types::err,
};

/// A context holding the given clauses, written as signed external variables.
pub fn context_with(clauses: &[Vec<i64>], config: Config) -> Result<Context, err::Build> {
    let mut the_context = Context::from_config(config);

    let top = clauses
        .iter()
        .flat_map(|clause| clause.iter().map(|value| value.unsigned_abs()))
        .max()
        .unwrap_or(0);
    the_context.fresh_atoms_to(top as Atom);

    for clause in clauses {
        let the_clause = clause
            .iter()
            .map(|value| Literal::fresh((value.unsigned_abs() - 1) as Atom, *value > 0))
            .collect::<Vec<_>>();
        the_context.add_clause(the_clause)?;
    }

    Ok(the_context)
}

/// Whether the assignment satisfies every clause.
///
/// The assignment is in the form returned by a context: the signed external
/// variable for each atom, in variable order.
pub fn satisfies(clauses: &[Vec<i64>], assignment: &[i32]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|value| assignment[(value.unsigned_abs() - 1) as usize] as i64 == *value)
    })
}
