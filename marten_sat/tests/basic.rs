mod common;

use std::io::BufReader;

use marten_sat::{
    config::Config,
    context::Context,
    types::{err, gen::Report},
};

fn context() -> Context {
    Context::from_config(Config::default())
}

#[test]
fn empty_formula_is_satisfiable() {
    let mut the_context = context();
    let dimacs = "p cnf 3 0\n";
    assert!(the_context.read_dimacs(BufReader::new(dimacs.as_bytes())).is_ok());
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    assert_eq!(the_context.assignment().len(), 3);
}

#[test]
fn empty_clause_is_unsatisfiable() {
    let mut the_context = context();
    let dimacs = "p cnf 1 1\n0\n";
    let result = the_context.read_dimacs(BufReader::new(dimacs.as_bytes()));
    assert!(matches!(
        result,
        Err(err::Build::ClauseDB(err::ClauseDB::EmptyClause))
    ));
}

#[test]
fn conflicting_units_refute_while_loading() {
    let mut the_context = context();
    assert!(the_context.add_clause_string("1").is_ok());
    let result = the_context.add_clause_string("-1");
    assert!(matches!(
        result,
        Err(err::Build::ClauseDB(err::ClauseDB::ImmediateConflict))
    ));
}

#[test]
fn duplicate_literals_merge() {
    let mut the_context = context();
    assert!(the_context.add_clause_string("1 1 2").is_ok());
    let database = the_context.clause_database();
    assert_eq!(database.len(), 1);
    assert_eq!(database.first().map(String::as_str), Some("1 2 0"));
}

#[test]
fn tautologies_are_dropped() {
    let mut the_context = context();
    assert!(the_context.add_clause_string("1 -1 2").is_ok());
    assert!(the_context.clause_database().is_empty());

    assert!(the_context.add_clause_string("2 3").is_ok());
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
}

#[test]
fn excluded_middle_is_unsatisfiable() {
    let mut the_context = context();
    for clause in ["1 2", "-1 -2", "1 -2", "-1 2"] {
        assert!(the_context.add_clause_string(clause).is_ok());
    }
    assert!(the_context.solve().is_ok());
    assert_eq!(the_context.report(), Report::Unsatisfiable);
}

#[test]
fn three_clauses_satisfied() {
    let clauses: Vec<Vec<i64>> = vec![vec![1, 2, -3], vec![-1, -2, 3], vec![2, 3]];
    let mut the_context =
        common::context_with(&clauses, Config::default()).expect("failed to load");

    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    assert!(common::satisfies(&clauses, &the_context.assignment()));
}

#[test]
fn chain_formula_satisfied() {
    let clauses: Vec<Vec<i64>> = vec![vec![1, 2], vec![-1, 3], vec![-2, 4], vec![-3, -4]];
    let mut the_context =
        common::context_with(&clauses, Config::default()).expect("failed to load");

    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    assert!(common::satisfies(&clauses, &the_context.assignment()));
}

#[test]
fn resolve_after_clearing_choices() {
    let clauses: Vec<Vec<i64>> = vec![vec![1, 2], vec![-1, 3], vec![-2, 4], vec![-3, -4]];
    let mut the_context =
        common::context_with(&clauses, Config::default()).expect("failed to load");
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    let first_assignment = the_context.assignment();

    the_context.clear_choices();
    let blocking_clause: Vec<i64> = first_assignment.iter().map(|value| -(*value as i64)).collect();
    match the_context.add_clause_string(
        &blocking_clause
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    ) {
        Err(_) => {}
        Ok(()) => match the_context.solve() {
            Ok(Report::Satisfiable) => {
                let second_assignment = the_context.assignment();
                assert_ne!(first_assignment, second_assignment);
                assert!(common::satisfies(&clauses, &second_assignment));
            }
            Ok(Report::Unsatisfiable) => {}
            other => panic!("unexpected result {other:?}"),
        },
    }
}

#[test]
fn negated_assignment_forces_a_different_assignment() {
    let clauses: Vec<Vec<i64>> = vec![vec![1, 2, -3], vec![-1, -2, 3], vec![2, 3]];
    let mut the_context =
        common::context_with(&clauses, Config::default()).expect("failed to load");
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    let first_assignment = the_context.assignment();

    let blocking_clause = first_assignment.iter().map(|value| -(*value as i64)).collect();
    let mut blocked_clauses = clauses.clone();
    blocked_clauses.push(blocking_clause);

    match common::context_with(&blocked_clauses, Config::default()) {
        Err(_) => {}
        Ok(mut blocked_context) => match blocked_context.solve() {
            Ok(Report::Satisfiable) => {
                let second_assignment = blocked_context.assignment();
                assert_ne!(first_assignment, second_assignment);
                assert!(common::satisfies(&clauses, &second_assignment));
            }
            Ok(Report::Unsatisfiable) => {}
            other => panic!("unexpected result {other:?}"),
        },
    }
}
