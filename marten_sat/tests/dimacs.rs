mod common;

use std::{collections::BTreeSet, io::BufReader};

use marten_sat::{
    config::Config,
    context::Context,
    types::{err, gen::Report},
};

fn context() -> Context {
    Context::from_config(Config::default())
}

fn read(dimacs: &str) -> (Context, Result<(), err::Build>) {
    let mut the_context = context();
    let result = the_context.read_dimacs(BufReader::new(dimacs.as_bytes()));
    (the_context, result)
}

/// Lines of a clause database as a set of sorted literal sets, for comparison
/// regardless of clause or literal order.
fn canonical(database: &[String]) -> BTreeSet<BTreeSet<i64>> {
    database
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|item| item.parse::<i64>().expect("non-numeric database line"))
                .take_while(|value| *value != 0)
                .collect()
        })
        .collect()
}

#[test]
fn missing_problem_line() {
    let (_, result) = read("c only a comment\n");
    assert_eq!(result, Err(err::Build::Parse(err::Parse::MissingProblem)));

    let (_, result) = read("1 2 0\n");
    assert_eq!(result, Err(err::Build::Parse(err::Parse::MissingProblem)));
}

#[test]
fn malformed_problem_line() {
    let (_, result) = read("p cnf two 1\n1 2 0\n");
    assert_eq!(result, Err(err::Build::Parse(err::Parse::Problem(1))));

    let (_, result) = read("p sat 2 1\n1 2 0\n");
    assert_eq!(result, Err(err::Build::Parse(err::Parse::Problem(1))));
}

#[test]
fn variables_outside_the_declaration() {
    let (_, result) = read("p cnf 2 1\n1 3 0\n");
    assert_eq!(result, Err(err::Build::Parse(err::Parse::OutOfBounds(2))));
}

#[test]
fn unreadable_literals() {
    let (_, result) = read("p cnf 2 1\n1 x 0\n");
    assert_eq!(result, Err(err::Build::Parse(err::Parse::Literal(2))));
}

#[test]
fn clauses_span_lines() {
    let (the_context, result) = read("p cnf 3 1\nc a split clause\n1\n2 3 0\n");
    assert!(result.is_ok());

    let database = the_context.clause_database();
    assert_eq!(database.len(), 1);
    assert_eq!(canonical(&database), canonical(&["1 2 3 0".to_string()]));
}

#[test]
fn percent_ends_the_formula() {
    let (the_context, result) = read("p cnf 2 1\n1 2 0\n%\nnot dimacs at all\n");
    assert!(result.is_ok());
    assert_eq!(the_context.clause_database().len(), 1);
}

#[test]
fn comments_are_skipped() {
    let dimacs = "c leading comment\np cnf 2 2\nc between clauses\n1 2 0\nc and after\n-1 2 0\n";
    let (the_context, result) = read(dimacs);
    assert!(result.is_ok());
    assert_eq!(the_context.clause_database().len(), 2);
}

#[test]
fn parse_then_serialise_preserves_the_clause_set() {
    let dimacs = "p cnf 4 3\n1 -2 0\n2 3 -4 0\n-1 4 0\n";
    let (the_context, result) = read(dimacs);
    assert!(result.is_ok());

    let database = the_context.clause_database();

    let reserialised = format!(
        "p cnf {} {}\n{}\n",
        the_context.atom_count(),
        database.len(),
        database.join("\n")
    );
    let (the_recontext, result) = read(&reserialised);
    assert!(result.is_ok());

    assert_eq!(
        canonical(&database),
        canonical(&the_recontext.clause_database())
    );
}

#[test]
fn solve_from_dimacs() {
    let (mut the_context, result) = read("p cnf 3 3\n1 2 -3 0\n-1 -2 3 0\n2 3 0\n");
    assert!(result.is_ok());
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

    let clauses: Vec<Vec<i64>> = vec![vec![1, 2, -3], vec![-1, -2, 3], vec![2, 3]];
    assert!(common::satisfies(&clauses, &the_context.assignment()));
}
