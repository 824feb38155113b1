mod common;

use rand::{rngs::StdRng, Rng, SeedableRng};

use marten_sat::{
    config::{Config, Heuristic, RestartPolicy},
    types::gen::Report,
};

const ATOMS: u64 = 20;
// Clause to variable ratio of 4.25 sits near the satisfiability threshold.
const CLAUSES: usize = 85;

/// A uniform random 3-SAT formula: three distinct variables a clause, each
/// signed by a fair coin.
fn uniform_random_3_sat(seed: u64) -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..CLAUSES)
        .map(|_| {
            let mut variables = vec![];
            while variables.len() < 3 {
                let variable = rng.gen_range(1..=ATOMS) as i64;
                if !variables.contains(&variable) {
                    variables.push(variable);
                }
            }
            variables
                .into_iter()
                .map(|variable| match rng.gen_bool(0.5) {
                    true => variable,
                    false => -variable,
                })
                .collect()
        })
        .collect()
}

fn report_with(clauses: &[Vec<i64>], config: Config) -> (Report, Vec<i32>) {
    match common::context_with(clauses, config) {
        Err(_) => (Report::Unsatisfiable, vec![]),
        Ok(mut the_context) => {
            let report = the_context.solve().expect("solve failed");
            (report, the_context.assignment())
        }
    }
}

#[test]
fn models_satisfy_their_formulas() {
    let mut satisfiable_count = 0;
    for seed in 0..50 {
        let clauses = uniform_random_3_sat(seed);
        let (report, assignment) = report_with(&clauses, Config::default());
        if report == Report::Satisfiable {
            satisfiable_count += 1;
            assert!(common::satisfies(&clauses, &assignment));
        }
    }
    // Near the threshold a fair share of instances are satisfiable.
    assert!(satisfiable_count > 0);
}

#[test]
fn heuristics_agree_on_status() {
    for seed in 0..25 {
        let clauses = uniform_random_3_sat(seed);

        let (vsids_report, _) = report_with(&clauses, Config::default());

        let jw_config = Config {
            heuristic: Heuristic::JeroslowWang,
            restart_policy: RestartPolicy::Fixed(100),
            ..Config::default()
        };
        let (jw_report, jw_assignment) = report_with(&clauses, jw_config);

        assert_eq!(vsids_report, jw_report);
        if jw_report == Report::Satisfiable {
            assert!(common::satisfies(&clauses, &jw_assignment));
        }
    }
}

#[test]
fn repeated_solves_are_identical() {
    for seed in 0..25 {
        let clauses = uniform_random_3_sat(seed);

        let (first_report, first_assignment) = report_with(&clauses, Config::default());
        let (second_report, second_assignment) = report_with(&clauses, Config::default());

        assert_eq!(first_report, second_report);
        assert_eq!(first_assignment, second_assignment);
    }
}

#[test]
fn negated_models_are_excluded() {
    for seed in 0..25 {
        let clauses = uniform_random_3_sat(seed);
        let (report, assignment) = report_with(&clauses, Config::default());
        if report != Report::Satisfiable {
            continue;
        }

        let mut blocked_clauses = clauses.clone();
        blocked_clauses.push(assignment.iter().map(|value| -(*value as i64)).collect());

        let (blocked_report, blocked_assignment) = report_with(&blocked_clauses, Config::default());
        match blocked_report {
            Report::Unsatisfiable => {}
            Report::Satisfiable => {
                assert_ne!(assignment, blocked_assignment);
                assert!(common::satisfies(&clauses, &blocked_assignment));
            }
            Report::Unknown => panic!("no budget was set"),
        }
    }
}
