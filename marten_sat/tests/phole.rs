mod common;

use marten_sat::{
    config::{Config, Heuristic, ReductionScheduler, RestartPolicy},
    types::gen::Report,
};

/// The pigeonhole principle for `pigeons` pigeons and `holes` holes:
/// every pigeon is in some hole, and no two pigeons share a hole.
/// Unsatisfiable whenever there are more pigeons than holes.
fn pigeonhole(pigeons: u64, holes: u64) -> Vec<Vec<i64>> {
    let var = |pigeon: u64, hole: u64| (1 + pigeon * holes + hole) as i64;

    let mut clauses = vec![];
    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| var(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                clauses.push(vec![-var(first, hole), -var(second, hole)]);
            }
        }
    }
    clauses
}

fn report_with(clauses: &[Vec<i64>], config: Config) -> Report {
    let mut the_context = match common::context_with(clauses, config) {
        Ok(context) => context,
        Err(_) => return Report::Unsatisfiable,
    };
    the_context.solve().expect("solve failed")
}

#[test]
fn two_pigeons_fit() {
    let clauses = pigeonhole(2, 2);
    let mut the_context =
        common::context_with(&clauses, Config::default()).expect("failed to load");
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    assert!(common::satisfies(&clauses, &the_context.assignment()));
}

#[test]
fn three_pigeons_two_holes() {
    assert_eq!(
        report_with(&pigeonhole(3, 2), Config::default()),
        Report::Unsatisfiable
    );
}

#[test]
fn four_pigeons_three_holes() {
    assert_eq!(
        report_with(&pigeonhole(4, 3), Config::default()),
        Report::Unsatisfiable
    );
}

#[test]
fn four_pigeons_three_holes_jeroslow_wang() {
    let config = Config {
        heuristic: Heuristic::JeroslowWang,
        ..Config::default()
    };
    assert_eq!(report_with(&pigeonhole(4, 3), config), Report::Unsatisfiable);
}

#[test]
fn four_pigeons_three_holes_fixed_restarts() {
    let config = Config {
        restart_policy: RestartPolicy::Fixed(100),
        ..Config::default()
    };
    assert_eq!(report_with(&pigeonhole(4, 3), config), Report::Unsatisfiable);
}

#[test]
fn five_pigeons_four_holes_with_reduction() {
    let config = Config {
        scheduler: ReductionScheduler { conflict: Some(50) },
        ..Config::default()
    };
    assert_eq!(report_with(&pigeonhole(5, 4), config), Report::Unsatisfiable);
}
