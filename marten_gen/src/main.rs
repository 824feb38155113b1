//! Generates random CNF formulas in DIMACS form.
//!
//! Each clause samples distinct variables without replacement, signed by a fair
//! coin. Each generated file leads with a comment noting whether the formula is
//! satisfiable, as decided by solving the formula before it is written, and a
//! satisfying assignment where one exists.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::exit,
};

use clap::{value_parser, Arg, Command};
use rand::{rngs::StdRng, Rng, SeedableRng};

use marten_sat::{
    config::Config,
    context::Context,
    structures::{atom::Atom, literal::Literal},
    types::gen::Report,
};

fn cli() -> Command {
    Command::new("marten_gen")
        .about("Generates random CNF formulas, each labelled with its satisfiability")
        .arg(Arg::new("num_vars")
            .required(true)
            .value_parser(value_parser!(u32).range(1..))
            .help("Number of variables"))
        .arg(Arg::new("num_clauses")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("Number of clauses"))
        .arg(Arg::new("min_len")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("Minimum length of each clause"))
        .arg(Arg::new("max_len")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("Maximum length of each clause"))
        .arg(Arg::new("num_files")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("Number of files to generate"))
        .arg(Arg::new("dir")
            .long("dir")
            .value_parser(value_parser!(PathBuf))
            .default_value("tests")
            .help("The directory to write the files to"))
        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .help("A seed, for reproducible formulas"))
}

fn main() {
    let matches = cli().get_matches();

    let num_vars = *matches.get_one::<u32>("num_vars").unwrap_or(&0);
    let num_clauses = *matches.get_one::<usize>("num_clauses").unwrap_or(&0);
    let min_len = *matches.get_one::<usize>("min_len").unwrap_or(&0);
    let max_len = *matches.get_one::<usize>("max_len").unwrap_or(&0);
    let num_files = *matches.get_one::<usize>("num_files").unwrap_or(&0);

    if min_len == 0 || min_len > max_len || max_len > num_vars as usize {
        eprintln!("c Clause lengths must satisfy 0 < min_len <= max_len <= num_vars");
        exit(1);
    }

    let directory = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("tests"));
    if let Err(e) = std::fs::create_dir_all(&directory) {
        eprintln!("c Could not create {}: {e}", directory.display());
        exit(1);
    }

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    for file_index in 1..=num_files {
        let clauses = random_formula(num_vars, num_clauses, min_len, max_len, &mut rng);
        let (report, solution) = oracle(num_vars, &clauses);

        let path = directory.join(format!("test{file_index}.cnf"));
        match write_formula(&path, num_vars, &clauses, report, solution) {
            Ok(()) => println!("SAT instance generated and saved to {}", path.display()),
            Err(e) => {
                eprintln!("c Could not write {}: {e}", path.display());
                exit(1);
            }
        }
    }
}

fn random_formula(
    num_vars: u32,
    num_clauses: usize,
    min_len: usize,
    max_len: usize,
    rng: &mut StdRng,
) -> Vec<Vec<i64>> {
    (0..num_clauses)
        .map(|_| {
            let length = rng.gen_range(min_len..=max_len);
            rand::seq::index::sample(rng, num_vars as usize, length)
                .iter()
                .map(|index| {
                    let variable = (index + 1) as i64;
                    match rng.gen_bool(0.5) {
                        true => variable,
                        false => -variable,
                    }
                })
                .collect()
        })
        .collect()
}

/// Decide the formula, returning the report and a satisfying assignment if one
/// was found.
fn oracle(num_vars: u32, clauses: &[Vec<i64>]) -> (Report, Option<String>) {
    let mut the_context = Context::from_config(Config::default());
    the_context.fresh_atoms_to(num_vars);

    for clause in clauses {
        let the_clause = clause
            .iter()
            .map(|value| Literal::fresh((value.unsigned_abs() - 1) as Atom, *value > 0))
            .collect::<Vec<_>>();
        if the_context.add_clause(the_clause).is_err() {
            // Refuted while loading.
            return (Report::Unsatisfiable, None);
        }
    }

    match the_context.solve() {
        Ok(Report::Satisfiable) => {
            let solution = the_context
                .assignment()
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            (Report::Satisfiable, Some(format!("{solution} 0")))
        }
        Ok(report) => (report, None),
        Err(e) => {
            eprintln!("c Oracle error: {e:?}");
            exit(1);
        }
    }
}

fn write_formula(
    path: &PathBuf,
    num_vars: u32,
    clauses: &[Vec<i64>],
    report: Report,
    solution: Option<String>,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    match report {
        Report::Satisfiable => writeln!(writer, "c SATISFIABLE")?,
        Report::Unsatisfiable => writeln!(writer, "c UNSATISFIABLE")?,
        Report::Unknown => writeln!(writer, "c UNKNOWN")?,
    }
    if let Some(solution) = solution {
        writeln!(writer, "c Solution: {solution}")?;
    }

    writeln!(writer, "p cnf {num_vars} {}", clauses.len())?;
    for clause in clauses {
        let body = clause
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{body} 0")?;
    }

    writer.flush()
}
