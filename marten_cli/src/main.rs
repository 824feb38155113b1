use std::{fs::File, io::BufReader, path::PathBuf, process::exit};

use marten_sat::{
    context::Context,
    types::{err, gen::Report},
};

mod parse;

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();
    let config = parse::config::config_from_args(&matches);

    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("test.cnf"));

    let mut the_context = Context::from_config(config);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("c Could not open {}: {e}", path.display());
            exit(1);
        }
    };

    match the_context.read_dimacs(BufReader::new(file)) {
        Ok(()) => {}
        // A formula refuted while loading requires no search.
        Err(err::Build::ClauseDB(err::ClauseDB::EmptyClause))
        | Err(err::Build::ClauseDB(err::ClauseDB::ImmediateConflict)) => {
            println!("UNSAT");
            exit(20);
        }
        Err(err::Build::Parse(e)) => {
            eprintln!("c Parse error: {e}");
            exit(1);
        }
        Err(e) => {
            eprintln!("c Error loading DIMACS: {e:?}");
            exit(1);
        }
    };

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Context error: {e:?}");
            exit(1);
        }
    };

    match report {
        Report::Satisfiable => {
            println!("SAT");
            let assignment = the_context
                .assignment()
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            match assignment.is_empty() {
                true => println!("0"),
                false => println!("{assignment} 0"),
            }
            exit(10);
        }
        Report::Unsatisfiable => {
            println!("UNSAT");
            exit(20);
        }
        Report::Unknown => {
            println!("UNKNOWN");
            exit(30);
        }
    }
}
