use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

use marten_sat::config::{self, Heuristic};

pub fn cli() -> Command {
    Command::new("marten_sat")
        .about("Determines whether a DIMACS CNF formula is satisfiable or unsatisfiable")

        .arg(Arg::new("path")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS CNF file to solve.
Defaults to 'test.cnf' in the working directory."))

        .arg(Arg::new("heuristic")
            .long("heuristic")
            .short('H')
            .value_name("HEURISTIC")
            .value_parser(clap::builder::ValueParser::new(heuristic_parser))
            .required(false)
            .num_args(1)
            .help(format!("The heuristic used to choose an atom.
Default: {}

  - vsids        : Activity from conflicts, decayed over time
  - jeroslow-wang: Literal scores of 2^(-length) summed over clauses", config::defaults::HEURISTIC)))

        .arg(Arg::new("luby")
            .long("luby")
            .short('l')
            .value_name("U")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("Restart on conflict counts paced by the luby sequence, scaled by the given unit.
Default: {}", config::defaults::LUBY_U)))

        .arg(Arg::new("restart_interval")
            .long("restart-interval")
            .value_name("CONFLICTS")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .conflicts_with("luby")
            .help(format!("Restart each time the given count of conflicts is reached.
A fixed alternative to the luby pacing, e.g. {}.", config::defaults::FIXED_RESTART_INTERVAL)))

        .arg(Arg::new("no_restarts")
            .long("no-restart")
            .action(clap::ArgAction::SetTrue)
            .help("Prevent choices from being forgotten."))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .action(clap::ArgAction::SetTrue)
            .help("Polarise choices by a coin weighted to the polarity lean rather than the saved phase."))

        .arg(Arg::new("reduction_interval")
            .long("reduction-interval")
            .value_name("CONFLICTS")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help("The interval, in conflicts, at which to reduce the learnt clause database.
Learnt clauses are kept forever unless an interval is given."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_name("LEAN")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The chance of assigning positive polarity when no phase is saved.
Default: {}", config::defaults::POLARITY_LEAN)))

        .arg(Arg::new("random_choice_frequency")
            .long("random-choice-frequency")
            .short('r')
            .value_name("FREQUENCY")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The chance of making a random choice rather than taking the most active atom.
Default: {}", config::defaults::RANDOM_CHOICE_FREQUENCY)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for the solve in seconds.
Default: No limit"))

        .arg(Arg::new("conflict_limit")
            .long("conflict-limit")
            .value_name("CONFLICTS")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Conflict limit for the solve.
Default: No limit"))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for any randomised part of a solve.
Default: {}", config::defaults::RNG_SEED)))
}

fn heuristic_parser(arg: &str) -> Result<Heuristic, std::io::Error> {
    match arg {
        "vsids" => Ok(Heuristic::Vsids),
        "jeroslow-wang" => Ok(Heuristic::JeroslowWang),
        _ => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unknown heuristic",
        )),
    }
}
