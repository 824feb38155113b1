use std::time::Duration;

use clap::ArgMatches;

use marten_sat::config::{Config, Heuristic, RestartPolicy};

/// The library configuration given by the command line arguments, defaults
/// filling any gap.
pub fn config_from_args(matches: &ArgMatches) -> Config {
    let mut config = Config::default();

    if let Some(heuristic) = matches.get_one::<Heuristic>("heuristic") {
        config.heuristic = *heuristic;
    };

    if let Some(unit) = matches.get_one::<usize>("luby") {
        config.restart_policy = RestartPolicy::Luby(*unit);
    };

    if let Some(interval) = matches.get_one::<usize>("restart_interval") {
        config.restart_policy = RestartPolicy::Fixed(*interval);
    };

    if matches.get_flag("no_restarts") {
        config.switch.restart = false;
    };

    if matches.get_flag("no_phase_saving") {
        config.switch.phase_saving = false;
    };

    if let Some(interval) = matches.get_one::<u32>("reduction_interval") {
        config.scheduler.conflict = Some(*interval);
    };

    if let Some(lean) = matches.get_one::<f64>("polarity_lean") {
        config.polarity_lean = *lean;
    };

    if let Some(frequency) = matches.get_one::<f64>("random_choice_frequency") {
        config.random_choice_frequency = *frequency;
    };

    if let Some(seconds) = matches.get_one::<u64>("time_limit") {
        config.time_limit = Some(Duration::from_secs(*seconds));
    };

    if let Some(conflicts) = matches.get_one::<usize>("conflict_limit") {
        config.conflict_limit = Some(*conflicts);
    };

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.rng_seed = *seed;
    };

    config
}
