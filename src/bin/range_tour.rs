use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{arg, value_parser, Command};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_range_tour::io::load_cities;
use u_range_tour::models::Strategy;
use u_range_tour::{run, SolverConfig};

fn cli() -> Command {
    Command::new("range-tour")
        .about("Finds a short closed tour whose every leg is within a maximum distance")
        .arg(arg!(<CITIES> "City file, one 'id, x, y' per line").value_parser(value_parser!(PathBuf)))
        .arg(
            arg!(--strategy [STRATEGY] "genetic, hill-climbing, or hybrid")
                .default_value("hybrid")
                .value_parser(value_parser!(String)),
        )
        .arg(arg!(--config <PATH> "JSON configuration file").value_parser(value_parser!(PathBuf)))
        .arg(arg!(--"max-distance" <DISTANCE> "Maximum leg distance").value_parser(value_parser!(f64)))
        .arg(arg!(--population <SIZE> "Population size").value_parser(value_parser!(usize)))
        .arg(arg!(--generations <COUNT> "Number of generations").value_parser(value_parser!(usize)))
        .arg(arg!(--"mutation-rate" <RATE> "Mutation probability").value_parser(value_parser!(f64)))
        .arg(
            arg!(--iterations <COUNT> "Standalone hill-climbing iterations")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--frequency <GENERATIONS> "Generations between hybrid polishes")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--seed <SEED> "Random seed").value_parser(value_parser!(u64)))
        .arg(arg!(--json "Print the result as JSON"))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(matches: &clap::ArgMatches) -> Result<SolverConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SolverConfig::from_json(&json)?
        }
        None => SolverConfig::default(),
    };

    if let Some(&v) = matches.get_one::<f64>("max-distance") {
        config = config.with_max_distance(v);
    }
    if let Some(&v) = matches.get_one::<usize>("population") {
        config = config.with_population_size(v);
    }
    if let Some(&v) = matches.get_one::<usize>("generations") {
        config = config.with_generations(v);
    }
    if let Some(&v) = matches.get_one::<f64>("mutation-rate") {
        config = config.with_mutation_rate(v);
    }
    if let Some(&v) = matches.get_one::<usize>("iterations") {
        config = config.with_max_iterations(v);
    }
    if let Some(&v) = matches.get_one::<usize>("frequency") {
        config = config.with_hill_climbing_frequency(v);
    }
    if let Some(&v) = matches.get_one::<u64>("seed") {
        config = config.with_seed(v);
    }
    Ok(config)
}

#[derive(Serialize)]
struct Report {
    strategy: Strategy,
    best_path: Vec<usize>,
    best_distance: f64,
    feasible: bool,
    reinitializations: usize,
    execution_secs: f64,
}

fn main() -> Result<()> {
    enable_tracing();
    let matches = cli().get_matches();
    let start = Instant::now();

    let path = matches
        .get_one::<PathBuf>("CITIES")
        .context("missing city file")?;
    let strategy: Strategy = matches
        .get_one::<String>("strategy")
        .context("missing strategy")?
        .parse()?;
    let config = build_config(&matches)?;

    let cities =
        load_cities(path).with_context(|| format!("loading cities from {}", path.display()))?;
    info!(count = cities.len(), path = %path.display(), "cities loaded");

    let solution = run(&cities, &config, strategy)?;
    let best_path = solution.city_ids();
    let elapsed = start.elapsed().as_secs_f64();

    if matches.get_flag("json") {
        let report = Report {
            strategy,
            best_path: best_path.to_vec(),
            best_distance: solution.length(),
            feasible: solution.is_feasible(),
            reinitializations: solution.reinitializations(),
            execution_secs: elapsed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Best Path: {best_path:?}");
        println!("Best Distance: {}", solution.length());
        if !solution.is_feasible() {
            println!("Warning: no tour satisfies the maximum distance");
        }
        println!("Execution time: {elapsed:.4} seconds");
    }
    Ok(())
}
