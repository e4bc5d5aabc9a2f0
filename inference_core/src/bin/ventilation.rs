//! Ventilation controller CLI
//!
//! Runs crisp room scenarios through the fuzzy controller and prints the
//! resulting ventilation intensity.
//!
//! Usage:
//!     ventilation
//!     ventilation --scenario 22,45,3 --scenario 30,80,8
//!     ventilation --config config/ventilation.toml --json

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use fuzzy_model::{FuzzyResult, FuzzySystem};
use inference_core::{EngineConfig, FuzzificationMode, InferenceEngine, Inputs};

/// Scenarios run when none are given: cold and dry, hot and humid and packed,
/// mild but humid, slightly warm, very hot and humid.
const REFERENCE_SCENARIOS: [(f64, f64, f64); 5] = [
    (18.0, 30.0, 2.0),
    (32.0, 75.0, 9.0),
    (25.0, 85.0, 5.0),
    (28.0, 60.0, 3.0),
    (35.0, 90.0, 7.0),
];

/// Fuzzy ventilation controller
#[derive(Parser)]
#[command(name = "ventilation")]
#[command(version)]
#[command(about = "Mamdani fuzzy controller for room ventilation", long_about = None)]
struct Cli {
    /// TOML system configuration (defaults to the built-in controller)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scenario as TEMPERATURE,HUMIDITY,OCCUPANTS (repeatable)
    #[arg(short, long, value_parser = parse_scenario)]
    scenario: Vec<(f64, f64, f64)>,

    /// Interpolate inputs that fall between universe samples
    #[arg(long)]
    interpolate: bool,

    /// Print an output snapshot per scenario as JSON
    #[arg(long)]
    json: bool,

    /// Logging level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_scenario(raw: &str) -> Result<(f64, f64, f64), String> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", raw, e))?;

    match values.as_slice() {
        [t, h, p] => Ok((*t, *h, *p)),
        _ => Err(format!("expected 3 comma separated values, got '{}'", raw)),
    }
}

fn load_system(path: Option<&PathBuf>) -> FuzzyResult<FuzzySystem> {
    match path {
        Some(path) => {
            info!("Loading fuzzy system from {:?}", path);
            FuzzySystem::load(path)
        }
        None => FuzzySystem::ventilation(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let system = match load_system(cli.config.as_ref()) {
        Ok(system) => system,
        Err(e) => {
            error!("Failed to load fuzzy system: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = EngineConfig {
        fuzzification: if cli.interpolate {
            FuzzificationMode::Interpolate
        } else {
            FuzzificationMode::Exact
        },
        ..EngineConfig::default()
    };
    let engine = InferenceEngine::new(system, config);

    let names: Vec<String> = engine
        .system()
        .inputs()
        .iter()
        .map(|v| v.name().to_string())
        .collect();
    if names.len() != 3 {
        error!(
            "Scenarios supply 3 values but the system has {} inputs",
            names.len()
        );
        return ExitCode::FAILURE;
    }

    let scenarios = if cli.scenario.is_empty() {
        REFERENCE_SCENARIOS.to_vec()
    } else {
        cli.scenario.clone()
    };
    let inputs: Vec<Inputs> = scenarios
        .iter()
        .map(|&(a, b, c)| names.iter().cloned().zip([a, b, c]).collect())
        .collect();

    if !cli.json {
        println!("{}", "=".repeat(50));
        println!("Fuzzy Ventilation Controller");
        println!("{}", "=".repeat(50));
    }

    let mut failed = false;
    for ((t, h, p), result) in scenarios.iter().zip(engine.infer_batch(&inputs)) {
        match result {
            Ok(inference) if cli.json => match engine.snapshot(&inference).to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize snapshot: {}", e);
                    failed = true;
                }
            },
            Ok(inference) => {
                println!();
                println!("Scenario: {}C | {}% | {} occupants", t, h, p);
                println!("-> Ventilation intensity: {:.2}%", inference.crisp);
                println!("{}", "-".repeat(50));
            }
            Err(e) => {
                error!("Scenario ({}, {}, {}) failed: {}", t, h, p, e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
