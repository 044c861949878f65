//! # Hitchscale CLI Application
//!
//! Terminal front end for the tongue weight calculator.
//!
//! ## Usage
//!
//! ```text
//! tongue_cli                    prompt for loads and axles
//! tongue_cli <config.json>      solve a saved configuration
//! tongue_cli --save <path>      prompt, save the configuration, then solve
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostic output.

mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use log::{info, warn};
use tongue_core::layout::LoadLayout;
use tongue_core::trailer::{default_axle_position, DEFAULT_LOAD_POSITION, DEFAULT_LOAD_WEIGHT};
use tongue_core::units::UnitSystem;
use tongue_core::{load_config, save_config, CalcError, PointLoad, SupportSet, TrailerConfig};

use report::render_summary;

/// What the user asked for on the command line
enum Command {
    Interactive { save_to: Option<PathBuf> },
    Load(PathBuf),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Interactive { save_to: None }),
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [flag, path] if flag == "--save" => Ok(Command::Interactive {
            save_to: Some(PathBuf::from(path)),
        }),
        [path] if !path.starts_with('-') => Ok(Command::Load(PathBuf::from(path))),
        _ => Err(format!("Unrecognized arguments: {}", args.join(" "))),
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_units() -> UnitSystem {
    match prompt_line("Unit system (imperial/metric) [imperial]: ") {
        Some(s) if s.eq_ignore_ascii_case("metric") || s.eq_ignore_ascii_case("m") => UnitSystem::Metric,
        _ => UnitSystem::Imperial,
    }
}

/// Collect a configuration from stdin, offering the classic defaults.
fn prompt_config() -> TrailerConfig {
    let units = prompt_units();
    let lb = units.force_label();
    let len = units.length_label();
    let mut config = TrailerConfig::new("CLI trailer").with_units(units);

    let load_count = prompt_usize("Number of loads [1]: ", 1);
    for i in 1..=load_count {
        let weight = prompt_f64(&format!("Load {} weight ({}) [{}]: ", i, lb, DEFAULT_LOAD_WEIGHT), DEFAULT_LOAD_WEIGHT);
        let position = prompt_f64(
            &format!("Load {} distance from hitch ({}) [{}]: ", i, len, DEFAULT_LOAD_POSITION),
            DEFAULT_LOAD_POSITION,
        );
        config = config.with_load(PointLoad::new(weight, position));
    }

    let axle_count = prompt_usize("Number of axles [2]: ", 2);
    for i in 0..axle_count {
        let default = default_axle_position(i);
        let position = prompt_f64(&format!("Axle {} position ({}) [{}]: ", i + 1, len, default), default);
        config = config.with_axle(position);
    }

    config
}

fn run(command: Command) -> Result<(), CalcError> {
    let config = match command {
        Command::Help => {
            println!("Usage: tongue_cli [<config.json> | --save <config.json>]");
            return Ok(());
        }
        Command::Load(path) => load_config(&path)?,
        Command::Interactive { save_to } => {
            println!("Hitchscale - Trailer Tongue Weight Calculator");
            println!("=============================================");
            println!();
            let config = prompt_config();
            if let Some(path) = save_to {
                save_config(&config, &path)?;
                println!("Saved configuration to {}", path.display());
            }
            config
        }
    };

    info!(
        "solving '{}': {} loads, {} axles ({:?})",
        config.meta.name,
        config.loads.len(),
        config.axles.len(),
        config.model
    );

    let result = config.solve()?;
    let axles = SupportSet::new(config.axles.clone())?;
    let layout = LoadLayout::from_inputs(&config.loads, &axles);

    if !result.classification.is_acceptable() {
        warn!("tongue weight classified {:?}", result.classification);
    }

    println!();
    print!("{}", render_summary(&config, &result, &layout));

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: tongue_cli [<config.json> | --save <config.json>]");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
