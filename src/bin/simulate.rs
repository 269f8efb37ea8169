//! Batch simulator CLI.
//!
//! Runs one character to a target level and reports how long it took.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # Fresh character to level 10
//!   cargo run --bin simulate -- -l 20 --seed 42    # Reproducible run to level 20
//!   cargo run --bin simulate -- --deterministic    # Fixed LCG dice stream
//!   cargo run --bin simulate -- -r roster.dat      # Continue and save a roster character

use pqsim::simulator::{run_simulation, DiceMode, SimConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some((config, json)) = parse_args(&args) else {
        return ExitCode::SUCCESS;
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                    PQSIM BATCH SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Target level:   {}", config.max_level);
    println!("  Tick:           {} ms", config.tick_ms);
    match config.dice {
        DiceMode::Entropy => println!("  Dice:           entropy"),
        DiceMode::Seeded(seed) => println!("  Dice:           seeded ({})", seed),
        DiceMode::Deterministic => println!("  Dice:           deterministic LCG"),
    }
    if let Some(path) = &config.roster_path {
        println!("  Roster:         {}", path.display());
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

/// Returns `None` when the invocation only asked for help or the version.
fn parse_args(args: &[String]) -> Option<(SimConfig, bool)> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-l" | "--max-level" => {
                if i + 1 < args.len() {
                    config.max_level = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    if let Ok(seed) = args[i + 1].parse() {
                        config.dice = DiceMode::Seeded(seed);
                    }
                    i += 1;
                }
            }
            "-d" | "--deterministic" => {
                config.dice = DiceMode::Deterministic;
            }
            "-t" | "--tick" => {
                if i + 1 < args.len() {
                    config.tick_ms = args[i + 1].parse().unwrap_or(config.tick_ms).max(1);
                    i += 1;
                }
            }
            "-r" | "--roster" => {
                if i + 1 < args.len() {
                    config.roster_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "-n" | "--name" => {
                if i + 1 < args.len() {
                    config.player_name = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                return None;
            }
            "--version" => {
                println!("simulate {}", env!("CARGO_PKG_VERSION"));
                return None;
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    Some((config, json))
}

fn print_help() {
    println!("Batch simulator - run a character to a target level");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --max-level <N>   Stop at this level (default: 10)");
    println!("  -s, --seed <N>        Seeded ChaCha dice for a reproducible run");
    println!("  -d, --deterministic   Fixed linear-congruential dice stream");
    println!("  -t, --tick <MS>       Game milliseconds per tick (default: 100)");
    println!("  -r, --roster <PATH>   Load the character from, and save it to, a roster file");
    println!("  -n, --name <NAME>     Roster character to run (default: the first)");
    println!("  -q, --quiet           Only print the final report");
    println!("  -v, --verbose         Print every task as it starts");
    println!("      --json            Also write the report as JSON");
    println!("  -h, --help            Show this help");
    println!("      --version         Show the version");
}
