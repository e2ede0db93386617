//! Rival encounter simulator CLI.
//!
//! Run Monte Carlo simulations of rival selection, scheduling and scaling.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # Default: 1000 classic runs
//!   cargo run --bin simulate -- -n 100 --carry     # Defeats accumulate across runs
//!   cargo run --bin simulate -- --seed 42          # Reproducible run

use std::env;
use std::path::PathBuf;
use trainer_forge::battle::GameMode;
use trainer_forge::simulator::{run_simulation, SimConfig, SimReport};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              RIVAL ENCOUNTER SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Mode:           {:?}", config.game_mode);
    if config.wave_offset > 0 {
        println!("  Wave offset:    {}", config.wave_offset);
    }
    if config.carry_save {
        println!("  Save:           carried across runs");
    }
    if config.pre_defeated > 0 {
        println!("  Pre-defeated:   {}", config.pre_defeated);
    }
    if let Some(path) = &config.catalog_path {
        println!("  Catalog:        {}", path.display());
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = SimReport::json_filename();
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-m" | "--mode" => {
                if i + 1 < args.len() {
                    config.game_mode = GameMode::parse(&args[i + 1]).unwrap_or_default();
                    i += 1;
                }
            }
            "-w" | "--wave-offset" => {
                if i + 1 < args.len() {
                    config.wave_offset = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.player_level = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-d" | "--defeated" => {
                if i + 1 < args.len() {
                    config.pre_defeated = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--catalog" => {
                if i + 1 < args.len() {
                    config.catalog_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--carry" => {
                config.carry_save = true;
            }
            "--nightmare-unlocked" => {
                config.nightmare_unlocked = true;
            }
            "--void-overtaken" => {
                config.void_overtaken = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--roster" => {
                config = SimConfig::full_roster(40);
            }
            "--endgame" => {
                config = SimConfig::nightmare_endgame();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Rival Encounter Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of simulated runs (default: 1000)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -m, --mode <MODE>       classic, endless, daily or nightmare");
    println!("    -w, --wave-offset <W>   Added to every planned wave (default: 0)");
    println!("    -l, --level <L>         Strongest player level (default: 50)");
    println!("    -d, --defeated <D>      Personas already defeated at start");
    println!("    --catalog <FILE>        Species catalog JSON");
    println!("    --carry                 Keep one save across runs");
    println!("    --nightmare-unlocked    Start with Nightmare mode unlocked");
    println!("    --void-overtaken        Start with the void overtaken");
    println!("    -v, --verbose           Per-run output");
    println!("    --json                  Save JSON report");
    println!("    --quick                 Quick test (100 runs)");
    println!("    --roster                40 runs sharing one save");
    println!("    --endgame               Nightmare runs past wave 400");
    println!("    -h, --help              Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                        # Default run");
    println!("    cargo run --bin simulate -- --seed 42           # Reproducible");
    println!("    cargo run --bin simulate -- --roster --json     # Roster unlock pacing");
    println!("    cargo run --bin simulate -- --endgame --catalog species.json");
}
