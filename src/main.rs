//! NeuroCat simulator CLI.
//!
//! Run Monte Carlo simulations of motor-signal transmission through a
//! cerebellar-hypoplasia-damaged pathway.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                          # Default: moderate CH, 1000 attempts
//!   cargo run -- -S 0.8 -a 0.2        # Severe lesion, weak adaptation
//!   cargo run -- --seed 42            # Reproducible run

use std::env;
use std::process;

use neurocat::report;
use neurocat::{run_simulation, Condition, SimConfig};

#[derive(Debug)]
struct CliOptions {
    show_legend: bool,
    save_json: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (config, options) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            process::exit(1);
        }
    };

    init_logging(options.verbose);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 NEUROCAT SIGNAL SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Condition:      {}", config.condition);
    println!("  Severity:       {:.2}", config.severity);
    println!("  Adaptation:     {:.2}", config.adaptation);
    println!("  Nodes:          {}", config.node_count);
    println!("  Attempts:       {}", config.attempt_count);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let summary = match run_simulation(&config) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            process::exit(1);
        }
    };

    println!("{}", report::render(&config, &summary));

    if options.show_legend {
        println!("{}", report::metric_legend());
    }

    if options.save_json {
        let json = summary.to_json();
        let filename = format!(
            "neurocat_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }
}

fn parse_args(args: &[String]) -> Result<(SimConfig, CliOptions), String> {
    let mut config = SimConfig::default();
    let mut options = CliOptions {
        show_legend: false,
        save_json: false,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--attempts" => {
                config.attempt_count = parse_value(args, &mut i)?;
            }
            "-k" | "--nodes" => {
                config.node_count = parse_value(args, &mut i)?;
            }
            "-S" | "--severity" => {
                config.severity = parse_value(args, &mut i)?;
            }
            "-a" | "--adaptation" => {
                config.adaptation = parse_value(args, &mut i)?;
            }
            "-c" | "--condition" => {
                let value: String = parse_value(args, &mut i)?;
                config.condition = value
                    .parse::<Condition>()
                    .map_err(|err| err.to_string())?;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, &mut i)?);
            }
            "--mild" => {
                config = SimConfig::mild();
            }
            "--moderate" => {
                config = SimConfig::moderate();
            }
            "--severe" => {
                config = SimConfig::severe();
            }
            "--explain" => {
                options.show_legend = true;
            }
            "--json" => {
                options.save_json = true;
            }
            "-v" | "--verbose" => {
                options.verbose = true;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                return Err(format!("unrecognized option '{}'", other));
            }
        }
        i += 1;
    }

    Ok((config, options))
}

/// Parse the value following the flag at `args[*i]`, advancing past it.
///
/// Rejects missing or malformed values instead of substituting a default,
/// so inputs like `--attempts -5` surface as errors rather than silently
/// running a different simulation.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = &args[*i];
    let value = args
        .get(*i + 1)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    *i += 1;
    value
        .parse()
        .map_err(|_| format!("invalid value '{}' for {}", value, flag))
}

fn print_help() {
    println!("NeuroCat Signal Simulator");
    println!();
    println!("Models motor-signal transmission through a CH-damaged neural");
    println!("pathway: each relay node fails with probability <severity>, and");
    println!("each failure is rerouted with probability <adaptation>.");
    println!();
    println!("USAGE:");
    println!("    cargo run -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --attempts <N>     Signal attempts to simulate (default: 1000)");
    println!("    -k, --nodes <K>        Relay nodes per signal (default: 10)");
    println!("    -S, --severity <P>     Per-node failure probability in [0,1] (default: 0.5)");
    println!("    -a, --adaptation <P>   Per-failure compensation probability (default: 0.3)");
    println!("    -c, --condition <C>    Modeled condition (default: CH)");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    --mild                 Preset: mild CH, strong adaptation");
    println!("    --moderate             Preset: moderate CH, partial adaptation");
    println!("    --severe               Preset: severe CH, weak adaptation");
    println!("    --explain              Print the metric guide after the report");
    println!("    --json                 Save the summary as a JSON report");
    println!("    -v, --verbose          Debug logging (RUST_LOG still applies)");
    println!("    -h, --help             Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run                          # Default moderate run");
    println!("    cargo run -- --severe              # Severe CH preset");
    println!("    cargo run -- -S 0.3 -a 0.6         # Mild lesion, good adaptation");
    println!("    cargo run -- --seed 42             # Reproducible");
    println!("    cargo run -- -n 5000 --json        # Large run, save JSON");
}
