// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use logging::setup_logging;
use nameparse::{AppError, Config, ParsedName, parse_name};
use tracing::{debug, info};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.version {
        println!("{} {}", nameparse::NAME, nameparse::VERSION);
        return Ok(());
    }

    if args.list_config {
        Config::display()?;
        return Ok(());
    }

    let Some(name) = args.name.as_deref() else {
        return Err(AppError::config_error(
            "No name given. Pass the name to parse as a single quoted argument.",
        ));
    };

    let (log_file_path, _guard) = setup_logging(&args)?;
    debug!("Logging to {log_file_path}");

    let config = Config::load()?;
    let options = config.parse_options();

    let parsed = parse_name(Some(name), Some(&options));
    info!(
        confidence = parsed.confidence,
        "Parsed name with {} tokens",
        name.split_whitespace().count()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print_parsed(&parsed);
    }

    Ok(())
}

/// Prints the parsed record as a labeled field listing, skipping absent
/// components.
fn print_parsed(parsed: &ParsedName) {
    let fields = [
        ("Prefix", &parsed.prefix),
        ("First name", &parsed.first_name),
        ("Middle name", &parsed.middle_name),
        ("Last name", &parsed.last_name),
        ("Suffix", &parsed.suffix),
    ];

    println!("────────────────────────────────────");
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{label:<12} {value}");
        }
    }
    println!("{:<12} {:.2}", "Confidence", parsed.confidence);
    if parsed.confidence <= 0.1 {
        println!("(unreliable parse, inspect manually)");
    }
    println!("────────────────────────────────────");
}
