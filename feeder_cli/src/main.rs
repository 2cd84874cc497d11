//! # Feedwire CLI Application
//!
//! Interactive feeder sizing in the terminal.
//!
//! ```text
//! feeder_cli [--settings settings.json] [--batch items.json]
//! ```
//!
//! Without `--batch` the user is prompted for one feeder. With it, a JSON
//! array of calculation items is run and the outputs printed as JSON.
//! Log output goes to stderr; set `RUST_LOG=debug` to trace the wire search.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use feeder_core::calculations::feeder::{calculate, FeederInput};
use feeder_core::{CalcError, CalcResult, CalculationItem, CircuitPhase, DesignSettings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "feeder_cli", about = "Feeder conductor, conduit and grounding sizing")]
struct Cli {
    /// Design settings JSON (voltage drop limit, parallel-run bound)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// JSON array of calculation items to run instead of prompting
    #[arg(long)]
    batch: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_line(prompt: &str) -> CalcResult<String> {
    print!("{}", prompt);
    let mut input = String::new();
    io::stdout()
        .flush()
        .and_then(|_| io::stdin().lock().read_line(&mut input))
        .map_err(|e| CalcError::invalid_input("stdin", prompt.trim(), e.to_string()))?;
    Ok(input.trim().to_string())
}

/// Parse an answer; only an empty answer takes the default.
fn parse_answer<T: FromStr>(field: &str, answer: &str, default: T) -> CalcResult<T> {
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| CalcError::invalid_input(field, answer, "Not a number"))
}

fn prompt<T: FromStr>(field: &str, text: &str, default: T) -> CalcResult<T> {
    parse_answer(field, &prompt_line(text)?, default)
}

fn load_settings(path: Option<&Path>) -> CalcResult<DesignSettings> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| CalcError::invalid_input("settings", path.display().to_string(), e.to_string()))?;
            let settings = DesignSettings::from_json_str(&json)?;
            info!(path = %path.display(), code = %settings.code, "design settings loaded");
            Ok(settings)
        }
        None => Ok(DesignSettings::default()),
    }
}

fn run_batch(path: &Path, settings: &DesignSettings) -> CalcResult<()> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::invalid_input("batch", path.display().to_string(), e.to_string()))?;
    let items: Vec<CalculationItem> = serde_json::from_str(&json)?;
    info!(count = items.len(), "running batch");

    for item in &items {
        let output = item.run(settings)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

fn run_interactive(settings: &DesignSettings) -> CalcResult<()> {
    println!("Feedwire CLI - Feeder Sizing");
    println!("============================");
    println!();

    let load_amps = prompt("load_amps", "Load current (A) [50.0]: ", 50.0)?;
    let mocp_amps = prompt("mocp_amps", "Overcurrent device (A) [60.0]: ", 60.0)?;
    let distance_ft = prompt("distance_ft", "One-way distance (ft) [20.0]: ", 20.0)?;
    let line_voltage = prompt("line_voltage", "Line voltage (V) [208.0]: ", 208.0)?;
    let phases: u8 = prompt("phases", "Phases (1 or 3) [3]: ", 3)?;
    let wire_count: u8 = prompt("wire_count", "Wires (3 or 4) [4]: ", 4)?;
    let max_drop = prompt(
        "max_voltage_drop_percent",
        &format!("Max voltage drop (%) [{}]: ", settings.max_voltage_drop_percent),
        settings.max_voltage_drop_percent,
    )?;

    let phase = CircuitPhase::from_phase_count(phases).ok_or_else(|| {
        CalcError::invalid_input("phases", phases.to_string(), "Phase count must be 1 or 3")
    })?;

    let input = FeederInput {
        label: "CLI".to_string(),
        load_amps,
        mocp_amps,
        distance_ft,
        line_voltage,
        phase,
        wire_count,
        max_voltage_drop_percent: Some(max_drop),
    };

    let result = calculate(&input, settings)?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  FEEDER");
    println!("═══════════════════════════════════════");
    for line in result.labels.lines() {
        // Phase marker is not printable on most terminals
        println!("  {}", line.replace('\u{0081}', "PH"));
    }
    println!();
    println!(
        "  Voltage drop: {:.2} V ({:.2}%)",
        result.voltage_drop_volts, result.voltage_drop_percent
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let outcome = load_settings(cli.settings.as_deref()).and_then(|settings| match cli.batch.as_deref() {
        Some(path) => run_batch(path, &settings),
        None => run_interactive(&settings),
    });

    if let Err(e) = outcome {
        error!(code = e.error_code(), "calculation failed");
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
