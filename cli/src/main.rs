//! Dataset regeneration command
//!
//! Single no-argument invocation: builds the default configuration,
//! generates the full dataset, and writes it to the path the dashboard
//! reads from. All tunables are config-time constants, not flags.

use std::path::Path;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;
use txgen_core_rs::{compute_config_hash, export_csv, Generator, GeneratorConfig, GeneratorError};

/// Output path relative to the working directory, as the dashboard expects
const OUT_PATH: &str = "data/transactions_dummy.csv";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("generation failed: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GeneratorError> {
    let config = GeneratorConfig::default();
    let fingerprint = compute_config_hash(&config)?;
    info!(%fingerprint, seed = config.seed, "starting generation");

    let generator = Generator::new(config)?;
    let records = generator.generate()?;

    let path = Path::new(OUT_PATH);
    export_csv(&records, path)?;

    // Records are sorted by date, so the year span is first..last
    let first_year = records.first().map(|record| record.year).unwrap_or_default();
    let last_year = records.last().map(|record| record.year).unwrap_or_default();
    println!(
        "Saved {}  rows={}  years={}-{}",
        path.display(),
        records.len(),
        first_year,
        last_year
    );

    Ok(())
}
