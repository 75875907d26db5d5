//! Toll calculator command line host
//!
//! Loads the tariff configuration and prints the day fee for one vehicle.
//!
//! ```sh
//! # Default config (~/.config/toll-calculator/config.toml)
//! toll-fee --vehicle car 2019-10-01T06:05:00Z 2019-10-01T07:04:00Z
//!
//! # Explicit tariff document
//! toll-fee --tariffs ./tariffs.json --vehicle 1 2019-10-01T11:30:00Z
//!
//! # Validate configuration without computing anything
//! toll-fee --check
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{error, info};

use toll_calculator::config::AppConfig;
use toll_calculator::telemetry::init_tracing;
use toll_calculator::{TollCalculator, VehicleCategory};

/// Compute the toll fee for a vehicle's passages on one day.
#[derive(Parser, Debug)]
#[command(name = "toll-fee", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TOLL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the tariff document (JSON).
    #[arg(short, long)]
    tariffs: Option<PathBuf>,

    /// Override the reference time zone (IANA name).
    #[arg(long)]
    zone: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check: bool,

    /// Vehicle category, by name (car, motorbike, ...) or numeric id.
    #[arg(short, long, default_value = "car")]
    vehicle: VehicleCategory,

    /// Passage timestamps (RFC 3339), in chronological order.
    #[arg(value_parser = parse_passage)]
    passages: Vec<DateTime<Utc>>,
}

fn parse_passage(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp {s:?}: {e}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(toll_calculator::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging)?;

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(ref path) = cli.tariffs {
        info!("CLI override: tariff_file = {}", path.display());
        config.tolls.tariff_file = path.clone();
    }
    if let Some(ref zone) = cli.zone {
        info!("CLI override: reference_zone = {}", zone);
        config.tolls.reference_zone = zone.clone();
    }

    let zone = config.tolls.zone()?;
    let calculator = TollCalculator::from_file(&config.tolls.tariff_file, zone)?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Tariff file    : {}", config.tolls.tariff_file.display());
        println!("   Tariffs        : {}", calculator.tariffs().len());
        println!("   Exemptions     : {}", calculator.exemptions().len());
        println!("   Daily cap      : {}", calculator.daily_cap());
        println!("   Reference zone : {}", calculator.zone());
        println!("   Log level      : {}", config.logging.level);
        return Ok(());
    }

    let fee = calculator.compute_day_fee(cli.vehicle, &cli.passages)?;
    println!("{fee}");

    Ok(())
}
