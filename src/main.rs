//! Main entry point for the crickelo rating pipeline
//!
//! This is the production entry point that loads the match archive, replays
//! it through the Elo engine, and writes the dashboard artifacts, with
//! proper error handling and logging.

use anyhow::Result;
use clap::Parser;
use crickelo::config::{validate_config, AppConfig};
use crickelo::rating::engine::EloEngine;
use crickelo::{export, head_to_head, ingest};
use std::path::PathBuf;
use tracing::{error, info};

/// Crickelo - Elo rating pipeline for cricket match archives
#[derive(Parser)]
#[command(
    name = "crickelo",
    version,
    about = "Replays a cricket match archive through an Elo model and exports dashboard data",
    long_about = "Crickelo reads a match archive CSV, replays every result in chronological \
                 order through a classic Elo rating model, and writes the current ratings, \
                 per-team rating history, and head-to-head win rates as JSON artifacts for \
                 a dashboard to consume."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Match archive override
    #[arg(short, long, value_name = "FILE", help = "Override match archive CSV path")]
    matches: Option<PathBuf>,

    /// Output directory override
    #[arg(short, long, value_name = "DIR", help = "Override artifact output directory")]
    output_dir: Option<PathBuf>,

    /// K-factor override
    #[arg(long, value_name = "K", help = "Override the Elo K-factor")]
    k_factor: Option<f64>,

    /// Base rating override
    #[arg(long, value_name = "RATING", help = "Override the rating new teams start from")]
    base_rating: Option<f64>,

    /// Home advantage override
    #[arg(long, value_name = "POINTS", help = "Override the reserved home advantage")]
    home_advantage: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Pretty-print artifacts
    #[arg(long, help = "Pretty-print the JSON artifacts")]
    pretty: bool,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without processing")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner with pipeline information
fn display_startup_banner(config: &AppConfig) {
    info!("🏏 Crickelo Rating Pipeline v{}", crickelo::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Match archive: {}", config.data.matches_csv.display());
    info!("   Output directory: {}", config.data.output_dir.display());
    info!("   K-factor: {}", config.rating.k_factor);
    info!("   Base rating: {}", config.rating.base_rating);
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Load and merge configuration from file, environment, and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    // Start with file- or environment-based config
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(matches) = &args.matches {
        config.data.matches_csv = matches.clone();
    }

    if let Some(output_dir) = &args.output_dir {
        config.data.output_dir = output_dir.clone();
    }

    if args.pretty {
        config.data.pretty_json = true;
    }

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }

    if let Some(base_rating) = args.base_rating {
        config.rating.base_rating = base_rating;
    }

    if let Some(home_advantage) = args.home_advantage {
        config.rating.home_advantage = home_advantage;
    }

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    // Overrides can introduce invalid values, so validate again
    validate_config(&config)?;

    Ok(config)
}

/// Run the full archive-to-artifacts pipeline
fn run_pipeline(config: &AppConfig) -> Result<()> {
    let matches = ingest::load_matches(&config.data.matches_csv)?;

    let mut engine = EloEngine::new(config.rating.tuning());
    let history = engine.process_matches(&matches);
    info!(
        "Processed {} matches across {} teams",
        history.len(),
        engine.team_count()
    );

    let matrix = head_to_head::win_rate_matrix(&matches);
    export::write_artifacts(
        &engine,
        &matrix,
        &config.data.output_dir,
        config.data.pretty_json,
    )?;

    if let Some((team, rating)) = engine.leaderboard().first() {
        info!("🏆 Top rated team: {} ({:.1})", team, rating);
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Some(config_path) = &args.config {
        info!("Loaded configuration from: {}", config_path.display());
    }

    // Handle special modes
    if args.dry_run {
        info!("Configuration validation successful");
        display_startup_banner(&config);
        info!("Dry run completed - exiting without processing");
        return Ok(());
    }

    // Display startup information
    display_startup_banner(&config);

    if let Err(e) = run_pipeline(&config) {
        error!("Pipeline failed: {}", e);
        std::process::exit(1);
    }

    info!("✅ Dashboard data generated successfully");
    Ok(())
}
