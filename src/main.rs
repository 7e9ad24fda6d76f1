//! Default model inspector
//!
//! Loads the rules file and reports the default model and change permission
//! for a described player.

use clap::Parser;
use model_defaults::{
    DefaultModels, Player, SideQuery,
    config::{AppConfig, LogFormat, load_config},
    rules::Resolution,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Show which default model applies to a player and whether they may change it
#[derive(Parser, Debug)]
#[command(name = "model-defaults")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "MODEL_DEFAULTS_CONFIG")]
    config: Option<String>,

    /// Path to DefaultModels.json (overrides defaults.path)
    #[arg(long, env = "MODEL_DEFAULTS_FILE")]
    defaults: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MODEL_DEFAULTS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Player SteamID64 (omit for an unauthenticated player)
    #[arg(long)]
    steam_id: Option<u64>,

    /// Permission flag held by the player (repeatable)
    #[arg(long = "flag")]
    flags: Vec<String>,

    /// Permission group of the player, with its '#' prefix (repeatable)
    #[arg(long = "group")]
    groups: Vec<String>,

    /// Side to query (t, ct, all)
    #[arg(long, default_value = "all")]
    side: SideQuery,
}

fn init_logging(config: &AppConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn describe(resolution: Resolution<'_>) -> String {
    match resolution {
        Resolution::Model(model) => model.to_string(),
        Resolution::Suppressed => "(none, suppressed)".to_string(),
        Resolution::NoMatch => "(none)".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so the configured format applies
    let config = load_config(args.config.as_deref())?;
    init_logging(&config, args.log_level.as_deref());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting default model inspector"
    );

    let defaults_path = args
        .defaults
        .unwrap_or_else(|| config.defaults.expanded_path());
    let models = DefaultModels::load(&defaults_path)
        .inspect_err(|e| error!(error = %e, "Failed to load default models"))?;

    let player = match args.steam_id {
        Some(id) => Player::new(id),
        None => Player::unauthenticated(),
    }
    .with_flags(args.flags)
    .with_groups(args.groups);

    for side in args.side.sides() {
        println!(
            "{side}: default model = {}",
            describe(models.lookup(&player, *side))
        );
    }
    println!(
        "{}: can change model = {}",
        args.side,
        models.can_change_model(&player, args.side)
    );

    Ok(())
}
