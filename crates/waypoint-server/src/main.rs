//! Waypoint console binary.
//!
//! Runs one menu session on this terminal, as the given player.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: ./waypoint.toml if present, player "player"
//! waypoint
//!
//! # Explicit configuration and player
//! waypoint --config deploy/waypoint.toml --player Steve --log-level debug
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{BufReader, stdin, stdout};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use waypoint_core::PlayerId;
use waypoint_menu::SessionEnd;
use waypoint_server::{Config, ConsoleTransport, Waypoint};

/// Waypoint server list menu
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Browse server lists and connect, from the console")]
#[command(version)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player name for this session
    #[arg(short, long, default_value = "player")]
    player: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so they do not interleave with the menu
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    tracing::info!("Waypoint starting");

    let config = Config::load(args.config.as_deref())?;
    let waypoint = Waypoint::from_config(&config)?;

    let transport = ConsoleTransport::new(BufReader::new(stdin()), stdout());
    let player = PlayerId::new(args.player);

    match waypoint.run_session(player.clone(), transport).await? {
        SessionEnd::HandedOff(server) => tracing::info!(%player, %server, "Player handed off"),
        SessionEnd::Terminated { reason } => tracing::info!(%player, %reason, "Player disconnected"),
        SessionEnd::Abandoned => tracing::info!(%player, "Input closed"),
    }

    Ok(())
}
