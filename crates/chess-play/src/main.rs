//! Chess Play - grid chess in the terminal.
//!
//! Reads square clicks and commands from stdin and draws the board after
//! each one. `--autoplay N` instead plays N random safe moves and exits.

mod config;
mod render;
mod session;

use clap::Parser;
use config::{Layout, PlayConfig};
use session::Session;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess Play - grid chess in the terminal.
#[derive(Parser, Debug)]
#[command(name = "chess-play")]
#[command(about = "Play grid chess in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "chess-play.toml")]
    config: PathBuf,

    /// Starting layout (overrides the config file)
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Seed for shuffled layouts and autoplay
    #[arg(long)]
    seed: Option<u64>,

    /// Draw pieces as ASCII letters
    #[arg(long)]
    ascii: bool,

    /// Play this many random safe moves, then exit
    #[arg(long, value_name = "PLIES")]
    autoplay: Option<usize>,
}

impl Args {
    /// Applies command-line flags on top of the file settings.
    fn apply(&self, config: &mut PlayConfig) {
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.ascii {
            config.ascii = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = PlayConfig::load(&args.config)?;
    args.apply(&mut config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting chess-play");
    tracing::info!("Layout: {:?}", config.layout);
    tracing::debug!("Config: {:?}", config);

    let mut session = Session::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.autoplay {
        Some(plies) => {
            let played = session.autoplay(plies, &mut out)?;
            tracing::info!("Autoplay finished after {} moves", played);
            tracing::info!("Final board: {}", session.game().board().to_placement());
        }
        None => session.run(io::stdin().lock(), &mut out)?,
    }
    Ok(())
}
