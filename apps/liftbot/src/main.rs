//! liftbot — plays one elevator simulation session to completion.
//!
//! Opens a session with the simulation service, drives it turn by turn with
//! the selected dispatch policy, and prints the final score and replay URL.
//!
//! ```text
//! liftbot --policy updown --building big_clustered
//! RUST_LOG=lb_client=debug liftbot --config bot.json --max-turns 50
//! ```

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lb_client::HttpTransport;
use lb_core::Building;
use lb_runner::{CancelFlag, LogObserver, TurnLimit, TurnLoopBuilder};

use config::BotConfig;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Elevator dispatch bot for the dianti simulation service.
///
/// Flags override values from `--config`; both fall back to built-in
/// defaults.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dispatch policy: random or updown.
    #[arg(short, long)]
    policy: Option<String>,

    /// Event name (each event has its own high-score board).
    #[arg(long)]
    event: Option<String>,

    /// Building scenario, e.g. tiny_random or 85_sky_tower.
    #[arg(short, long)]
    building: Option<String>,

    /// Bot name shown on the high-score board.
    #[arg(long)]
    bot: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Sandbox runs are excluded from high scores and replays.
    #[arg(long)]
    sandbox: Option<bool>,

    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Transport retries per request.
    #[arg(long)]
    retries: Option<u32>,

    /// Seed for the random policy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many turns, even if the simulation is still running.
    #[arg(long)]
    max_turns: Option<u64>,

    /// List the known building scenarios and exit.
    #[arg(long)]
    list_buildings: bool,
}

impl Cli {
    fn into_config(self) -> Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::load_from(path)?,
            None => BotConfig::default(),
        };
        if let Some(v) = self.policy       { config.policy = v; }
        if let Some(v) = self.event        { config.event = v; }
        if let Some(v) = self.building     { config.building = v; }
        if let Some(v) = self.bot          { config.bot = Some(v); }
        if let Some(v) = self.email        { config.email = v; }
        if let Some(v) = self.sandbox      { config.sandbox = v; }
        if let Some(v) = self.api_url      { config.api_url = v; }
        if let Some(v) = self.timeout_secs { config.timeout_secs = v; }
        if let Some(v) = self.retries      { config.retries = v; }
        if let Some(v) = self.seed         { config.seed = Some(v); }
        if let Some(v) = self.max_turns    { config.max_turns = Some(v); }
        Ok(config)
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.list_buildings {
        print_buildings();
        return Ok(());
    }
    let config = cli.into_config()?;

    let kind = config.policy_kind()?;
    let params = config.session_params()?;
    let client = config.client_config();
    info!(
        policy = %kind,
        building = %params.building,
        bot = %params.bot,
        sandbox = params.sandbox,
        api_url = %client.api_url,
        "starting"
    );

    let transport = HttpTransport::new(&client).context("building HTTP client")?;
    let cancel = CancelFlag::new();
    let limit = TurnLimit::new(config.max_turns.unwrap_or(u64::MAX), cancel.clone());
    let mut observers = (LogObserver, limit);

    let outcome = TurnLoopBuilder::new(transport, params, kind.build(config.seed))
        .retry(client.retry)
        .cancel(cancel)
        .build()
        .run(&mut observers)
        .with_context(|| format!("{kind} bot run failed"))?;

    if !outcome.finished() {
        println!("Stopped after {} turn(s); simulation still running.", outcome.turns);
        return Ok(());
    }
    println!("Score: {}", outcome.score.map_or_else(|| "-".to_owned(), |s| s.to_string()));
    println!("Replay URL: {}", outcome.replay_url.as_deref().unwrap_or("-"));
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("liftbot=info,lb_client=info,lb_runner=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn print_buildings() {
    println!("{:<16} {:>6} {:>9} {:>6}  clustered", "name", "floors", "elevators", "turns");
    for building in Building::CATALOG {
        if let Some(shape) = building.shape() {
            println!(
                "{:<16} {:>6} {:>9} {:>6}  {}",
                building.as_str(),
                shape.floors,
                shape.elevators,
                shape.turns,
                shape.clustered
            );
        }
    }
}
