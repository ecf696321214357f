use clap::{Parser, ValueEnum};
use furrow::{App, AppConfig, EdgePolicy, constants, logging};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EdgeArg {
    /// Keep wheel input at the first/last chapter inside the story
    Swallow,
    /// Let wheel input at the first/last chapter scroll the page
    Release,
}

impl From<EdgeArg> for EdgePolicy {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Swallow => EdgePolicy::Swallow,
            EdgeArg::Release => EdgePolicy::Release,
        }
    }
}

#[derive(Parser)]
#[command(name = "furrow")]
#[command(about = "A scroll-driven storytelling viewer for the terminal")]
struct Cli {
    /// Lock duration after a wheel-driven chapter change, in milliseconds
    #[arg(long, default_value_t = constants::SETTLE_DELAY_MS)]
    settle_ms: u64,

    /// Wheel travel (cells) needed before the chapter changes
    #[arg(long, default_value_t = constants::TERMINAL_ADVANCE_THRESHOLD)]
    advance_threshold: f64,

    /// Cells of travel per wheel notch
    #[arg(long, default_value_t = constants::DEFAULT_WHEEL_STEP)]
    wheel_step: u16,

    #[arg(long, value_enum, default_value_t = EdgeArg::Swallow)]
    edge_policy: EdgeArg,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::default()
        .with_settle_delay(cli.settle_ms)
        .with_advance_threshold(cli.advance_threshold)
        .with_wheel_step(cli.wheel_step)
        .with_edge_policy(cli.edge_policy.into())
        .with_log_file(cli.log_file);

    logging::init(config.log_file.as_deref())?;

    info!("Starting with {:?}", config.navigation);
    let mut app = App::with_builtin_story(config).inspect_err(|e| {
        warn!("Startup rejected: {}", e);
    })?;

    app.run()?;

    Ok(())
}
