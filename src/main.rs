//! Family chore board.
//!
//! Every refresh interval: fetch the Todoist project, count newly completed
//! tasks into the weekly tally, render the board and hand both ink planes to
//! the panel driver.
//!
//! ```text
//! chore-board [--config <path>] [--once]
//! ```
//!
//! Logging follows `RUST_LOG` (default `chore_board=info`).

use std::path::PathBuf;

use anyhow::Context;
use chore_board::config::{self, Config};
use chore_board::sources::http_client;
use chore_board::{Cycle, FileSink, JsonFileStore, NwsWeather, Scheduler, TodoistSource};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chore-board", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single cycle and exit.
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chore_board=info")))
        .init();

    let cli = Cli::parse();
    let path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = Config::load(&path).with_context(|| format!("loading {}", path.display()))?;
    tracing::info!(config = %path.display(), project = %config.todoist.project_id, "starting");

    let client = http_client(&config.weather.user_agent, config.http_timeout()).context("building HTTP client")?;
    let board = config.board();
    let mut cycle = Cycle {
        tasks: TodoistSource::new(client.clone(), &config.todoist),
        weather: NwsWeather::new(client, &config.weather),
        store: JsonFileStore::new(&config.storage.tally_path),
        display: FileSink::new(&config.display.output_dir, board.panel_size()),
        fonts: config.font_set()?,
        board,
    };

    let mut step = |today: chrono::NaiveDate| cycle.run_once(today);
    if cli.once {
        Scheduler::tick(&mut step, Local::now().date_naive());
        return Ok(());
    }
    Scheduler::new(config.refresh_interval()).run(step)
}
