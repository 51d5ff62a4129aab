//! Terminal front end for a Peerster node.
//!
//! Draws the node's messages, peers and files and refreshes them every few
//! seconds. With `--headless` (or when stdout is not a terminal) nothing is
//! drawn; new messages are logged instead.

use anyhow::Context;
use clap::Parser;
use peerster_api::{NodeApi, NodeClient};
use peerster_ui::config::LogConfig;
use peerster_ui::tui::{self, App};
use peerster_ui::{NodeView, Poller, StatusSync, TokioClock, UiConfig};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Redraw cadence when no key is pressed.
const REDRAW_EVERY: Duration = Duration::from_millis(250);

/// Peerster node front end.
#[derive(Parser)]
#[command(name = "peerster-ui", version, about)]
struct Args {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node UI address, overrides `node.base_url`.
    #[arg(short, long)]
    addr: Option<String>,

    /// Refresh interval in milliseconds, overrides `poll.interval_ms`.
    #[arg(long)]
    refresh_ms: Option<u64>,

    /// Log to stderr instead of the log file.
    #[arg(long)]
    log_stderr: bool,

    /// Poll and log new messages without drawing a UI.
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let headless = args.headless || !io::stdout().is_terminal();
    let _log_guard = init_tracing(&config.log, args.log_stderr || headless)?;

    let api = Arc::new(NodeClient::new(&config.api_config()).context("invalid node address")?);
    let node_id = api
        .node_id()
        .await
        .with_context(|| format!("cannot reach node at {}", config.node.base_url))?;
    info!(node = %node_id, url = %config.node.base_url, headless, "connected to node");

    let view = if headless {
        NodeView::headless(node_id.clone())?
    } else {
        NodeView::new(node_id.clone())?
    };
    let view = Arc::new(Mutex::new(view));

    let sync = StatusSync::new(Arc::clone(&api), node_id);
    let poller = Poller::new(sync, Arc::clone(&view), TokioClock, config.poll.interval()).spawn();

    let result = if headless {
        tokio::signal::ctrl_c()
            .await
            .context("failed to wait for Ctrl-C")
    } else {
        run_tui(api.as_ref(), view).await
    };

    poller.stop().await;
    info!("peerster-ui stopped");
    result
}

fn load_config(args: &Args) -> anyhow::Result<UiConfig> {
    let mut config = match &args.config {
        Some(path) => UiConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => UiConfig::load_or_default(&UiConfig::default_config_path())?,
    };
    if let Some(addr) = &args.addr {
        config.node.base_url = addr.clone();
    }
    if let Some(ms) = args.refresh_ms {
        config.poll.interval_ms = ms;
    }
    config.validate()?;
    Ok(config)
}

/// Install the global subscriber. The returned guard flushes the log file on drop.
fn init_tracing(log: &LogConfig, to_stderr: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .init();
        return Ok(None);
    }

    let path = log.file_path();
    let dir = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(Some(guard))
}

async fn run_tui(api: &NodeClient, view: Arc<Mutex<NodeView>>) -> anyhow::Result<()> {
    let mut terminal = tui::setup_terminal().context("failed to set up terminal")?;
    let mut app = App::new(view);
    let result = tui::run_app(&mut terminal, &mut app, api, REDRAW_EVERY).await;
    tui::restore_terminal(&mut terminal).context("failed to restore terminal")?;
    result.map_err(Into::into)
}
