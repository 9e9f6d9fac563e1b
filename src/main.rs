use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_minimax::ai::Difficulty;
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Opponent tier: beginner, medium or hard (skips the selection dialog)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Override search depth for the hard tier
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for reproducible coin flips and computer moves
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives log output (filtered by RUST_LOG)
    #[arg(long, default_value = "connect-four.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = Some(difficulty);
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(?config, "starting");
    run(config).context("terminal UI failed")
}

/// Logs go to a file because the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even when the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
