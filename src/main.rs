use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hexoust::config::AppConfig;
use hexoust::logging::init_logging;
use hexoust::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play HexOust in the terminal.
#[derive(Parser)]
#[command(name = "hexoust", about = "Play HexOust in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "hexoust.toml")]
    config: PathBuf,

    /// Override the board radius
    #[arg(long)]
    radius: Option<i32>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(radius) = cli.radius {
        config.board.radius = radius;
        config.validate().context("applying --radius")?;
    }

    init_logging(&config.logging).context("setting up logging")?;
    tracing::info!(radius = config.board.radius, "starting game");

    let mut app = App::new(&config).context("creating game")?;
    run(&mut app).context("running terminal UI")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
