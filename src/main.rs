use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use minimax_connect_four::ai::{Difficulty, GameMode};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::ui::{console, App};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Who plays: pvp, pva (human vs computer) or ava (computer vs computer)
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Computer strength: easy (2 plies), medium (4) or hard (6)
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Explicit search depth, overrides --difficulty
    #[arg(long)]
    depth: Option<usize>,

    /// Play on stdin/stdout instead of the terminal UI
    #[arg(long)]
    console: bool,

    /// Log level for console mode
    #[arg(long, env = "CONNECT_FOUR_LOG", default_value = "warn")]
    log_level: log::Level,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
        config.game.depth = None;
    }
    if cli.depth.is_some() {
        config.game.depth = cli.depth;
    }
    if cli.console {
        config.ui.console = true;
    }
    config.validate().context("invalid settings")?;

    if config.ui.console {
        // Only console mode logs; output would corrupt the terminal UI
        simple_logger::init_with_level(cli.log_level).context("installing logger")?;
        console::run(&config).context("console game")
    } else {
        run_tui(&config).context("terminal UI")
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal; always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
