//! Detective Quest
//!
//! Explore the mansion, collect the clues, name the culprit.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::config::QuestConfig;
use detective_quest::tui::App;
use detective_quest::{console, Game, Result};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "detective-quest", version)]
#[command(about = "Explore the mansion, collect the clues, name the culprit")]
struct Args {
    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Plain line-based console instead of the terminal UI
    #[arg(long)]
    plain: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = QuestConfig::load(args.config.as_deref())?;

    setup_tracing(args.verbose, args.plain, config.log_dir.as_deref());
    tracing::info!(version = detective_quest::VERSION, plain = args.plain, "starting");

    if args.plain {
        let mut game = Game::from_config(&config)?;
        return console::run(&mut game, io::stdin().lock(), stdout().lock());
    }

    run_tui(config)
}

fn run_tui(config: QuestConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = (|| -> Result<()> {
        while app.running {
            terminal.draw(|frame| app.render(frame))?;
            if !app.handle_input()? {
                break;
            }
        }
        Ok(())
    })();

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    outcome?;

    println!("\nThanks for playing Detective Quest.");
    if let Some(suspect) = app.game.verdict() {
        println!("Your prime suspect: {}", suspect.name);
    }
    Ok(())
}

/// Log to a file when a log directory is set; otherwise to stderr, but only
/// in plain mode since stderr output would tear the terminal UI.
fn setup_tracing(verbose: bool, plain: bool, log_dir: Option<&Path>) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("detective_quest=debug,info")
            } else {
                EnvFilter::new("detective_quest=info,warn")
            }
        })
    };

    if let Some(dir) = log_dir {
        match open_log_file(dir) {
            Ok((file, path)) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true);
                tracing_subscriber::registry()
                    .with(filter())
                    .with(file_layer)
                    .init();
                tracing::info!(path = %path.display(), "tracing initialized");
                return;
            }
            Err(err) if plain => eprintln!("logging to stderr: {err:#}"),
            Err(_) => return,
        }
    }

    if plain {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
}

fn open_log_file(dir: &Path) -> Result<(std::fs::File, PathBuf)> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("detective-quest.{}.log", std::process::id()));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok((file, path))
}
