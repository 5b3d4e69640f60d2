use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use termfolio::app::config::{config_dir, Config};
use termfolio::app::persistence;
use termfolio::app::{
    r#loop::run_loop,
    state::{AppState, View},
};
use termfolio::content::{self, profile::Profile};
use termfolio::domain::chime::{Chime, SilentChime};
use termfolio::infrastructure::{bell::TerminalBell, latency::UniformLatency};
use termfolio::theme::PaletteType;

/// An interactive portfolio that looks and feels like a terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: ~/.config/termfolio/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Profile TOML replacing the built-in one
    #[arg(short, long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Colour theme
    #[arg(short, long, value_enum)]
    theme: Option<PaletteType>,

    /// Never ring the terminal bell
    #[arg(long)]
    silent: bool,

    /// Start on the desktop view
    #[arg(long)]
    desktop: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

/// The TUI owns the screen, so log lines go to a file. No file, no logger.
fn init_logging() {
    let Some(dir) = config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("termfolio.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("TERMFOLIO_LOG", "warn"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    init_logging();
    let args = Args::parse();

    // Everything that can fail on bad input happens before raw mode.
    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.silent {
        config.sound = false;
    }
    if args.desktop {
        config.start_in_desktop = true;
    }
    if args.profile.is_some() {
        config.profile = args.profile;
    }

    let profile = match &config.profile {
        Some(path) => Profile::load_from(path),
        None => Profile::builtin(),
    }
    .context("failed to load profile")?;
    let portfolio = content::assemble(&profile, chrono::Local::now().date_naive())
        .context("failed to assemble portfolio")?;

    let visits = persistence::get_visits_path()
        .map(|path| persistence::record_visit(&path))
        .unwrap_or(0);
    log::info!(
        "starting {} v{} (visit #{visits}, theme {:?})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.theme
    );

    let (min, max) = config.latency.window();
    let chime: Box<dyn Chime> = if config.sound {
        Box::new(TerminalBell)
    } else {
        Box::new(SilentChime)
    };
    let view = if config.start_in_desktop {
        View::Desktop
    } else {
        View::Terminal
    };
    let app_state = AppState::new(portfolio, Box::new(UniformLatency::new(min, max)), chime)
        .with_palette(config.theme)
        .with_view(view)
        .with_visits(visits);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("terminal loop failed: {err:?}");
        println!("{err:?}");
    }

    Ok(())
}
