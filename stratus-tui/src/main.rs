//! Binary crate for the `stratus` terminal weather app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive configuration
//! - Terminal lifecycle (raw mode, alternate screen, mouse capture)
//! - Driving the app state machine and executing its effects

mod app;
mod cli;
mod ui;

use std::{io, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc;

use stratus_core::{Config, OpenWeatherProvider, WeatherProvider};

use crate::app::{App, BLUR_HIDE_DELAY, Effect, Msg};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    if let Some(cli::Command::Configure) = args.command {
        return cli::configure();
    }

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let config = Config::load()?;
    // Resolve the credential before touching the terminal so the hint prints
    // on a normal screen.
    let api_key = config.resolved_api_key()?;
    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherProvider::new(api_key));
    let startup_city = args.startup_city(&config);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, provider, startup_city).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn init_tracing(path: &std::path::Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    provider: Arc<dyn WeatherProvider>,
    startup_city: String,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut app = App::new();
    let size = terminal.size()?;
    app.terminal_area = Rect::new(0, 0, size.width, size.height);

    // The panel shows the placeholder until this first fetch lands.
    if let Some(effect) = app.search(startup_city) {
        run_effect(effect, &provider, &tx);
    }

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        // Completions from spawned tasks.
        while let Ok(msg) = rx.try_recv() {
            if let Some(effect) = app.update(msg) {
                run_effect(effect, &provider, &tx);
            }
        }

        if event::poll(Duration::from_millis(50))? {
            let msg = match event::read()? {
                Event::Key(key) => Some(Msg::Key(key)),
                Event::Mouse(mouse) => Some(Msg::Mouse(mouse)),
                Event::Resize(width, height) => Some(Msg::Resize(width, height)),
                _ => None,
            };
            if let Some(msg) = msg {
                if let Some(effect) = app.update(msg) {
                    run_effect(effect, &provider, &tx);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Execute a reducer effect by spawning the task it asks for.
fn run_effect(effect: Effect, provider: &Arc<dyn WeatherProvider>, tx: &mpsc::UnboundedSender<Msg>) {
    match effect {
        Effect::Fetch { seq, city } => {
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = provider.current_weather(&city).await;
                let _ = tx.send(Msg::FetchDone { seq, result });
            });
        }
        Effect::ScheduleHide { generation } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(BLUR_HIDE_DELAY).await;
                let _ = tx.send(Msg::HideSuggestions { generation });
            });
        }
    }
}
