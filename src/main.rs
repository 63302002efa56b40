use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio_util::sync::CancellationToken;

use prompt_assist::app::{App, OutputMode};
use prompt_assist::backend::{BackendClient, spawn_worker};
use prompt_assist::{config, logging};

/// How long to wait for input before running periodic work
const TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Compose image-generation prompts with keyword autocomplete
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial prompt text
    prompt: Option<String>,

    /// Backend base URL (overrides server.url from the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to a config file [default: ~/.config/prompt-assist/config.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    logging::init(args.log_file.as_deref())?;

    let mut config = config::load_config(args.config.as_deref())?;
    config::apply_server_override(&mut config, args.server.as_deref())?;
    log::info!("Using backend at {}", config.server.url);

    let client = BackendClient::new(
        &config.server.url,
        Duration::from_millis(config.server.timeout_ms),
    )?;

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();
    let worker = spawn_worker(client, request_rx, response_tx, shutdown.clone())?;

    let mut app = App::new(&config, args.prompt.as_deref().unwrap_or(""));
    app.connect_backend(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, &mut app));

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    shutdown.cancel();
    if worker.join().is_err() {
        log::warn!("Backend worker panicked");
    }

    result?;

    if app.output_mode() == Some(OutputMode::Prompt) {
        println!("{}", app.prompt());
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
