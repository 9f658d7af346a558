use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use zhname::ai::worker::spawn_worker;
use zhname::app::App;
use zhname::config::{Config, ConfigResult, load_config};
use zhname::favorites::format_export;
use zhname::form::FormState;
use zhname::headless::generate_once;

/// Event poll timeout; also the refresh rate for the spinner and AI responses
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Chinese name generator for English speakers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// English name to pre-fill
    #[arg(short, long)]
    name: Option<String>,

    /// Interests to pre-fill, e.g. "travel, photography"
    #[arg(short, long)]
    interests: Option<String>,

    /// Path to a config file (default: ~/.config/zhname/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate once and print the names instead of starting the TUI
    #[arg(short, long)]
    print: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install before the terminal is taken over so panics restore it
    color_eyre::install()?;
    zhname::logging::init();

    let ConfigResult { config, warning } = load_config(args.config.as_deref());

    if args.print {
        if let Some(warning) = &warning {
            eprintln!("Warning: {}", warning);
        }
        return print_names(&config, &args);
    }

    let terminal = ratatui::init();
    let result = run(terminal, &config, &args, warning);
    ratatui::restore();

    result
}

fn print_names(config: &Config, args: &Args) -> Result<()> {
    let suggestions = generate_once(
        &config.ai,
        args.name.as_deref().unwrap_or_default(),
        args.interests.as_deref().unwrap_or_default(),
    )?;

    if suggestions.is_empty() {
        println!("No names returned");
    } else {
        print!("{}", format_export(&suggestions));
    }
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    config: &Config,
    args: &Args,
    warning: Option<String>,
) -> Result<()> {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_worker(&config.ai, request_rx, response_tx);

    let mut app = App::new(config);
    app.form = FormState::with_values(args.name.as_deref(), args.interests.as_deref());
    app.ai.set_channels(request_tx, response_rx);
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(POLL_INTERVAL)?;
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    app.ai.cancel_in_flight_request();
    app.speech.stop();
    Ok(())
}
