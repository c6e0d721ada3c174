use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod app;
mod config;
mod error;
mod help;
mod input;
mod notification;
mod suggest;
#[cfg(test)]
mod test_utils;
mod widgets;

use app::{App, OutputMode};
use suggest::{SuggestEndpoint, worker};

/// Interactive search box with server-backed suggestions
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive search box with server-backed suggestions"
)]
struct Args {
    /// Base URL of the server exposing the /suggest endpoint
    endpoint: String,
}

fn main() -> Result<()> {
    // Writes to /tmp/siq-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/siq-debug.log")
            .expect("Failed to open /tmp/siq-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SIQ DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Validate before touching the terminal so errors print normally
    let endpoint = SuggestEndpoint::new(&args.endpoint)?;

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config);
    let result = run(terminal, app, endpoint, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app);

    #[cfg(debug_assertions)]
    log::debug!("=== SIQ DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    endpoint: SuggestEndpoint,
    config_result: config::ConfigResult,
) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_suggest_worker(&mut app, endpoint);

    // The search box starts focused; load suggestions for any preset text
    app.focus_search_box();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Set up the suggestion worker thread and channels
fn setup_suggest_worker(app: &mut App, endpoint: SuggestEndpoint) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.suggest.set_channels(request_tx, response_rx);

    worker::spawn_worker(endpoint, request_rx, response_tx);
}

/// Handle output after terminal is restored
fn handle_output(app: &App) {
    match app.output_mode() {
        Some(OutputMode::Query) => {
            // Print the submitted search text
            println!("{}", app.search_text());
        }
        None => {
            // No output mode (exited with Ctrl+C, q, or Esc)
        }
    }
}
