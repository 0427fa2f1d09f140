//! rutero CLI - binary entry point and terminal session management.
//!
//! Two modes:
//!
//! - interactive (no arguments): a TUI form where typing a RUT body live-updates
//!   the verification digit, the formatted identifier and the modulo-11
//!   breakdown table;
//! - one-shot (`rutero <body>`): print the same results to stdout and exit.
//!
//! The event loop is synchronous: poll input with a small timeout, advance
//! app timers, draw. Nothing in this program blocks or runs concurrently.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rutero_core::{Body, Breakdown, compute, format_rut, group_thousands};
use rutero_engine::{App, RuteroConfig};
use rutero_tui::{draw, handle_events};

const FRAME_DURATION: Duration = Duration::from_millis(33);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: <config_dir>/rutero/logs/rutero.log
    if let Some(config_path) = RuteroConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("rutero.log"));
    }

    // Fallback: ./.rutero/logs/rutero.log (useful in constrained environments)
    candidates.push(PathBuf::from(".rutero").join("logs").join("rutero.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, bracketed paste and the alternate screen are all restored on
/// drop, so the terminal stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    if let Some(arg) = env::args().nth(1) {
        if arg == "-h" || arg == "--help" {
            print_usage();
            return Ok(());
        }
        return run_once(&arg);
    }

    let config = RuteroConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "Ignoring invalid config");
        None
    });
    let options = config.map(|c| c.ui_options()).unwrap_or_default();
    let mut app = App::new(options);

    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, &mut app)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        handle_events(app, FRAME_DURATION)?;
        app.tick();
        if app.should_quit() {
            return Ok(());
        }
        terminal.draw(|frame| draw(frame, app))?;
    }
}

/// Compute and print everything for a body given on the command line.
///
/// Separators in the argument are tolerated (`rutero 12.345.678` works), but
/// the digits must be non-empty and at most nine.
fn run_once(input: &str) -> Result<()> {
    let body = Body::parse(input)?;
    let dv = compute(&body);
    let breakdown = Breakdown::of(&body);

    println!("Body  {}", group_thousands(body.as_str()));
    println!("DV    {dv}");
    println!("RUT   {}", format_rut(&body, dv));
    println!();
    println!(
        "{:>3}  {:>5}  {:>6}  {:>7}  {:>7}",
        "#", "Digit", "Weight", "Product", "Running"
    );
    for row in &breakdown.rows {
        println!(
            "{:>3}  {:>5}  {:>6}  {:>7}  {:>7}",
            row.position, row.digit, row.weight, row.product, row.running
        );
    }
    println!();
    println!("{:>15}  {}", "Sum", breakdown.sum);
    println!("{:>15}  {}", "Sum % 11", breakdown.sum_mod);
    println!("{:>15}  {}", "11 - (Sum % 11)", breakdown.remainder);
    println!("{:>15}  {}", "DV", breakdown.dv);
    Ok(())
}

fn print_usage() {
    println!("rutero - Chilean RUT verification-digit calculator");
    println!();
    println!("Usage:");
    println!("  rutero            start the interactive TUI");
    println!("  rutero <body>     print the DV and breakdown for a body");
    println!();
    println!("Interactive keys: digits type, Backspace deletes, Ctrl+U clears,");
    println!("c copies the formatted RUT, q quits.");
}
