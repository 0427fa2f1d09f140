//! Input handling for the rutero TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::warn;

use rutero_engine::App;

/// Drain pending terminal events into the app, waiting at most `timeout`
/// for the first one. Quit is signalled through [`App::should_quit`].
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<()> {
    if !event::poll(timeout)? {
        return Ok(());
    }
    loop {
        apply_event(app, event::read()?);
        if !event::poll(Duration::ZERO)? {
            return Ok(());
        }
    }
}

fn apply_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return;
            }
            handle_key(app, key);
        }
        Event::Paste(text) => {
            // Non-digits are dropped by the engine, so pasting a formatted
            // RUT like "12.345.678" leaves just the body.
            for c in text.chars() {
                app.insert_char(c);
            }
        }
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.request_quit(),
            KeyCode::Char('u') => app.clear(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => app.insert_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.clear(),
        KeyCode::Char('c' | 'C') => copy_to_clipboard(app),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

/// Write the formatted identifier to the system clipboard and report the
/// outcome to the app. No-op while there is nothing to copy.
fn copy_to_clipboard(app: &mut App) {
    let Some(payload) = app.copy_payload().map(str::to_string) else {
        return;
    };
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(payload)) {
        Ok(()) => app.notify_copied(),
        Err(err) => {
            warn!(%err, "Clipboard write failed");
            app.notify_copy_failed("Could not copy automatically - select and copy manually");
        }
    }
}
