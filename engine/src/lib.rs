//! Application state for rutero - the calculator's state machine without
//! any TUI dependencies.
//!
//! Every edit re-derives the full result set (verification digit, formatted
//! identifier, breakdown) from the current body; nothing is cached across
//! keystrokes and nothing persists.

use std::time::{Duration, Instant};

use rutero_core::{Body, Breakdown, Dv, MAX_BODY_LEN, compute, format_rut};

mod config;
pub use config::{AppConfig, ConfigError, RuteroConfig, UiOptions};

/// Soft lower bound for real RUT bodies. Display heuristic only; the
/// checksum is computed and shown for any non-empty body.
pub const RECOMMENDED_MIN_LEN: usize = 7;

/// How long the "Copied!" feedback stays on screen.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1200);

/// Validation state of the current body, as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No digits entered yet.
    Empty,
    /// Fewer than [`RECOMMENDED_MIN_LEN`] digits; result still shown.
    Short,
    Valid,
}

/// Severity of the current status line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Success,
    Error,
}

/// Everything derived from a non-empty body.
#[derive(Debug, Clone)]
pub struct Computed {
    pub body: Body,
    pub dv: Dv,
    pub formatted: String,
    pub breakdown: Breakdown,
}

pub struct App {
    /// Sanitized digits, at most [`MAX_BODY_LEN`] of them.
    body: String,
    computed: Option<Computed>,
    copy_feedback_until: Option<Instant>,
    clipboard_error: Option<String>,
    ui_options: UiOptions,
    should_quit: bool,
    tick: usize,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            body: String::new(),
            computed: None,
            copy_feedback_until: None,
            clipboard_error: None,
            ui_options,
            should_quit: false,
            tick: 0,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn computed(&self) -> Option<&Computed> {
        self.computed.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.body.is_empty() {
            Status::Empty
        } else if self.body.len() < RECOMMENDED_MIN_LEN {
            Status::Short
        } else {
            Status::Valid
        }
    }

    /// Insert a typed character. Non-digits are dropped at this boundary and
    /// the body never grows past [`MAX_BODY_LEN`] digits.
    pub fn insert_char(&mut self, c: char) {
        if !c.is_ascii_digit() || self.body.len() >= MAX_BODY_LEN {
            return;
        }
        self.body.push(c);
        self.recompute();
    }

    pub fn backspace(&mut self) {
        if self.body.pop().is_some() {
            self.recompute();
        }
    }

    /// Reset to the same state as an empty field.
    pub fn clear(&mut self) {
        self.body.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.clipboard_error = None;
        self.computed = Body::sanitize(&self.body).map(|body| {
            let dv = compute(&body);
            Computed {
                formatted: format_rut(&body, dv),
                breakdown: Breakdown::of(&body),
                dv,
                body,
            }
        });
        tracing::debug!(body = %self.body, "Recomputed");
    }

    /// Text to place on the clipboard, when a verification digit exists.
    #[must_use]
    pub fn copy_payload(&self) -> Option<&str> {
        self.computed.as_ref().map(|c| c.formatted.as_str())
    }

    pub fn notify_copied(&mut self) {
        self.clipboard_error = None;
        self.copy_feedback_until = Some(Instant::now() + COPY_FEEDBACK_DURATION);
    }

    pub fn notify_copy_failed(&mut self, message: impl Into<String>) {
        self.copy_feedback_until = None;
        self.clipboard_error = Some(message.into());
    }

    #[must_use]
    pub fn copy_feedback_active(&self) -> bool {
        self.copy_feedback_until.is_some()
    }

    /// Status bar content. Clipboard failures outrank copy feedback, which
    /// outranks the body-derived status.
    #[must_use]
    pub fn status_line(&self) -> (String, StatusKind) {
        if let Some(err) = &self.clipboard_error {
            return (err.clone(), StatusKind::Error);
        }
        if self.copy_feedback_active() {
            return ("Copied to clipboard".to_string(), StatusKind::Success);
        }
        match self.status() {
            Status::Empty => (
                "Enter a body to compute its verification digit".to_string(),
                StatusKind::Info,
            ),
            Status::Short => (
                format!("Short body - real RUTs have {RECOMMENDED_MIN_LEN}-{MAX_BODY_LEN} digits"),
                StatusKind::Warning,
            ),
            Status::Valid => ("Checksum computed (modulo 11)".to_string(), StatusKind::Success),
        }
    }

    /// Advance UI timers. Called once per frame.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(until) = self.copy_feedback_until
            && Instant::now() >= until
        {
            self.copy_feedback_until = None;
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::{App, Status, StatusKind, UiOptions};
    use rutero_core::MAX_BODY_LEN;

    fn test_app() -> App {
        App::new(UiOptions::default())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn typing_digits_derives_the_result() {
        let mut app = test_app();
        type_str(&mut app, "12345678");

        let computed = app.computed().expect("non-empty body");
        assert_eq!(computed.dv.as_char(), '5');
        assert_eq!(computed.formatted, "12.345.678-5");
        assert_eq!(computed.breakdown.rows.len(), 8);
        assert_eq!(app.status(), Status::Valid);
    }

    #[test]
    fn non_digits_are_dropped_at_the_boundary() {
        let mut app = test_app();
        type_str(&mut app, "12a3-4 5");
        assert_eq!(app.body(), "12345");
    }

    #[test]
    fn body_never_grows_past_the_cap() {
        let mut app = test_app();
        type_str(&mut app, "123456789012345");
        assert_eq!(app.body().len(), MAX_BODY_LEN);
        assert_eq!(app.body(), "123456789");
    }

    #[test]
    fn empty_body_has_no_result() {
        let app = test_app();
        assert!(app.computed().is_none());
        assert!(app.copy_payload().is_none());
        assert_eq!(app.status(), Status::Empty);
        assert_eq!(app.status_line().1, StatusKind::Info);
    }

    #[test]
    fn short_body_warns_but_still_computes() {
        let mut app = test_app();
        type_str(&mut app, "1");

        assert_eq!(app.status(), Status::Short);
        assert_eq!(app.status_line().1, StatusKind::Warning);
        let computed = app.computed().expect("short body still computes");
        assert_eq!(computed.dv.as_char(), '9');
        assert_eq!(computed.formatted, "1-9");
    }

    #[test]
    fn clear_matches_the_initial_state() {
        let mut app = test_app();
        type_str(&mut app, "987654321");
        app.clear();

        assert_eq!(app.body(), "");
        assert!(app.computed().is_none());
        assert_eq!(app.status(), Status::Empty);
    }

    #[test]
    fn backspace_recomputes() {
        let mut app = test_app();
        type_str(&mut app, "12");
        app.backspace();
        assert_eq!(app.body(), "1");
        assert_eq!(app.computed().expect("one digit").dv.as_char(), '9');

        app.backspace();
        assert!(app.computed().is_none());
        app.backspace(); // already empty, no-op
        assert_eq!(app.body(), "");
    }

    #[test]
    fn copy_feedback_and_failure_reporting() {
        let mut app = test_app();
        type_str(&mut app, "12345");

        app.notify_copied();
        assert!(app.copy_feedback_active());
        assert_eq!(app.status_line().1, StatusKind::Success);

        app.notify_copy_failed("Could not copy - select and copy manually");
        assert!(!app.copy_feedback_active());
        let (message, kind) = app.status_line();
        assert_eq!(kind, StatusKind::Error);
        assert_eq!(message, "Could not copy - select and copy manually");

        // Any edit clears the failure message.
        app.insert_char('9');
        assert_eq!(app.status_line().1, StatusKind::Warning);
    }

    #[test]
    fn quit_flag_round_trips() {
        let mut app = test_app();
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
    }

    #[test]
    fn tick_counter_advances() {
        let mut app = test_app();
        app.tick();
        app.tick();
        assert_eq!(app.tick_count(), 2);
    }
}
