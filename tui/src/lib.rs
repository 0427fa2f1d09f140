//! TUI rendering for rutero using ratatui.

mod input;
mod theme;

pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use rutero_engine::{App, Status, StatusKind};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Body input
            Constraint::Length(4), // Result panel
            Constraint::Min(3),    // Breakdown table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_input(frame, app, chunks[0], &palette, &glyphs);
    draw_result(frame, app, chunks[1], &palette, &glyphs);
    draw_breakdown(frame, app, chunks[2], &palette);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let border_style = match app.status() {
        Status::Empty => Style::default().fg(palette.text_muted),
        Status::Short => Style::default().fg(palette.warning),
        Status::Valid => Style::default().fg(palette.success),
    };

    let hints = vec![
        Span::styled("c", styles::key_highlight(palette)),
        Span::styled(" copy  ", styles::key_hint(palette)),
        Span::styled("Ctrl+U", styles::key_highlight(palette)),
        Span::styled(" clear  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
    ];

    let prefix = format!(" {} ", glyphs.prompt);
    let prefix_width = prefix.width() as u16;
    let input = Paragraph::new(Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.primary)),
        Span::styled(app.body(), Style::default().fg(palette.text_primary)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_top(Line::from(Span::styled(
                " Body ",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_top(Line::from(hints).alignment(Alignment::Right)),
    );
    frame.render_widget(input, area);

    let cursor_x = area
        .x
        .saturating_add(1 + prefix_width)
        .saturating_add(app.body().width() as u16);
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (dv_text, rut_text) = match app.computed() {
        Some(computed) => (computed.dv.to_string(), computed.formatted.clone()),
        None => (glyphs.placeholder.to_string(), glyphs.placeholder.to_string()),
    };

    let label = Style::default().fg(palette.text_muted);
    let value = if app.computed().is_some() {
        styles::result_value(palette)
    } else {
        Style::default().fg(palette.text_muted)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Verification digit  ", label),
            Span::styled(dv_text, value),
        ]),
        Line::from(vec![
            Span::styled("Formatted RUT       ", label),
            Span::styled(rut_text, value),
        ]),
    ];

    let result = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.text_muted))
            .padding(Padding::horizontal(1))
            .title_top(Line::from(Span::styled(
                " Result ",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ))),
    );
    frame.render_widget(result, area);
}

fn draw_breakdown(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title_top(Line::from(Span::styled(
            " Step by step ",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));

    let Some(computed) = app.computed() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Type a body above to see the modulo-11 steps.",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let breakdown = &computed.breakdown;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        breakdown_header(),
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD),
    )));

    for row in &breakdown.rows {
        lines.push(Line::from(Span::styled(
            breakdown_row(row.position, row.digit, row.weight, row.product, row.running),
            Style::default().fg(palette.text_secondary),
        )));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(breakdown_header().len()),
        Style::default().fg(palette.primary_dim),
    )));
    lines.push(aggregate_line("Sum", breakdown.sum.to_string(), palette));
    lines.push(aggregate_line(
        "Sum % 11",
        breakdown.sum_mod.to_string(),
        palette,
    ));
    lines.push(aggregate_line(
        "11 - (Sum % 11)",
        breakdown.remainder.to_string(),
        palette,
    ));
    lines.push(aggregate_line("DV", breakdown.dv.to_string(), palette));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn aggregate_line(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:>18}  "),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn breakdown_header() -> String {
    format!(
        "{:>3}  {:>5}  {:>6}  {:>7}  {:>7}",
        "#", "Digit", "Weight", "Product", "Running"
    )
}

fn breakdown_row(position: usize, digit: u32, weight: u32, product: u32, running: u32) -> String {
    format!("{position:>3}  {digit:>5}  {weight:>6}  {product:>7}  {running:>7}")
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (message, kind) = app.status_line();
    let (icon, color) = match kind {
        StatusKind::Error => (glyphs.status_err, palette.error),
        StatusKind::Warning => (glyphs.status_warn, palette.warning),
        StatusKind::Success => (glyphs.status_ok, palette.success),
        StatusKind::Info => (glyphs.status_ok, palette.text_secondary),
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{icon} {message}"), Style::default().fg(color)),
    ]));
    frame.render_widget(status, area);
}
