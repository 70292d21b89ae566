//! UI Rendering
//!
//! Main UI layout and rendering logic for the TUI.

use crate::client::AppStatus;
use crate::tui::app::{App, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows taken by everything except the records pane body
pub const CHROME_HEIGHT: u16 = 3 + 4 + 1 + 2;

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Upload form or search input
            Constraint::Min(5),    // Records
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    if app.status().shows_input() {
        widgets::render_upload_form(frame, chunks[1], app);
    } else {
        render_search_input(frame, chunks[1], app);
    }
    widgets::render_records(frame, chunks[2], app.records(), app.scroll_offset);
    render_status_bar(frame, chunks[3], app);

    widgets::render_toasts(frame, app.notifications.active());

    if app.view == View::Help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("CSV Search", Theme::title()),
        Span::styled(format!("  {} {}", Icons::DOT, app.config.base_url()), Theme::text_secondary()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    frame.render_widget(title, area);
}

fn render_search_input(frame: &mut Frame, area: Rect, app: &App) {
    let area = Rect {
        height: area.height.min(3),
        ..area
    };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.search_input, inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.status() {
        AppStatus::Idle => Span::styled("Choose a CSV file", Theme::text_secondary()),
        AppStatus::ReadyUpload => Span::styled("Ready to upload", Theme::text_secondary()),
        AppStatus::Uploading => Span::styled("Uploading...", Theme::active()),
        AppStatus::Error => Span::styled("Upload failed", Theme::error()),
        AppStatus::ReadyUsage => Span::styled(
            format!("{} records loaded", app.upload.data().len()),
            Theme::success(),
        ),
    };

    let mut shortcuts = Vec::new();
    if app.status().shows_input() {
        shortcuts.push(Span::styled(" [Enter]", Theme::shortcut_key()));
        shortcuts.push(Span::styled(" Choose file ", Theme::shortcut_desc()));
        shortcuts.push(Span::styled("[Ctrl+U]", Theme::shortcut_key()));
        shortcuts.push(Span::styled(" Upload ", Theme::shortcut_desc()));
    } else {
        shortcuts.push(Span::styled(" [↑/↓]", Theme::shortcut_key()));
        shortcuts.push(Span::styled(" Scroll ", Theme::shortcut_desc()));
    }
    shortcuts.push(Span::styled("[Ctrl+Q]", Theme::shortcut_key()));
    shortcuts.push(Span::styled(" Quit ", Theme::shortcut_desc()));
    shortcuts.push(Span::styled("[F1]", Theme::shortcut_key()));
    shortcuts.push(Span::styled(" Help", Theme::shortcut_desc()));

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter        ", Theme::shortcut_key()),
            Span::styled("Choose the typed file path", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+U       ", Theme::shortcut_key()),
            Span::styled("Upload the chosen file", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Typing       ", Theme::shortcut_key()),
            Span::styled("Search records once loaded", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("↑/↓          ", Theme::shortcut_key()),
            Span::styled("Scroll records", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("PageUp/Down  ", Theme::shortcut_key()),
            Span::styled("Scroll page", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+Q       ", Theme::shortcut_key()),
            Span::styled("Quit application", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+C       ", Theme::shortcut_key()),
            Span::styled("Force quit", Theme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Theme::text_dim())),
    ];

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
