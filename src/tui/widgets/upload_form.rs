//! Upload Form Widget
//!
//! Path input plus the upload button, shown until a dataset is loaded.

use crate::client::AppStatus;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_upload_form(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(" CSV file ")
        .borders(Borders::ALL)
        .border_style(if status.input_disabled() {
            Theme::border()
        } else {
            Theme::border_focused()
        });
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);
    frame.render_widget(&app.path_input, inner);

    let mut spans = Vec::new();
    if let Some(text) = status.button_text() {
        let style = if status == AppStatus::Uploading {
            Theme::button_disabled()
        } else {
            Theme::button()
        };
        spans.push(Span::styled(format!(" {} ", text), style));
        if status == AppStatus::ReadyUpload {
            spans.push(Span::styled(" [Ctrl+U]", Theme::shortcut_key()));
        }
    }
    if let Some(file) = app.upload.file() {
        spans.push(Span::styled(
            format!("  {}", file.display()),
            Theme::text_secondary(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}
