//! Records Widget
//!
//! One block per record, one `field: value` line per field.

use crate::models::Record;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn record_lines(records: &[Record]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(record_line_count(records));

    for (idx, record) in records.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("#{}", idx + 1),
            Theme::text_dim(),
        )));
        for (name, value) in record.iter() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(name.to_string(), Theme::field_name()),
                Span::styled(": ", Theme::text_secondary()),
                Span::styled(value.to_string(), Theme::text()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Number of lines `record_lines` produces
pub fn record_line_count(records: &[Record]) -> usize {
    records.iter().map(|r| r.len() + 2).sum()
}

pub fn render_records(frame: &mut Frame, area: Rect, records: &[Record], scroll: u16) {
    let block = Block::default()
        .title(format!(" Results ({}) ", records.len()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if records.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No records",
            Theme::text_dim(),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let paragraph = Paragraph::new(record_lines(records)).scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}
