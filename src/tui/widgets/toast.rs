//! Toast Widget
//!
//! Stacks active notifications in the top-right corner.

use crate::client::{Toast, ToastKind};
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 48;

pub fn render_toasts(frame: &mut Frame, toasts: &[Toast]) {
    if toasts.is_empty() {
        return;
    }

    let full = frame.area();
    let width = TOAST_WIDTH.min(full.width);

    let lines: Vec<Line> = toasts
        .iter()
        .map(|toast| {
            let (icon, style) = match toast.kind {
                ToastKind::Success => (Icons::SUCCESS, Theme::success()),
                ToastKind::Error => (Icons::ERROR, Theme::error()),
            };
            Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::styled(toast.message.clone(), Theme::text()),
            ])
        })
        .collect();

    // Size the box to the wrapped text plus borders
    let wrap = Wrap { trim: true };
    let text_lines = Paragraph::new(lines.clone())
        .wrap(wrap)
        .line_count(width.saturating_sub(2));
    let height = u16::try_from(text_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(full.height);
    let area = Rect {
        x: full.x + full.width - width,
        y: full.y,
        width,
        height,
    };

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .wrap(wrap)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_focused()),
        );
    frame.render_widget(paragraph, area);
}
