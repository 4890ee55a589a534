use super::common::{ACCENT, MUTED};
use crate::view::ReportEntryView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the adventure log from the scroll position, newest entry first.
/// Entries past the bottom of the area are reached by scrolling.
pub fn draw_adventure_log(
    frame: &mut Frame,
    area: Rect,
    entries: &[ReportEntryView],
    empty_text: Option<&str>,
    scroll_text: Option<&str>,
) {
    if let Some(text) = empty_text {
        let message = Paragraph::new(Span::styled(text.to_string(), Style::default().fg(MUTED)))
            .alignment(Alignment::Center);
        let y = area.y + area.height / 3;
        frame.render_widget(message, Rect::new(area.x, y, area.width, 1));
        return;
    }

    let mut lines = Vec::new();
    if let Some(text) = scroll_text {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(MUTED),
        )));
    }
    for entry in entries {
        lines.push(Line::from(Span::styled(
            entry.date_text.clone(),
            Style::default().fg(ACCENT),
        )));
        lines.push(Line::from(Span::styled(
            entry.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(entry.narrative.lines().map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::Gray),
            ))
        }));
        lines.push(Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(MUTED),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
