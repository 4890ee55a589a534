use super::common::ACCENT;
use crate::view::OpeningView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draws the king's greeting. The start prompt shows once typing is done.
pub fn draw_opening(frame: &mut Frame, area: Rect, opening: &OpeningView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Padding
            Constraint::Length(3), // Avatar
            Constraint::Length(9), // Speech box
            Constraint::Length(2), // Start prompt
            Constraint::Min(0),
        ])
        .split(area);

    let avatar = Paragraph::new(vec![
        Line::from("👑"),
        Line::from(Span::styled(
            opening.speaker,
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(avatar, chunks[1]);

    let speech_lines: Vec<Line> = opening
        .text
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    let speech = Paragraph::new(speech_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(speech, chunks[2]);

    if opening.ready {
        let prompt = Paragraph::new(Span::styled(
            "▶ Begin the adventure",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[3]);
    }
}
