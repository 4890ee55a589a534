use super::common::{ACCENT, MUTED};
use crate::view::ActiveQuestView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draws the in-progress screen with the simulated camera frame.
pub fn draw_active_quest(frame: &mut Frame, area: Rect, active: &ActiveQuestView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner + title
            Constraint::Min(5),    // Camera mock
            Constraint::Length(2), // Field notes + start time
        ])
        .split(area);

    let heading = vec![
        Line::from(Span::styled(active.banner, Style::default().fg(ACCENT))),
        Line::from(Span::styled(
            active.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        chunks[0],
    );

    let camera = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(MUTED));
    let inner = camera.inner(chunks[1]);
    frame.render_widget(camera, chunks[1]);
    if inner.height > 0 {
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        frame.render_widget(
            Paragraph::new(active.camera_text).alignment(Alignment::Center),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    let footer = vec![
        Line::from(Span::styled(
            active.field_notes_text.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            active.started_text.clone(),
            Style::default().fg(MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[2],
    );
}
