use super::common::{ACCENT, PANEL_BG};
use crate::view::ProfileView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the hero's status page.
pub fn draw_profile(frame: &mut Frame, area: Rect, profile: &ProfileView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hero name
            Constraint::Length(3), // EXP gauge
            Constraint::Length(5), // Stats panel
            Constraint::Min(0),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled("🛡", Style::default().fg(ACCENT))),
        Line::from(Span::styled(
            profile.hero_text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" EXP "))
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .percent(profile.exp_percent);
    frame.render_widget(gauge, chunks[1]);

    let stats = Paragraph::new(vec![
        Line::from(profile.exp_text.clone()),
        Line::from(profile.gold_text.clone()),
        Line::from(profile.cleared_text.clone()),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(PANEL_BG)),
    );
    frame.render_widget(stats, chunks[2]);
}
