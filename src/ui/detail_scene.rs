use super::common::{rank_span, render_image_tile, ACCENT, MUTED, PANEL_BG};
use crate::view::QuestDetailView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the quest detail: art, description and party assignment.
pub fn draw_quest_detail(frame: &mut Frame, area: Rect, detail: &QuestDetailView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Art
            Constraint::Min(6),    // Description + facts
            Constraint::Length(6), // Party
        ])
        .split(area);

    let art_area = Rect {
        x: chunks[0].x + chunks[0].width.saturating_sub(24) / 2,
        width: 24.min(chunks[0].width),
        ..chunks[0]
    };
    render_image_tile(frame, art_area, &detail.image);

    let mut lines = vec![
        Line::from(vec![
            rank_span(detail.rank),
            Span::raw(" "),
            Span::styled(
                detail.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(detail.description.clone()),
        Line::from(""),
    ];
    lines.extend(
        detail
            .facts
            .iter()
            .map(|fact| Line::from(Span::styled(fact.clone(), Style::default().fg(Color::Cyan)))),
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    draw_party(frame, chunks[2], detail);
}

fn draw_party(frame: &mut Frame, area: Rect, detail: &QuestDetailView) {
    let mut lines: Vec<Line> = detail
        .party
        .iter()
        .map(|role| {
            Line::from(vec![
                Span::styled(format!("{:<20}", role.role), Style::default().fg(Color::White)),
                Span::styled(role.member, Style::default().fg(ACCENT)),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        detail.party_note,
        Style::default().fg(MUTED),
    )));

    let party = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Party ")
            .borders(Borders::ALL)
            .style(Style::default().bg(PANEL_BG)),
    );
    frame.render_widget(party, area);
}
