use super::common::{rank_span, render_image_tile, ACCENT, MUTED};
use crate::view::QuestCardView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 5;
const THUMBNAIL_WIDTH: u16 = 18;

/// Draws the quest board: one card per quest, stacked.
pub fn draw_quest_board(frame: &mut Frame, area: Rect, cards: &[QuestCardView]) {
    let mut constraints: Vec<Constraint> =
        cards.iter().map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (card, row) in cards.iter().zip(rows.iter()) {
        draw_card(frame, *row, card);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &QuestCardView) {
    let border_color = if card.selected { ACCENT } else { MUTED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(THUMBNAIL_WIDTH), Constraint::Min(0)])
        .split(inner);

    render_image_tile(frame, columns[0], &card.image);

    let title_style = if card.selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let pointer = if card.selected { "▶ " } else { "  " };

    let lines = vec![
        Line::from(vec![
            Span::styled(pointer, Style::default().fg(ACCENT)),
            rank_span(card.rank),
            Span::raw(" "),
            Span::styled(card.title.clone(), title_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.reward_text),
            Style::default().fg(Color::Cyan),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), columns[1]);
}
