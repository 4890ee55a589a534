//! Terminal rendering of a projected [`View`].
//!
//! Screens never read game state directly; they draw the view description
//! produced by [`crate::view::project`].

mod active_scene;
mod board_scene;
pub mod common;
mod detail_scene;
mod dialog;
mod log_scene;
mod opening_scene;
mod profile_scene;

use crate::view::{BodyView, HeaderView, NavTabView, View};
use common::{render_controls, ACCENT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GAME_TITLE: &str = "LOCAL QUEST";

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, view: &View) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Controls
        ])
        .split(size);

    draw_header(frame, chunks[0], &view.header);
    draw_body(frame, chunks[1], &view.body);
    draw_nav(frame, chunks[2], &view.nav);
    render_controls(frame, chunks[3], &view.controls);

    if let Some(dialog) = &view.dialog {
        dialog::draw_dialog(frame, size, dialog);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, header: &HeaderView) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        format!(" {}", GAME_TITLE),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, halves[0]);

    let stats = Paragraph::new(Line::from(vec![
        Span::styled(
            header.level_text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(header.gold_text.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::raw(header.music_icon),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(stats, halves[1]);
}

fn draw_body(frame: &mut Frame, area: Rect, body: &BodyView) {
    let block = Block::default()
        .title(body.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match body {
        BodyView::Opening(opening) => opening_scene::draw_opening(frame, inner, opening),
        BodyView::QuestBoard(cards) => board_scene::draw_quest_board(frame, inner, cards),
        BodyView::QuestDetail(detail) => detail_scene::draw_quest_detail(frame, inner, detail),
        BodyView::ActiveQuest(active) => active_scene::draw_active_quest(frame, inner, active),
        BodyView::Report {
            entries,
            empty_text,
            scroll_text,
        } => log_scene::draw_adventure_log(
            frame,
            inner,
            entries,
            *empty_text,
            scroll_text.as_deref(),
        ),
        BodyView::Profile(profile) => profile_scene::draw_profile(frame, inner, profile),
    }
}

/// Draws the nav bar with the current screen's tab highlighted.
fn draw_nav(frame: &mut Frame, area: Rect, tabs: &[NavTabView]) {
    let mut spans = Vec::new();
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if tab.active {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", tab.key, tab.label), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
