//! Shared drawing helpers for the screens.

use crate::view::ImageView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const ACCENT: Color = Color::Rgb(245, 158, 11);
pub const PANEL_BG: Color = Color::Rgb(30, 41, 59);
pub const MUTED: Color = Color::Rgb(100, 116, 139);
const PLACEHOLDER_BG: Color = Color::Rgb(51, 65, 85);

/// Render a row of (key, action) hints, centered.
pub fn render_controls(frame: &mut Frame, area: Rect, controls: &[(&str, &str)]) {
    if area.height < 1 || controls.is_empty() {
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(line, Rect { height: 1, ..area });
}

/// Centered rectangle of at most `width` x `height`, keeping a 2-cell margin.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

/// Quest art tile. Terminals can't show the image itself, so an asset tile
/// shows its file name and a missing one shows the "NO IMAGE" placeholder.
pub fn render_image_tile(frame: &mut Frame, area: Rect, image: &ImageView) {
    let (block, text_style) = match image {
        ImageView::Asset(_) => (
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
            Style::default().fg(Color::White),
        ),
        ImageView::Placeholder => (
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .style(Style::default().bg(PLACEHOLDER_BG)),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ),
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let caption = Paragraph::new(Span::styled(image.caption(), text_style))
        .alignment(Alignment::Center);
    let y = inner.y + inner.height.saturating_sub(1) / 2;
    frame.render_widget(caption, Rect::new(inner.x, y, inner.width, 1));
}

/// Rank badge, e.g. `[ B ]`.
pub fn rank_span(rank: &str) -> Span<'static> {
    Span::styled(
        format!("[ {} ]", rank),
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    )
}
