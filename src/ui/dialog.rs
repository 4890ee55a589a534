use super::common::{centered_rect, render_controls, ACCENT};
use crate::view::{DialogTone, DialogView};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 48;

fn tone_color(tone: DialogTone) -> Color {
    match tone {
        DialogTone::Warning => Color::Red,
        DialogTone::Celebration => ACCENT,
        DialogTone::Info => Color::Cyan,
    }
}

/// Draws a modal dialog as an overlay, centered on `area`.
pub fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &DialogView) {
    // Border + blank line + body + blank line + controls
    let height = dialog.lines.len() as u16 + 5;
    let dialog_area = centered_rect(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, dialog_area);

    let color = tone_color(dialog.tone);
    let block = Block::default()
        .title(Line::from(Span::styled(
            dialog.title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let mut lines = vec![Line::from("")];
    lines.extend(dialog.lines.iter().map(|line| Line::from(line.clone())));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );

    if inner.height > 0 {
        let controls_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        render_controls(frame, controls_area, &dialog.controls);
    }
}
