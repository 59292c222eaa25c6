//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line text input with its label as the block title
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = Vec::with_capacity(2);
    if field.is_empty() && !is_active {
        spans.push(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(field.as_text(), value_style));
    }
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a titled box around arbitrary content lines
pub fn draw_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    is_active: bool,
) {
    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {title} "), title_style))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(content).block(block), area);
}
