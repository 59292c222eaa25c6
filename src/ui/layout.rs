//! Layout components (header, content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Study Abroad Enquiry",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.route()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::styled(
        format!(" {}", get_view_hints(&app.state.current_view)),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        let color = if app.is_submitting() {
            Color::Yellow
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Form => "Tab:next  ←/→:choose  Space:select  ^S:submit  Esc:quit",
        View::ThankYou | View::Failed => "Enter:new enquiry  q:quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status_rows() {
        let (header, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(status.height, 1);
        assert_eq!(content.height, 22);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_hints_mention_submit_on_form() {
        assert!(get_view_hints(&View::Form).contains("submit"));
        assert!(get_view_hints(&View::Failed).contains("quit"));
    }
}
