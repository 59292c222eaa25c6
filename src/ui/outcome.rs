//! Thank-you and failure pages shown after a submission settles

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

struct OutcomeCopy {
    heading: &'static str,
    body: &'static str,
    accent: Color,
}

const THANK_YOU: OutcomeCopy = OutcomeCopy {
    heading: "Thank you!",
    body: "Your enquiry has been received. Our counsellors will get in touch with you shortly.",
    accent: Color::Green,
};

const FAILED: OutcomeCopy = OutcomeCopy {
    heading: "Submission failed",
    body: "We could not send your enquiry. Please check your connection and try again.",
    accent: Color::Red,
};

pub fn draw_thank_you(frame: &mut Frame, area: Rect) {
    draw_panel(frame, area, &THANK_YOU);
}

pub fn draw_failed(frame: &mut Frame, area: Rect) {
    draw_panel(frame, area, &FAILED);
}

fn draw_panel(frame: &mut Frame, area: Rect, copy: &OutcomeCopy) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(60),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            copy.heading,
            Style::default()
                .fg(copy.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(copy.body),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::raw(" new enquiry   "),
            Span::styled("q", key_style),
            Span::raw(" quit"),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(copy.accent)),
        );
    frame.render_widget(panel, columns[1]);
}
