//! Lead form rendering

use super::field_renderer::{draw_field, draw_section};
use crate::app::App;
use crate::state::catalog::DESTINATIONS;
use crate::state::{Degree, FieldName, FormSection, LeadForm};
use crate::ui::components::{option_chip, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TERMS_NOTICE: &str = "By submitting this form, you agree to the Terms of Use and Privacy Policy.";

/// Draw the enquiry form
pub fn draw_lead_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let active = form.active_section();

    let block = Block::default()
        .title(" Enquiry Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name | Mobile
            Constraint::Length(3),             // Email | Location
            Constraint::Length(3),             // Degree
            Constraint::Length(3),             // Course
            Constraint::Min(4),                // Destinations
            Constraint::Length(1),             // Terms
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    for (pair, row) in FieldName::ALL.chunks(2).zip(chunks.iter()) {
        draw_text_pair(frame, *row, form, pair);
    }

    let row_width = chunks[2].width.saturating_sub(2) as usize;

    let degrees: Vec<&str> = Degree::ALL.iter().map(|d| d.label()).collect();
    let degree_chips = option_row(
        &degrees,
        |label| form.degree().is_some_and(|d| d.label() == label),
        cursor_for(form, FormSection::Degree),
    );
    draw_section(
        frame,
        chunks[2],
        "Which Degree do you want to pursue?*",
        pack_chips(degree_chips, row_width),
        active == FormSection::Degree,
    );

    let course_chips = option_row(
        form.available_courses(),
        |label| form.course() == Some(label),
        cursor_for(form, FormSection::Course),
    );
    draw_section(
        frame,
        chunks[3],
        "SELECT COURSE*",
        pack_chips(course_chips, row_width),
        active == FormSection::Course,
    );

    let destination_chips = option_row(
        DESTINATIONS,
        |label| form.is_destination_selected(label),
        cursor_for(form, FormSection::Destinations),
    );
    draw_section(
        frame,
        chunks[4],
        "CHOOSE STUDY DESTINATION(S)*",
        pack_chips(destination_chips, row_width),
        active == FormSection::Destinations,
    );

    let terms = Paragraph::new(Line::from(Span::styled(
        TERMS_NOTICE,
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(terms, chunks[5]);

    let button_area = centered_horizontally(chunks[6], 24);
    if app.is_submitting() {
        render_button(frame, button_area, "Submitting...", false, false);
    } else {
        render_button(
            frame,
            button_area,
            "Submit",
            active == FormSection::Submit,
            true,
        );
    }
}

fn draw_text_pair(frame: &mut Frame, area: Rect, form: &LeadForm, names: &[FieldName]) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (&name, half) in names.iter().zip(halves.iter()) {
        let is_active = form.active_section() == FormSection::Text(name);
        draw_field(frame, *half, form.field(name), is_active);
    }
}

fn cursor_for(form: &LeadForm, section: FormSection) -> Option<usize> {
    (form.active_section() == section).then_some(form.option_cursor)
}

/// Build one chip per option
fn option_row(
    options: &[&str],
    is_chosen: impl Fn(&str) -> bool,
    cursor: Option<usize>,
) -> Vec<Span<'static>> {
    options
        .iter()
        .enumerate()
        .map(|(i, &label)| option_chip(label, is_chosen(label), cursor == Some(i)))
        .collect()
}

/// Lay chips out left to right, starting a new line when one would overflow
///
/// Chips are never split across lines.
fn pack_chips(chips: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for chip in chips {
        let chip_width = chip.content.chars().count();
        if current_width > 0 && current_width + 1 + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(Span::raw(" "));
            current_width += 1;
        }
        current.push(chip);
        current_width += chip_width;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

fn centered_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
