//! Lead form state: field store, selection rules and focus handling

use super::field::{FieldName, FormField};
use crate::state::catalog::{courses_for, Degree, DESTINATIONS};
use tracing::debug;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focusable sections of the lead form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Text(FieldName),
    Degree,
    Course,
    Destinations,
    Submit,
}

impl FormSection {
    pub const ORDER: [FormSection; 8] = [
        FormSection::Text(FieldName::Name),
        FormSection::Text(FieldName::Mobile),
        FormSection::Text(FieldName::Email),
        FormSection::Text(FieldName::Location),
        FormSection::Degree,
        FormSection::Course,
        FormSection::Destinations,
        FormSection::Submit,
    ];
}

/// Everything the user has entered on the lead form
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub name: FormField,
    pub mobile: FormField,
    pub email: FormField,
    pub location: FormField,
    degree: Option<Degree>,
    course: Option<String>,
    destinations: Vec<String>,
    pub active_field_index: usize,
    /// Highlighted button within the active selection row
    pub option_cursor: usize,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name),
            mobile: FormField::text(FieldName::Mobile),
            email: FormField::text(FieldName::Email),
            location: FormField::text(FieldName::Location),
            degree: None,
            course: None,
            destinations: Vec::new(),
            active_field_index: 0,
            option_cursor: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Mobile => &self.mobile,
            FieldName::Email => &self.email,
            FieldName::Location => &self.location,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Mobile => &mut self.mobile,
            FieldName::Email => &mut self.email,
            FieldName::Location => &mut self.location,
        }
    }

    /// Overwrite one text field, leaving the others untouched
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value.into());
    }

    pub fn degree(&self) -> Option<Degree> {
        self.degree
    }

    /// Choose a degree. The course always resets since its option set changes.
    pub fn select_degree(&mut self, degree: Degree) {
        debug!(degree = degree.label(), "degree selected");
        self.degree = Some(degree);
        self.course = None;
    }

    /// Courses offered for the current degree, or the default list
    pub fn available_courses(&self) -> &'static [&'static str] {
        courses_for(self.degree)
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    /// Store the course as given. Membership in `available_courses()` is
    /// checked when the form is submitted.
    pub fn select_course(&mut self, course: impl Into<String>) {
        let course = course.into();
        debug!(course = %course, "course selected");
        self.course = Some(course);
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn is_destination_selected(&self, country: &str) -> bool {
        self.destinations.iter().any(|c| c == country)
    }

    /// Add the country if absent (appended), remove it if present
    pub fn toggle_destination(&mut self, country: &str) {
        if let Some(pos) = self.destinations.iter().position(|c| c == country) {
            self.destinations.remove(pos);
        } else {
            self.destinations.push(country.to_string());
        }
        debug!(country, selected = self.destinations.len(), "destination toggled");
    }

    pub fn active_section(&self) -> FormSection {
        FormSection::ORDER[self.active_field_index.min(FormSection::ORDER.len() - 1)]
    }

    /// The text field under focus, if the focus is on one
    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_section() {
            FormSection::Text(name) => Some(self.field_mut(name)),
            _ => None,
        }
    }

    /// Number of buttons in a selection row
    pub fn option_count(&self, section: FormSection) -> usize {
        match section {
            FormSection::Degree => Degree::ALL.len(),
            FormSection::Course => self.available_courses().len(),
            FormSection::Destinations => DESTINATIONS.len(),
            FormSection::Text(_) | FormSection::Submit => 0,
        }
    }

    pub fn next_option(&mut self) {
        let count = self.option_count(self.active_section());
        if count > 0 {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    pub fn prev_option(&mut self) {
        let count = self.option_count(self.active_section());
        if count > 0 {
            self.option_cursor = if self.option_cursor == 0 {
                count - 1
            } else {
                self.option_cursor - 1
            };
        }
    }

    /// Select or toggle the highlighted button of the active row
    pub fn activate_option(&mut self) {
        let index = self.option_cursor;
        match self.active_section() {
            FormSection::Degree => {
                if let Some(degree) = Degree::ALL.get(index).copied() {
                    self.select_degree(degree);
                }
            }
            FormSection::Course => {
                if let Some(course) = self.available_courses().get(index).copied() {
                    self.select_course(course);
                }
            }
            FormSection::Destinations => {
                if let Some(country) = DESTINATIONS.get(index).copied() {
                    self.toggle_destination(country);
                }
            }
            FormSection::Text(_) | FormSection::Submit => {}
        }
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        FormSection::ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FormSection::ORDER.len() - 1);
        self.option_cursor = 0;
    }
}
