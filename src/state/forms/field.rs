//! Form field value objects

/// The free-text inputs of the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Mobile,
    Email,
    Location,
}

impl FieldName {
    /// All text fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Mobile,
        FieldName::Email,
        FieldName::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name*",
            Self::Mobile => "Mobile*",
            Self::Email => "Email*",
            Self::Location => "Location*",
        }
    }
}

/// A single text input with its label and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty_with_label() {
        let field = FormField::text(FieldName::Email);
        assert!(field.is_empty());
        assert_eq!(field.label, "Email*");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text(FieldName::Name);
        field.push_char('A');
        field.push_char('s');
        assert_eq!(field.as_text(), "As");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text(FieldName::Mobile);
        field.pop_char();
        assert!(field.is_empty());
    }
}
