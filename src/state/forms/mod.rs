//! Form domain layer
//!
//! Type-safe field values, the field store and the selection rules for the
//! lead form.

mod field;
mod form_state;

pub use field::{FieldName, FormField};
pub use form_state::{Form, FormSection, LeadForm};
