//! Form rendering module
//!
//! - `field_renderer`: text inputs and titled sections
//! - `lead_form`: the enquiry form itself

mod field_renderer;
mod lead_form;

pub use lead_form::draw_lead_form;
