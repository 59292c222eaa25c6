//! Reusable UI components

mod button;
mod dialog;

pub use button::{option_chip, render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
