//! Application state module

mod app_state;
pub mod catalog;
mod forms;
pub mod submission;
pub mod tracking;

pub use app_state::*;
pub use catalog::Degree;
pub use forms::*;
