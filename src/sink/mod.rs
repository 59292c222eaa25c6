//! Lead sink module for HTTP submission

mod client;
mod traits;

pub use client::{SheetsClient, DEFAULT_ENDPOINT};
pub use traits::LeadSinkTrait;

#[cfg(test)]
pub use traits::MockLeadSinkTrait;
