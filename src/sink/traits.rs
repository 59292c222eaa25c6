//! Trait abstraction for the lead sink to enable mocking in tests

use crate::error::SubmissionError;
use crate::state::submission::SubmissionRequest;
use async_trait::async_trait;

/// Destination for validated leads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSinkTrait: Send + Sync {
    /// Send one lead. Any successful response counts as stored.
    async fn submit(&self, request: SubmissionRequest) -> Result<(), SubmissionError>;
}
