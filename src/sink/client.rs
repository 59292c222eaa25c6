//! HTTP client for the spreadsheet-backed lead sink
//!
//! The sink is a script endpoint that appends one row per request. It takes
//! the lead as query parameters on a GET request and its response body is
//! not interpreted.

use super::traits::LeadSinkTrait;
use crate::error::SubmissionError;
use crate::state::submission::SubmissionRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default sink address
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxaEF8X9Rm4jIjLsSh6ay4zEalLA54M690-6D__PqckFMVQlzzIDnJ79WfUm7ZrkBnaxg/exec";

/// Client for posting leads to the spreadsheet script
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
    endpoint: String,
}

impl SheetsClient {
    /// Create a new sink client with a transport timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSinkTrait for SheetsClient {
    async fn submit(&self, request: SubmissionRequest) -> Result<(), SubmissionError> {
        info!(callback = %request.callback, "sending lead to sink");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(
            callback = %request.callback,
            bytes = body.len(),
            "lead sink acknowledged submission"
        );
        Ok(())
    }
}
