//! Submission pipeline: validation, payload snapshot and outcome tracking

use super::catalog::DESTINATIONS;
use super::forms::LeadForm;
use super::tracking::TrackingMetadata;
use crate::error::{SubmissionError, SubmitError, ValidationError};
use tracing::{debug, warn};

/// Required length of the mobile number
pub const MOBILE_LENGTH: usize = 10;

/// Where the pipeline currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failure,
}

/// Terminal result of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Read-only snapshot of a validated form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub location: String,
    pub degree: String,
    pub course: String,
    /// Destinations in selection order, joined with ", "
    pub countries: String,
}

/// Validate the form fail-fast and snapshot it.
///
/// Checks run in order: text fields present, mobile length, selections made,
/// then the course and destinations against the option tables.
pub fn validate(form: &LeadForm) -> Result<SubmissionPayload, ValidationError> {
    if [&form.name, &form.mobile, &form.email, &form.location]
        .iter()
        .any(|f| f.is_empty())
    {
        return Err(ValidationError::MissingFields);
    }

    if form.mobile.as_text().chars().count() != MOBILE_LENGTH {
        return Err(ValidationError::InvalidMobile);
    }

    let (Some(degree), Some(course)) = (form.degree(), form.course()) else {
        return Err(ValidationError::IncompleteSelection);
    };
    if form.destinations().is_empty() {
        return Err(ValidationError::IncompleteSelection);
    }

    if !degree.courses().contains(&course) {
        return Err(ValidationError::CourseNotOffered {
            degree: degree.label().to_string(),
            course: course.to_string(),
        });
    }
    if let Some(unknown) = form
        .destinations()
        .iter()
        .find(|c| !DESTINATIONS.contains(&c.as_str()))
    {
        return Err(ValidationError::UnknownDestination(unknown.clone()));
    }

    Ok(SubmissionPayload {
        name: form.name.as_text().to_string(),
        email: form.email.as_text().to_string(),
        mobile: form.mobile.as_text().to_string(),
        location: form.location.as_text().to_string(),
        degree: degree.label().to_string(),
        course: course.to_string(),
        countries: form.destinations().join(", "),
    })
}

/// Everything sent to the lead sink for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub callback: String,
    pub payload: SubmissionPayload,
    pub tracking: TrackingMetadata,
}

impl SubmissionRequest {
    pub fn new(payload: SubmissionPayload, tracking: TrackingMetadata) -> Self {
        Self {
            callback: tracking.callback_id(),
            payload,
            tracking,
        }
    }

    /// Query parameters in the order the sink expects them
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("callback", self.callback.as_str()),
            ("name", self.payload.name.as_str()),
            ("email", self.payload.email.as_str()),
            ("mobile", self.payload.mobile.as_str()),
            ("location", self.payload.location.as_str()),
            ("degree", self.payload.degree.as_str()),
            ("course", self.payload.course.as_str()),
            ("countries", self.payload.countries.as_str()),
            ("trackingUrl", self.tracking.tracking_url.as_str()),
            ("utm_source", self.tracking.utm_source.as_str()),
            ("utm_medium", self.tracking.utm_medium.as_str()),
            ("utm_campaign", self.tracking.utm_campaign.as_str()),
        ]
    }
}

/// State machine guarding a single in-flight submission
#[derive(Debug, Clone, Default)]
pub struct SubmissionPipeline {
    phase: SubmissionPhase,
}

impl SubmissionPipeline {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Validate the form and move to `Submitting`.
    ///
    /// Rejected while a request is already in flight. A validation failure
    /// returns the pipeline to `Idle`.
    pub fn begin(&mut self, form: &LeadForm) -> Result<SubmissionPayload, SubmitError> {
        if self.is_submitting() {
            warn!("submit ignored, request already in flight");
            return Err(SubmitError::InFlight);
        }

        self.phase = SubmissionPhase::Validating;
        match validate(form) {
            Ok(payload) => {
                self.phase = SubmissionPhase::Submitting;
                Ok(payload)
            }
            Err(err) => {
                debug!(%err, "validation failed");
                self.phase = SubmissionPhase::Idle;
                Err(err.into())
            }
        }
    }

    /// Record the result of the outbound call.
    ///
    /// Returns the outcome only for the first result of an in-flight
    /// submission, so each submission navigates exactly once.
    pub fn finish(&mut self, result: &Result<(), SubmissionError>) -> Option<Outcome> {
        if !self.is_submitting() {
            return None;
        }
        let outcome = match result {
            Ok(()) => {
                self.phase = SubmissionPhase::Success;
                Outcome::Success
            }
            Err(_) => {
                self.phase = SubmissionPhase::Failure;
                Outcome::Failure
            }
        };
        Some(outcome)
    }
}
