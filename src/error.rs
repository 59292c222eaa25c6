//! Error types for the lead form

use thiserror::Error;

/// Reasons a submission is blocked before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("Enter a valid 10-digit mobile number.")]
    InvalidMobile,
    #[error("Please complete all required selections.")]
    IncompleteSelection,
    #[error("Please complete all required selections. {course} is not offered for {degree}.")]
    CourseNotOffered { degree: String, course: String },
    #[error("Please complete all required selections. {0} is not a study destination.")]
    UnknownDestination(String),
}

/// Failure of the outbound call to the lead sink
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("request to lead sink failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("lead sink responded with status {0}")]
    Status(u16),
    #[error("submission task ended without a result")]
    Aborted,
}

/// Why a submit action did not start a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A submission is already in progress.")]
    InFlight,
}
