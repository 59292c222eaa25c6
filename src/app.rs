//! Application state and core logic

use crate::config::LeadConfig;
use crate::error::{SubmissionError, SubmitError};
use crate::sink::LeadSinkTrait;
use crate::state::submission::SubmissionRequest;
use crate::state::tracking::{landing_query, TrackingMetadata};
use crate::state::{AppState, Form, FormSection, LeadForm, View};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

type SubmissionResult = Result<(), SubmissionError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated leads are sent
    sink: Arc<dyn LeadSinkTrait>,
    /// Query string of the landing page, source of the UTM parameters
    landing_query: String,
    tracking_base_url: String,
    /// Result channel of the in-flight submission
    pending: Option<oneshot::Receiver<SubmissionResult>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &LeadConfig, sink: Arc<dyn LeadSinkTrait>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            landing_query: landing_query(config.landing_url()),
            tracking_base_url: config.tracking_base_url().to_string(),
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submission.is_submitting()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Navigate to a view. Outcome views end the form session and drop its input.
    pub fn navigate(&mut self, view: View) {
        info!(route = view.route(), "navigating");
        if view.is_outcome_view() {
            self.state.form = LeadForm::new();
            self.state.status_message = None;
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Open a fresh form from an outcome page
    pub fn start_new_form(&mut self) {
        self.state.reset_form();
        self.navigate(View::Form);
    }

    /// Validate the form and, if it passes, send it to the sink in the background
    pub fn submit(&mut self) {
        let payload = match self.state.submission.begin(&self.state.form) {
            Ok(payload) => payload,
            Err(SubmitError::InFlight) => {
                self.state.status_message = Some(SubmitError::InFlight.to_string());
                return;
            }
            Err(SubmitError::Invalid(err)) => {
                warn!(%err, "lead form rejected");
                self.push_error(err.to_string());
                return;
            }
        };

        let tracking = TrackingMetadata::from_query(
            &self.landing_query,
            &self.tracking_base_url,
            Utc::now().timestamp_millis(),
        );
        let request = SubmissionRequest::new(payload, tracking);
        info!(
            callback = %request.callback,
            utm_source = %request.tracking.utm_source,
            "submitting lead"
        );

        let (tx, rx) = oneshot::channel();
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let result = sink.submit(request).await;
            // The receiver is only gone once the app has shut down
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        self.state.status_message = Some("Submitting...".to_string());
    }

    /// Check whether the in-flight submission has finished
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmissionError::Aborted),
        };
        self.pending = None;
        self.complete_submission(result);
    }

    fn complete_submission(&mut self, result: SubmissionResult) {
        match &result {
            Ok(()) => info!("lead submission succeeded"),
            Err(err) => error!(error = %err, "lead submission failed"),
        }
        if let Some(outcome) = self.state.submission.finish(&result) {
            debug!(phase = ?self.state.submission.phase(), "submission settled");
            self.navigate(outcome.into());
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::ThankYou | View::Failed => self.handle_outcome_key(key),
        }
    }

    /// Append pasted text to the focused text field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() || self.is_submitting() || self.state.current_view != View::Form
        {
            return;
        }
        let form = &mut self.state.form;
        if let FormSection::Text(name) = form.active_section() {
            let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
            let value = format!("{}{pasted}", form.field(name).as_text());
            form.update_field(name, value);
        }
    }

    /// Handle keys in the form view
    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Submit shortcut works from any section
        if ctrl && key.code == KeyCode::Char('s') {
            self.submit();
            return;
        }

        // Input is frozen while the request is out
        if self.is_submitting() {
            if key.code == KeyCode::Enter {
                self.submit();
            }
            return;
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Esc => self.quit = true,
            code => match form.active_section() {
                FormSection::Text(_) => match code {
                    KeyCode::Char(c) if !ctrl => {
                        if let Some(field) = form.get_active_field_mut() {
                            field.push_char(c);
                        }
                    }
                    KeyCode::Backspace => {
                        if let Some(field) = form.get_active_field_mut() {
                            field.pop_char();
                        }
                    }
                    KeyCode::Enter | KeyCode::Down => form.next_field(),
                    KeyCode::Up => form.prev_field(),
                    _ => {}
                },
                FormSection::Degree | FormSection::Course | FormSection::Destinations => {
                    match code {
                        KeyCode::Left | KeyCode::Char('h') => form.prev_option(),
                        KeyCode::Right | KeyCode::Char('l') => form.next_option(),
                        KeyCode::Enter | KeyCode::Char(' ') => form.activate_option(),
                        KeyCode::Down => form.next_field(),
                        KeyCode::Up => form.prev_field(),
                        _ => {}
                    }
                }
                FormSection::Submit => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
                    KeyCode::Up => form.prev_field(),
                    _ => {}
                },
            },
        }
    }

    /// Handle keys on the thank-you and failed pages
    fn handle_outcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_new_form(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
impl App {
    /// Wait for the in-flight submission and apply its result
    async fn wait_for_submission(&mut self) {
        if let Some(rx) = self.pending.take() {
            let result = rx.await.unwrap_or(Err(SubmissionError::Aborted));
            self.complete_submission(result);
        }
    }
}
