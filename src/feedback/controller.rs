//! Step-by-step form controller

use super::input::StepInput;
use super::record::FeedbackRecord;
use super::schema::{StepSchema, ValidationErrors};
use super::session::{FormSession, FormValues, Step};
use chrono::Utc;

/// Drives a [`FormSession`] through the steps, validating each one before
/// moving on.
#[derive(Debug, Clone, Default)]
pub struct StepFormController {
    session: FormSession,
}

impl StepFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn current_step(&self) -> Step {
        self.session.current_step
    }

    pub fn values(&self) -> &FormValues {
        &self.session.values
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete
    }

    /// Validate `input` against the active step and move forward.
    ///
    /// On failure every field error of the active step is returned and the
    /// session is left untouched. Once the session is complete this is a
    /// no-op.
    pub fn advance(&mut self, input: StepInput) -> Result<&FormSession, ValidationErrors> {
        if self.session.is_complete {
            tracing::debug!(session_id = %self.session.id, "advance on completed session ignored");
            return Ok(&self.session);
        }

        let schema = StepSchema::for_step(self.session.current_step);
        let accepted = schema.validate(&input).inspect_err(|errors| {
            tracing::debug!(
                session_id = %self.session.id,
                step = schema.step.number(),
                errors = errors.len(),
                "step validation failed"
            );
        })?;

        self.session.values.extend(accepted);

        match schema.step.next() {
            Some(next) => {
                tracing::debug!(
                    session_id = %self.session.id,
                    from = schema.step.number(),
                    to = next.number(),
                    "advanced step"
                );
                self.session.current_step = next;
            }
            None => {
                let completed_at = Utc::now();
                self.session.is_complete = true;
                self.session.completed_at = Some(completed_at);
                tracing::info!(
                    session_id = %self.session.id,
                    elapsed_secs = (completed_at - self.session.started_at).num_seconds(),
                    "feedback form completed"
                );
            }
        }

        Ok(&self.session)
    }

    /// Discard the current session and start a fresh one
    pub fn reset(&mut self) {
        tracing::debug!(session_id = %self.session.id, "resetting form session");
        self.session = FormSession::new();
    }

    /// Final combined record, once the session is complete
    pub fn record(&self) -> Option<FeedbackRecord> {
        FeedbackRecord::from_session(&self.session)
    }
}
