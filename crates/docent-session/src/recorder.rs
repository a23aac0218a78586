//! The guardian's recorded video answer.
//!
//! ```text
//! ready → recording → review → sent
//!                            → documented
//! ```
//!
//! Seconds advance only while recording. Sending or documenting closes the
//! flow with a confirmation; opening it again starts over.

use docent_core::enums::RecordingStep;

use crate::error::SessionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorder {
    step: RecordingStep,
    seconds: u32,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: RecordingStep::Ready,
            seconds: 0,
        }
    }

    #[must_use]
    pub const fn step(&self) -> RecordingStep {
        self.step
    }

    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Back to `ready` with the clock at zero.
    pub const fn open(&mut self) {
        self.step = RecordingStep::Ready;
        self.seconds = 0;
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the flow is `ready`.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.transition(RecordingStep::Recording)?;
        self.seconds = 0;
        Ok(())
    }

    /// Advance the clock by one second if recording.
    pub const fn tick(&mut self) {
        if matches!(self.step, RecordingStep::Recording) {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless recording.
    pub fn stop(&mut self) -> Result<(), SessionError> {
        self.transition(RecordingStep::Review)
    }

    /// Send the answer to the asker. Returns the confirmation text.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless in review.
    pub fn send(&mut self) -> Result<&'static str, SessionError> {
        self.close(RecordingStep::Sent)
    }

    /// File the answer into the documentation. Returns the confirmation text.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless in review.
    pub fn add_to_documentation(&mut self) -> Result<&'static str, SessionError> {
        self.close(RecordingStep::Documented)
    }

    #[must_use]
    pub fn elapsed(&self) -> String {
        format_time(self.seconds)
    }

    fn close(&mut self, outcome: RecordingStep) -> Result<&'static str, SessionError> {
        self.transition(outcome)?;
        tracing::info!(outcome = %outcome, seconds = self.seconds, "recorded answer closed");
        Ok(outcome.toast_message().unwrap_or_default())
    }

    fn transition(&mut self, next: RecordingStep) -> Result<(), SessionError> {
        if !self.step.can_transition_to(next) {
            return Err(SessionError::InvalidTransition {
                entity: "recording".to_string(),
                from: self.step.to_string(),
                to: next.to_string(),
            });
        }
        self.step = next;
        Ok(())
    }
}

/// `m:ss`, e.g. `0:07` or `12:30`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
