//! Submission sink that reports accepted registrations through tracing

use super::payload::RegistrationPayload;
use super::traits::SubmissionSink;
use crate::state::FormSession;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

/// Emits each accepted registration as a structured log event
#[derive(Debug, Default)]
pub struct LogSink {
    submitted: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&mut self, session: &FormSession, payload: &RegistrationPayload) -> Result<()> {
        self.submitted += 1;
        tracing::info!(
            session_id = %session.id,
            count = self.submitted,
            started_at = %session.started_at.to_rfc3339(),
            submitted_at = %Utc::now().to_rfc3339(),
            payload = %payload.redacted_json(),
            "Registration submitted"
        );
        Ok(())
    }
}
