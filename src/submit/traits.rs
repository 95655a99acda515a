//! Trait abstraction for submission sinks to enable mocking in tests

use super::payload::RegistrationPayload;
use crate::state::FormSession;
use anyhow::Result;
use async_trait::async_trait;

/// Receives every accepted registration
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand over an accepted payload from the given form session
    async fn submit(&mut self, session: &FormSession, payload: &RegistrationPayload) -> Result<()>;
}
