//! Submission of accepted registrations

mod log_sink;
mod payload;
mod traits;

pub use log_sink::LogSink;
pub use payload::RegistrationPayload;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
