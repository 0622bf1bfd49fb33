//! Transport error type.

use thiserror::Error;

/// Delivery of a validated submission failed.
///
/// The controller treats every variant the same way: one generic banner and
/// the draft kept for a manual retry. The variants exist for logs.
#[derive(Debug, Error)]
pub enum SubmissionError {
  #[error("{endpoint} responded with HTTP {status}")]
  Status { endpoint: &'static str, status: u16 },

  #[error("request to {endpoint} failed: {source}")]
  Network {
    endpoint: &'static str,
    #[source]
    source:   reqwest::Error,
  },

  #[error("payload for {endpoint} could not be serialised: {source}")]
  Payload {
    endpoint: &'static str,
    #[source]
    source:   serde_json::Error,
  },
}
