//! Error types for `thindown-core`.

use thiserror::Error;

use crate::status::StatusKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("field {field} expects {expected}, got {found}")]
  FieldType {
    field:    &'static str,
    expected: &'static str,
    found:    &'static str,
  },

  #[error("status cannot move from {from} to {to}")]
  InvalidTransition { from: StatusKind, to: StatusKind },

  #[error("a submission is already in flight")]
  SubmissionInFlight,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
