//! Submission status, a small state machine tracked per form instance.
//!
//! ```text
//!   idle ──start──▶ loading ──succeed──▶ success ──acknowledge──▶ idle
//!                     ▲   └────fail────▶ error
//!                     └──────start───────┘
//! ```
//!
//! Any other move is rejected with [`Error::InvalidTransition`].

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{Error, Result};

/// The bare discriminant of a [`SubmissionStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusKind {
  Idle,
  Loading,
  Success,
  Error,
}

impl StatusKind {
  /// Whether the machine allows moving from `self` to `to`.
  pub fn can_move_to(self, to: StatusKind) -> bool {
    use StatusKind::*;
    matches!(
      (self, to),
      (Idle, Loading)
        | (Loading, Success)
        | (Loading, Error)
        | (Success, Idle)
        | (Error, Loading)
    )
  }
}

/// Current submission status, with the banner message when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionStatus {
  #[default]
  Idle,
  Loading,
  Success { message: String },
  Error { message: String },
}

impl SubmissionStatus {
  pub fn kind(&self) -> StatusKind {
    match self {
      Self::Idle => StatusKind::Idle,
      Self::Loading => StatusKind::Loading,
      Self::Success { .. } => StatusKind::Success,
      Self::Error { .. } => StatusKind::Error,
    }
  }

  pub fn is_loading(&self) -> bool { matches!(self, Self::Loading) }

  /// The banner message for `success` and `error`.
  pub fn message(&self) -> Option<&str> {
    match self {
      Self::Success { message } | Self::Error { message } => Some(message),
      Self::Idle | Self::Loading => None,
    }
  }

  /// `idle → loading` or `error → loading` (retry).
  pub fn start(&mut self) -> Result<()> { self.move_to(Self::Loading) }

  /// `loading → success`.
  pub fn succeed(&mut self, message: impl Into<String>) -> Result<()> {
    self.move_to(Self::Success { message: message.into() })
  }

  /// `loading → error`.
  pub fn fail(&mut self, message: impl Into<String>) -> Result<()> {
    self.move_to(Self::Error { message: message.into() })
  }

  /// `success → idle`, dismissing the success banner.
  pub fn acknowledge(&mut self) -> Result<()> { self.move_to(Self::Idle) }

  fn move_to(&mut self, next: SubmissionStatus) -> Result<()> {
    let (from, to) = (self.kind(), next.kind());
    if !from.can_move_to(to) {
      return Err(Error::InvalidTransition { from, to });
    }
    tracing::debug!(%from, %to, "submission status changed");
    *self = next;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn happy_path_and_retry() {
    let mut status = SubmissionStatus::default();
    status.start().unwrap();
    assert!(status.is_loading());
    status.fail("nope").unwrap();
    assert_eq!(status.message(), Some("nope"));
    status.start().unwrap();
    status.succeed("done").unwrap();
    assert_eq!(status.kind(), StatusKind::Success);
    status.acknowledge().unwrap();
    assert_eq!(status, SubmissionStatus::Idle);
  }

  #[test]
  fn rejects_moves_outside_the_machine() {
    let mut status = SubmissionStatus::Loading;
    let err = status.start().unwrap_err();
    assert!(matches!(
      err,
      Error::InvalidTransition { from: StatusKind::Loading, to: StatusKind::Loading }
    ));

    let mut idle = SubmissionStatus::Idle;
    assert!(idle.succeed("x").is_err());
    assert!(idle.acknowledge().is_err());

    let mut failed = SubmissionStatus::Error { message: "x".into() };
    assert!(failed.acknowledge().is_err());
    assert_eq!(failed.kind(), StatusKind::Error);
  }

  #[test]
  fn exactly_five_transitions_allowed() {
    use StatusKind::*;
    let all = [Idle, Loading, Success, Error];
    let allowed = all
      .iter()
      .flat_map(|a| all.iter().map(move |b| (*a, *b)))
      .filter(|(a, b)| a.can_move_to(*b))
      .count();
    assert_eq!(allowed, 5);
  }

  #[test]
  fn serializes_with_status_tag() {
    let json = serde_json::to_value(SubmissionStatus::Error { message: "m".into() }).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "error", "message": "m" }));
  }
}
