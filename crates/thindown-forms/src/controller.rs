//! Per-instance form state: draft, inline errors, submission status.
//!
//! Submission is single-flight. [`FormController::begin_submit`] moves the
//! status to `loading` and hands back the payload; until
//! [`FormController::finish_submit`] is called every further submit attempt
//! returns [`BeginSubmit::Busy`] without touching the transport.
//! [`FormController::on_submit`] runs both halves around one transport call.

use std::sync::Arc;

use thindown_core::{
  Error,
  Result,
  field::{FieldErrors, FieldValue},
  form::{FormSchema, Submittable},
  status::SubmissionStatus,
};

use crate::{error::SubmissionError, transport::SubmissionTransport};

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<D> {
  /// Validation failed; inline errors are populated and nothing was sent.
  Invalid,
  /// A submission was already in flight; nothing was sent.
  Busy,
  /// The endpoint accepted this payload; the form has been reset.
  Accepted(D),
  /// Delivery failed; the draft is kept for a retry.
  Failed,
}

/// A payload cleared for delivery. Status is `loading` until it is resolved
/// with [`FormController::finish_submit`].
#[derive(Debug, Clone)]
pub struct PendingSubmission<D> {
  pub endpoint: &'static str,
  pub payload:  D,
}

/// Result of [`FormController::begin_submit`].
#[derive(Debug, Clone)]
pub enum BeginSubmit<D> {
  Invalid,
  Busy,
  Ready(PendingSubmission<D>),
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// One form instance bound to a transport.
pub struct FormController<F, T>
where
  F: Submittable,
  T: SubmissionTransport,
{
  draft:     F,
  errors:    FieldErrors<F::Field>,
  status:    SubmissionStatus,
  transport: Arc<T>,
}

impl<F, T> FormController<F, T>
where
  F: Submittable,
  T: SubmissionTransport,
{
  /// A controller holding the form's declared defaults.
  pub fn new(transport: Arc<T>) -> Self { Self::with_draft(F::default(), transport) }

  /// A controller pre-filled with `draft`, e.g. from a query string.
  pub fn with_draft(draft: F, transport: Arc<T>) -> Self {
    Self {
      draft,
      errors: FieldErrors::new(),
      status: SubmissionStatus::default(),
      transport,
    }
  }

  pub fn draft(&self) -> &F { &self.draft }

  pub fn errors(&self) -> &FieldErrors<F::Field> { &self.errors }

  pub fn field_error(&self, field: F::Field) -> Option<&str> { self.errors.get(field) }

  pub fn status(&self) -> &SubmissionStatus { &self.status }

  /// Whether the submit control should be disabled.
  pub fn is_submitting(&self) -> bool { self.status.is_loading() }

  // ── Editing ───────────────────────────────────────────────────────────────

  /// Store a new value for `field`. Last write wins; nothing is sent.
  ///
  /// A field that is already showing an inline error is re-checked so the
  /// message clears as soon as the input becomes valid.
  pub fn on_field_change(
    &mut self,
    field: F::Field,
    value: impl Into<FieldValue>,
  ) -> Result<()> {
    self.draft.set_value(field, value.into())?;
    tracing::debug!(form = F::NAME, %field, "field changed");
    if self.errors.contains(field) {
      self.validate_field(field);
    }
    Ok(())
  }

  /// Per-field validation, e.g. on blur. Updates only `field`'s entry in the
  /// error map and returns its message, if any.
  pub fn validate_field(&mut self, field: F::Field) -> Option<&str> {
    match self.draft.check_field(field) {
      Some(message) => self.errors.insert(field, message),
      None => {
        self.errors.remove(field);
      }
    }
    self.errors.get(field)
  }

  /// Clear the draft back to its defaults and drop every inline error.
  ///
  /// A success banner is dismissed (`success → idle`); an error banner stays
  /// until the next submit. Not allowed while a submission is in flight.
  pub fn reset(&mut self) -> Result<()> {
    if self.status.is_loading() {
      return Err(Error::SubmissionInFlight);
    }
    self.draft = F::default();
    self.errors.clear();
    if matches!(self.status, SubmissionStatus::Success { .. }) {
      self.status.acknowledge()?;
    }
    Ok(())
  }

  // ── Submitting ────────────────────────────────────────────────────────────

  /// Validate the whole draft and, if it passes, move to `loading`.
  ///
  /// Invalid drafts populate the error map and leave the status untouched.
  pub fn begin_submit(&mut self) -> Result<BeginSubmit<F::Data>> {
    if self.status.is_loading() {
      tracing::debug!(form = F::NAME, "submit ignored, already in flight");
      return Ok(BeginSubmit::Busy);
    }

    let payload = match self.draft.validate() {
      Ok(payload) => payload,
      Err(errors) => {
        self.errors = errors;
        return Ok(BeginSubmit::Invalid);
      }
    };

    self.errors.clear();
    if matches!(self.status, SubmissionStatus::Success { .. }) {
      self.status.acknowledge()?;
    }
    self.status.start()?;
    tracing::info!(form = F::NAME, endpoint = F::ENDPOINT, "submitting");
    Ok(BeginSubmit::Ready(PendingSubmission { endpoint: F::ENDPOINT, payload }))
  }

  /// Resolve the in-flight submission with the transport's result.
  pub fn finish_submit(
    &mut self,
    pending: PendingSubmission<F::Data>,
    result: std::result::Result<(), SubmissionError>,
  ) -> Result<SubmitOutcome<F::Data>> {
    match result {
      Ok(()) => {
        self.status.succeed(F::SUCCESS_MESSAGE)?;
        self.draft = F::default();
        self.errors.clear();
        tracing::info!(form = F::NAME, "submission accepted");
        Ok(SubmitOutcome::Accepted(pending.payload))
      }
      Err(error) => {
        self.status.fail(F::FAILURE_MESSAGE)?;
        tracing::warn!(form = F::NAME, %error, "submission failed");
        Ok(SubmitOutcome::Failed)
      }
    }
  }

  /// Validate, deliver, and record the outcome. At most one request is made.
  pub async fn on_submit(&mut self) -> Result<SubmitOutcome<F::Data>> {
    let pending = match self.begin_submit()? {
      BeginSubmit::Invalid => return Ok(SubmitOutcome::Invalid),
      BeginSubmit::Busy => return Ok(SubmitOutcome::Busy),
      BeginSubmit::Ready(pending) => pending,
    };
    let transport = Arc::clone(&self.transport);
    let result = transport.submit(pending.endpoint, &pending.payload).await;
    self.finish_submit(pending, result)
  }
}

#[cfg(test)]
mod tests {
  use std::{future::Future, sync::Mutex};

  use serde::Serialize;
  use thindown_core::{
    forms::{ContactDraft, ContactField, SampleDraft, SampleField},
    status::StatusKind,
  };

  use super::*;

  /// Records every request and answers with a fixed HTTP status.
  #[derive(Default)]
  struct FakeTransport {
    sent:  Mutex<Vec<(&'static str, serde_json::Value)>>,
    reply: Mutex<u16>,
  }

  impl FakeTransport {
    fn replying(status: u16) -> Arc<Self> {
      Arc::new(Self { sent: Mutex::default(), reply: Mutex::new(status) })
    }

    fn sent(&self) -> Vec<(&'static str, serde_json::Value)> {
      self.sent.lock().unwrap().clone()
    }

    fn set_reply(&self, status: u16) { *self.reply.lock().unwrap() = status; }
  }

  impl SubmissionTransport for FakeTransport {
    fn submit<'a, D>(
      &'a self,
      endpoint: &'static str,
      payload: &'a D,
    ) -> impl Future<Output = std::result::Result<(), SubmissionError>> + Send + 'a
    where
      D: Serialize + Sync + ?Sized,
    {
      async move {
        let body = serde_json::to_value(payload)
          .map_err(|source| SubmissionError::Payload { endpoint, source })?;
        self.sent.lock().unwrap().push((endpoint, body));
        let status = *self.reply.lock().unwrap();
        if (200..300).contains(&status) {
          Ok(())
        } else {
          Err(SubmissionError::Status { endpoint, status })
        }
      }
    }
  }

  fn fill_jane(form: &mut FormController<ContactDraft, FakeTransport>) {
    form.on_field_change(ContactField::FirstName, "Jane").unwrap();
    form.on_field_change(ContactField::LastName, "Doe").unwrap();
    form.on_field_change(ContactField::Email, "jane@x.com").unwrap();
    form.on_field_change(ContactField::InterestedArea, "military").unwrap();
    form
      .on_field_change(
        ContactField::Message,
        "Please send me specs for your product line.",
      )
      .unwrap();
    form.on_field_change(ContactField::PrivacyAccepted, true).unwrap();
  }

  #[tokio::test]
  async fn valid_contact_is_posted_and_form_resets() {
    let transport = FakeTransport::replying(200);
    let mut form = FormController::<ContactDraft, _>::new(transport.clone());
    fill_jane(&mut form);
    assert_eq!(form.status().kind(), StatusKind::Idle);

    let BeginSubmit::Ready(pending) = form.begin_submit().unwrap() else {
      panic!("expected a payload");
    };
    assert_eq!(form.status().kind(), StatusKind::Loading);
    assert_eq!(pending.endpoint, "/api/contact");

    let result = transport.submit(pending.endpoint, &pending.payload).await;
    let SubmitOutcome::Accepted(accepted) = form.finish_submit(pending, result).unwrap() else {
      panic!("expected acceptance");
    };
    assert_eq!(accepted.first_name, "Jane");

    assert_eq!(
      form.status(),
      &SubmissionStatus::Success { message: ContactDraft::SUCCESS_MESSAGE.to_string() }
    );
    assert_eq!(form.draft(), &ContactDraft::default());

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "/api/contact");
    assert_eq!(sent[0].1["firstName"], "Jane");
    assert_eq!(sent[0].1["interestedArea"], "military");
  }

  #[tokio::test]
  async fn on_submit_hands_back_the_delivered_payload() {
    let transport = FakeTransport::replying(200);
    let mut form = FormController::<ContactDraft, _>::new(transport.clone());
    fill_jane(&mut form);

    let SubmitOutcome::Accepted(request) = form.on_submit().await.unwrap() else {
      panic!("expected acceptance");
    };
    assert_eq!(request.email, "jane@x.com");
    assert_eq!(request.interested_area.label(), "Military & Tactical");
    assert_eq!(transport.sent()[0].1["email"], "jane@x.com");
    assert_eq!(form.draft(), &ContactDraft::default());
  }

  #[tokio::test]
  async fn invalid_sample_request_never_reaches_transport() {
    let transport = FakeTransport::replying(200);
    let mut form = FormController::<SampleDraft, _>::new(transport.clone());
    form.on_field_change(SampleField::Company, "").unwrap();

    assert_eq!(form.on_submit().await.unwrap(), SubmitOutcome::Invalid);
    assert_eq!(form.field_error(SampleField::Company), Some("Company name is required"));
    assert_eq!(form.status(), &SubmissionStatus::Idle);
    assert!(transport.sent().is_empty());
  }

  #[tokio::test]
  async fn second_submit_while_loading_sends_nothing() {
    let transport = FakeTransport::replying(200);
    let mut form = FormController::<ContactDraft, _>::new(transport.clone());
    fill_jane(&mut form);

    let BeginSubmit::Ready(pending) = form.begin_submit().unwrap() else {
      panic!("expected a payload");
    };
    assert!(form.is_submitting());
    assert!(matches!(form.begin_submit().unwrap(), BeginSubmit::Busy));
    assert_eq!(form.on_submit().await.unwrap(), SubmitOutcome::Busy);
    assert!(transport.sent().is_empty());

    let result = transport.submit(pending.endpoint, &pending.payload).await;
    form.finish_submit(pending, result).unwrap();
    assert_eq!(transport.sent().len(), 1);
  }

  #[tokio::test]
  async fn failure_keeps_values_and_shows_generic_banner() {
    let transport = FakeTransport::replying(502);
    let mut form = FormController::<ContactDraft, _>::new(transport.clone());
    fill_jane(&mut form);
    let before = form.draft().clone();

    assert_eq!(form.on_submit().await.unwrap(), SubmitOutcome::Failed);
    assert_eq!(
      form.status(),
      &SubmissionStatus::Error { message: ContactDraft::FAILURE_MESSAGE.to_string() }
    );
    assert_eq!(form.draft(), &before);
    assert_eq!(transport.sent().len(), 1);
  }

  #[tokio::test]
  async fn retry_after_failure_goes_back_through_loading() {
    let transport = FakeTransport::replying(500);
    let mut form = FormController::<ContactDraft, _>::new(transport.clone());
    fill_jane(&mut form);
    assert_eq!(form.on_submit().await.unwrap(), SubmitOutcome::Failed);

    transport.set_reply(201);
    assert!(matches!(form.on_submit().await.unwrap(), SubmitOutcome::Accepted(_)));
    assert_eq!(form.status().kind(), StatusKind::Success);
    assert_eq!(transport.sent().len(), 2);
  }

  #[tokio::test]
  async fn submitting_again_after_success_dismisses_banner() {
    let transport = FakeTransport::replying(200);
    let mut form = FormController::<ContactDraft, _>::new(transport.clone());
    fill_jane(&mut form);
    form.on_submit().await.unwrap();

    // The form was reset, so this attempt is invalid and sends nothing.
    assert_eq!(form.on_submit().await.unwrap(), SubmitOutcome::Invalid);
    assert_eq!(form.status().kind(), StatusKind::Success);

    fill_jane(&mut form);
    assert!(matches!(form.on_submit().await.unwrap(), SubmitOutcome::Accepted(_)));
    assert_eq!(transport.sent().len(), 2);
  }

  #[test]
  fn inline_error_clears_once_field_is_fixed() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(200));
    form.on_field_change(ContactField::Email, "jane").unwrap();
    // Not shown until the field is checked.
    assert_eq!(form.field_error(ContactField::Email), None);

    assert_eq!(
      form.validate_field(ContactField::Email),
      Some("Please enter a valid email address")
    );
    form.on_field_change(ContactField::Email, "jane@x").unwrap();
    assert!(form.field_error(ContactField::Email).is_some());
    form.on_field_change(ContactField::Email, "jane@x.com").unwrap();
    assert_eq!(form.field_error(ContactField::Email), None);
  }

  #[test]
  fn last_write_wins() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(200));
    form.on_field_change(ContactField::Company, "Acme").unwrap();
    form.on_field_change(ContactField::Company, "Acme Outdoor").unwrap();
    assert_eq!(form.draft().company, "Acme Outdoor");
  }

  #[test]
  fn wrong_value_kind_is_rejected() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(200));
    let err = form.on_field_change(ContactField::PrivacyAccepted, "yes").unwrap_err();
    assert!(matches!(err, Error::FieldType { field: "privacyAccepted", .. }));
  }

  #[test]
  fn reset_is_refused_while_loading() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(200));
    fill_jane(&mut form);
    assert!(matches!(form.begin_submit().unwrap(), BeginSubmit::Ready(_)));
    assert!(matches!(form.reset(), Err(Error::SubmissionInFlight)));
  }

  #[tokio::test]
  async fn reset_after_success_returns_to_idle() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(200));
    fill_jane(&mut form);
    form.on_submit().await.unwrap();
    form.reset().unwrap();
    assert_eq!(form.status(), &SubmissionStatus::Idle);
  }

  #[tokio::test]
  async fn reset_after_failure_clears_fields_but_keeps_banner() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(404));
    fill_jane(&mut form);
    form.on_submit().await.unwrap();
    form.reset().unwrap();
    assert_eq!(form.draft(), &ContactDraft::default());
    assert_eq!(form.status().kind(), StatusKind::Error);
  }

  #[test]
  fn finish_without_begin_is_rejected() {
    let mut form = FormController::<ContactDraft, _>::new(FakeTransport::replying(200));
    fill_jane(&mut form);
    let pending = PendingSubmission {
      endpoint: ContactDraft::ENDPOINT,
      payload:  form.draft().validate().unwrap(),
    };
    assert!(matches!(form.finish_submit(pending, Ok(())), Err(Error::InvalidTransition { .. })));
  }

  #[tokio::test]
  async fn end_to_end_over_http() {
    use axum::http::StatusCode;

    use crate::transport::tests::{stub_site, transport_for};

    let (addr, seen) = stub_site(StatusCode::OK).await;
    let transport = Arc::new(transport_for(addr));
    let mut form = FormController::<ContactDraft, _>::new(transport);
    form.on_field_change(ContactField::FirstName, "Jane").unwrap();
    form.on_field_change(ContactField::LastName, "Doe").unwrap();
    form.on_field_change(ContactField::Email, "jane@x.com").unwrap();
    form.on_field_change(ContactField::InterestedArea, "military").unwrap();
    form
      .on_field_change(ContactField::Message, "Please send me specs for your product line.")
      .unwrap();
    form.on_field_change(ContactField::PrivacyAccepted, true).unwrap();

    assert!(matches!(form.on_submit().await.unwrap(), SubmitOutcome::Accepted(_)));
    assert_eq!(form.status().message(), Some(ContactDraft::SUCCESS_MESSAGE));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.requests.len(), 1);
    assert_eq!(seen.requests[0].0, "/api/contact");
    assert_eq!(seen.requests[0].2["privacyAccepted"], true);
  }
}
