//! Form controller and submission transport.
//!
//! A [`FormController`] owns one form instance: its draft, its inline errors,
//! and its [`SubmissionStatus`](thindown_core::status::SubmissionStatus). It
//! hands validated payloads to a [`SubmissionTransport`]; [`HttpTransport`] is
//! the production implementation and posts JSON with `reqwest`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let transport = Arc::new(HttpTransport::new(TransportConfig::default())?);
//! let mut form = FormController::<ContactDraft, _>::new(transport);
//! form.on_field_change(ContactField::FirstName, "Jane")?;
//! // …
//! if let SubmitOutcome::Accepted(request) = form.on_submit().await? {
//!   println!("sent for {}", request.email);
//! }
//! ```

pub mod controller;
pub mod error;
pub mod transport;

pub use controller::{BeginSubmit, FormController, PendingSubmission, SubmitOutcome};
pub use error::SubmissionError;
pub use transport::{HttpTransport, SubmissionTransport, TransportConfig};
