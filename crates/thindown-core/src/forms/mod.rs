//! The three forms the site collects: contact, sample request, and military
//! access.
//!
//! Only contact and sample request are posted anywhere. Military access is a
//! schema without an endpoint; visitors are referred to sales directly.

pub mod contact;
pub mod military;
pub mod sample;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::{
  Result,
  constraint::Constraint,
  form::{FieldSpec, FormSchema, Submittable},
};

pub use contact::{ContactDraft, ContactField, ContactRequest};
pub use military::{MilitaryAccessDraft, MilitaryAccessRequest, MilitaryField};
pub use sample::{SampleDraft, SampleField, SampleRequest};

// ─── Shared rules ────────────────────────────────────────────────────────────

pub(crate) const FIRST_NAME: Constraint = Constraint::MinChars {
  min:     2,
  message: "First name must be at least 2 characters",
};

pub(crate) const LAST_NAME: Constraint = Constraint::MinChars {
  min:     2,
  message: "Last name must be at least 2 characters",
};

pub(crate) const EMAIL: Constraint =
  Constraint::Email { message: "Please enter a valid email address" };

pub(crate) const PRIVACY: Constraint =
  Constraint::MustBeTrue { message: "You must accept the privacy policy" };

// ─── FormKind ────────────────────────────────────────────────────────────────

/// Names the forms for callers that pick one at runtime (URL segments, CLI
/// arguments).
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
  VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FormKind {
  Contact,
  SampleRequest,
  MilitaryAccess,
}

impl FormKind {
  /// Every field of the form with its rule and default.
  pub fn describe(self) -> Vec<FieldSpec> {
    match self {
      Self::Contact => ContactDraft::describe(),
      Self::SampleRequest => SampleDraft::describe(),
      Self::MilitaryAccess => MilitaryAccessDraft::describe(),
    }
  }

  /// The endpoint the form posts to, if it has one.
  pub fn endpoint(self) -> Option<&'static str> {
    match self {
      Self::Contact => Some(ContactDraft::ENDPOINT),
      Self::SampleRequest => Some(SampleDraft::ENDPOINT),
      Self::MilitaryAccess => None,
    }
  }

  /// Deserialise a JSON draft (missing fields take their defaults) and
  /// validate it. Returns `(field, message)` pairs; empty means valid.
  pub fn check_json(self, draft: serde_json::Value) -> Result<Vec<(String, String)>> {
    match self {
      Self::Contact => check_draft::<ContactDraft>(draft),
      Self::SampleRequest => check_draft::<SampleDraft>(draft),
      Self::MilitaryAccess => check_draft::<MilitaryAccessDraft>(draft),
    }
  }
}

fn check_draft<S: FormSchema>(draft: serde_json::Value) -> Result<Vec<(String, String)>> {
  let draft: S = serde_json::from_value(draft)?;
  Ok(match draft.validate() {
    Ok(_) => Vec::new(),
    Err(errors) => errors
      .iter()
      .map(|(field, message)| (field.to_string(), message.to_string()))
      .collect(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn privacy_must_be_accepted_on_every_form() {
    let drafts = [
      (
        FormKind::Contact,
        json!({
          "firstName": "Jane", "lastName": "Doe", "email": "jane@x.com",
          "interestedArea": "military",
          "message": "Please send me specs for your product line.",
          "privacyAccepted": false,
        }),
      ),
      (
        FormKind::SampleRequest,
        json!({
          "firstName": "Jane", "lastName": "Doe", "email": "jane@x.com",
          "company": "Acme Outdoor", "productLines": ["thindown-classic"],
          "projectDescription": "Insulated shell for a winter 2027 collection.",
          "privacyAccepted": false,
        }),
      ),
      (
        FormKind::MilitaryAccess,
        json!({
          "firstName": "Jane", "lastName": "Doe", "email": "jane@x.com",
          "phone": "3155550199", "organization": "Army Natick",
          "specifications": "Sleeping system liner rated to -40F.",
          "privacyAccepted": false,
        }),
      ),
    ];

    for (kind, draft) in drafts {
      let errors = kind.check_json(draft).unwrap();
      assert_eq!(
        errors,
        vec![("privacyAccepted".to_string(), "You must accept the privacy policy".to_string())],
        "{kind}"
      );
    }
  }

  #[test]
  fn kinds_parse_from_url_segments() {
    assert_eq!("sample-request".parse::<FormKind>().unwrap(), FormKind::SampleRequest);
    assert!("newsletter".parse::<FormKind>().is_err());
    assert_eq!(FormKind::MilitaryAccess.endpoint(), None);
    assert_eq!(FormKind::Contact.endpoint(), Some("/api/contact"));
  }

  #[test]
  fn malformed_draft_is_a_serialization_error() {
    let err = FormKind::Contact
      .check_json(json!({ "privacyAccepted": "yes" }))
      .unwrap_err();
    assert!(matches!(err, crate::Error::Serialization(_)));
  }
}
