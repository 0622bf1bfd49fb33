//! General contact form, posted to `/api/contact`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{EMAIL, FIRST_NAME, LAST_NAME, PRIVACY};
use crate::{
  Result,
  choice::ApplicationCategory,
  constraint::Constraint,
  field::{FieldErrors, FieldValue},
  form::{FormSchema, Submittable, parse_choice},
};

use ContactField as F;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ContactField {
  FirstName,
  LastName,
  Email,
  Phone,
  Company,
  InterestedArea,
  Message,
  PrivacyAccepted,
}

/// What the visitor has typed into the contact form so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
  pub first_name:       String,
  pub last_name:        String,
  pub email:            String,
  pub phone:            String,
  pub company:          String,
  /// Raw token; checked against [`ApplicationCategory`] on validation.
  pub interested_area:  String,
  pub message:          String,
  pub privacy_accepted: bool,
}

impl Default for ContactDraft {
  fn default() -> Self {
    Self {
      first_name:       String::new(),
      last_name:        String::new(),
      email:            String::new(),
      phone:            String::new(),
      company:          String::new(),
      interested_area:  ApplicationCategory::default().to_string(),
      message:          String::new(),
      privacy_accepted: false,
    }
  }
}

/// A contact request that has passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
  pub first_name:       String,
  pub last_name:        String,
  pub email:            String,
  pub phone:            String,
  pub company:          String,
  pub interested_area:  ApplicationCategory,
  pub message:          String,
  pub privacy_accepted: bool,
}

impl FormSchema for ContactDraft {
  type Data = ContactRequest;
  type Field = ContactField;

  const NAME: &'static str = "contact";

  fn constraint(field: F) -> Constraint {
    match field {
      F::FirstName => FIRST_NAME,
      F::LastName => LAST_NAME,
      F::Email => EMAIL,
      F::Phone | F::Company => Constraint::OptionalText,
      F::InterestedArea => {
        Constraint::OneOf { options: <ApplicationCategory as strum::VariantNames>::VARIANTS }
      }
      F::Message => Constraint::MinChars {
        min:     10,
        message: "Message must be at least 10 characters",
      },
      F::PrivacyAccepted => PRIVACY,
    }
  }

  fn value(&self, field: F) -> FieldValue {
    match field {
      F::FirstName => self.first_name.clone().into(),
      F::LastName => self.last_name.clone().into(),
      F::Email => self.email.clone().into(),
      F::Phone => self.phone.clone().into(),
      F::Company => self.company.clone().into(),
      F::InterestedArea => self.interested_area.clone().into(),
      F::Message => self.message.clone().into(),
      F::PrivacyAccepted => self.privacy_accepted.into(),
    }
  }

  fn set_value(&mut self, field: F, value: FieldValue) -> Result<()> {
    let name: &'static str = field.into();
    match field {
      F::FirstName => self.first_name = value.into_text(name)?,
      F::LastName => self.last_name = value.into_text(name)?,
      F::Email => self.email = value.into_text(name)?,
      F::Phone => self.phone = value.into_text(name)?,
      F::Company => self.company = value.into_text(name)?,
      F::InterestedArea => self.interested_area = value.into_text(name)?,
      F::Message => self.message = value.into_text(name)?,
      F::PrivacyAccepted => self.privacy_accepted = value.into_flag(name)?,
    }
    Ok(())
  }

  fn build(&self) -> Result<ContactRequest, FieldErrors<F>> {
    Ok(ContactRequest {
      first_name:       self.first_name.clone(),
      last_name:        self.last_name.clone(),
      email:            self.email.clone(),
      phone:            self.phone.clone(),
      company:          self.company.clone(),
      interested_area:  parse_choice(F::InterestedArea, &self.interested_area)?,
      message:          self.message.clone(),
      privacy_accepted: self.privacy_accepted,
    })
  }
}

impl Submittable for ContactDraft {
  const ENDPOINT: &'static str = "/api/contact";
  const FAILURE_MESSAGE: &'static str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";
  const SUCCESS_MESSAGE: &'static str =
    "Thank you for your message! We'll get back to you within 24 hours.";
}
