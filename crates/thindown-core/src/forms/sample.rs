//! Sample kit request, posted to `/api/sample-request`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use super::{EMAIL, FIRST_NAME, LAST_NAME, PRIVACY};
use crate::{
  Result,
  choice::{ApplicationCategory, Timeline, Volume},
  constraint::Constraint,
  field::{FieldErrors, FieldValue},
  form::{FormSchema, Submittable, parse_choice},
};

use SampleField as F;

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
pub enum SampleField {
  FirstName,
  LastName,
  Email,
  Phone,
  Company,
  JobTitle,
  ApplicationCategory,
  ProductLines,
  ProjectDescription,
  Timeline,
  Volume,
  AdditionalRequirements,
  PrivacyAccepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleDraft {
  pub first_name:              String,
  pub last_name:               String,
  pub email:                   String,
  pub phone:                   String,
  pub company:                 String,
  pub job_title:               String,
  pub application_category:    String,
  /// Product line ids from the catalog, e.g. `thindown-flex`.
  pub product_lines:           Vec<String>,
  pub project_description:     String,
  pub timeline:                String,
  pub volume:                  String,
  pub additional_requirements: String,
  pub privacy_accepted:        bool,
}

impl Default for SampleDraft {
  fn default() -> Self {
    Self {
      first_name:              String::new(),
      last_name:               String::new(),
      email:                   String::new(),
      phone:                   String::new(),
      company:                 String::new(),
      job_title:               String::new(),
      application_category:    ApplicationCategory::default().to_string(),
      product_lines:           Vec::new(),
      project_description:     String::new(),
      timeline:                Timeline::default().to_string(),
      volume:                  Volume::default().to_string(),
      additional_requirements: String::new(),
      privacy_accepted:        false,
    }
  }
}

/// A sample request that has passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRequest {
  pub first_name:              String,
  pub last_name:               String,
  pub email:                   String,
  pub phone:                   String,
  pub company:                 String,
  pub job_title:               String,
  pub application_category:    ApplicationCategory,
  pub product_lines:           Vec<String>,
  pub project_description:     String,
  pub timeline:                Timeline,
  pub volume:                  Volume,
  pub additional_requirements: String,
  pub privacy_accepted:        bool,
}

impl FormSchema for SampleDraft {
  type Data = SampleRequest;
  type Field = SampleField;

  const NAME: &'static str = "sample-request";

  fn constraint(field: F) -> Constraint {
    match field {
      F::FirstName => FIRST_NAME,
      F::LastName => LAST_NAME,
      F::Email => EMAIL,
      F::Phone | F::JobTitle | F::AdditionalRequirements => Constraint::OptionalText,
      F::Company => Constraint::MinChars { min: 2, message: "Company name is required" },
      F::ApplicationCategory => Constraint::OneOf { options: ApplicationCategory::VARIANTS },
      F::ProductLines => Constraint::MinItems {
        min:     1,
        message: "Please select at least one product line",
      },
      F::ProjectDescription => Constraint::MinChars {
        min:     20,
        message: "Please provide more details about your project",
      },
      F::Timeline => Constraint::OneOf { options: Timeline::VARIANTS },
      F::Volume => Constraint::OneOf { options: Volume::VARIANTS },
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
      F::JobTitle => self.job_title.clone().into(),
      F::ApplicationCategory => self.application_category.clone().into(),
      F::ProductLines => self.product_lines.clone().into(),
      F::ProjectDescription => self.project_description.clone().into(),
      F::Timeline => self.timeline.clone().into(),
      F::Volume => self.volume.clone().into(),
      F::AdditionalRequirements => self.additional_requirements.clone().into(),
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
      F::JobTitle => self.job_title = value.into_text(name)?,
      F::ApplicationCategory => self.application_category = value.into_text(name)?,
      F::ProductLines => self.product_lines = value.into_list(name)?,
      F::ProjectDescription => self.project_description = value.into_text(name)?,
      F::Timeline => self.timeline = value.into_text(name)?,
      F::Volume => self.volume = value.into_text(name)?,
      F::AdditionalRequirements => self.additional_requirements = value.into_text(name)?,
      F::PrivacyAccepted => self.privacy_accepted = value.into_flag(name)?,
    }
    Ok(())
  }

  fn build(&self) -> Result<SampleRequest, FieldErrors<F>> {
    Ok(SampleRequest {
      first_name:              self.first_name.clone(),
      last_name:               self.last_name.clone(),
      email:                   self.email.clone(),
      phone:                   self.phone.clone(),
      company:                 self.company.clone(),
      job_title:               self.job_title.clone(),
      application_category:    parse_choice(
        F::ApplicationCategory,
        &self.application_category,
      )?,
      product_lines:           self.product_lines.clone(),
      project_description:     self.project_description.clone(),
      timeline:                parse_choice(F::Timeline, &self.timeline)?,
      volume:                  parse_choice(F::Volume, &self.volume)?,
      additional_requirements: self.additional_requirements.clone(),
      privacy_accepted:        self.privacy_accepted,
    })
  }
}

impl Submittable for SampleDraft {
  const ENDPOINT: &'static str = "/api/sample-request";
  const FAILURE_MESSAGE: &'static str =
    "Sorry, there was an error submitting your request. Please try again or contact us directly.";
  const SUCCESS_MESSAGE: &'static str = "Your sample request has been submitted! We'll prepare \
                                         your custom sample kit and contact you within 24 hours.";
}
