//! Military access request.
//!
//! Validated like the other forms but never posted: the military page refers
//! visitors to the sales line instead, so there is no [`Submittable`] impl.
//!
//! [`Submittable`]: crate::form::Submittable

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use super::{EMAIL, FIRST_NAME, LAST_NAME, PRIVACY};
use crate::{
  Result,
  choice::{ApplicationArea, SecurityClearance},
  constraint::Constraint,
  field::{FieldErrors, FieldValue},
  form::{FormSchema, parse_choice},
};

use MilitaryField as F;

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
pub enum MilitaryField {
  FirstName,
  LastName,
  Email,
  Phone,
  Organization,
  Rank,
  SecurityClearance,
  ApplicationArea,
  Specifications,
  ComplianceRequirements,
  PrivacyAccepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilitaryAccessDraft {
  pub first_name:              String,
  pub last_name:               String,
  pub email:                   String,
  pub phone:                   String,
  pub organization:            String,
  pub rank:                    String,
  pub security_clearance:      String,
  pub application_area:        String,
  pub specifications:          String,
  /// Free-form standards, e.g. `Berry Amendment`, `MIL-SPEC`.
  pub compliance_requirements: Vec<String>,
  pub privacy_accepted:        bool,
}

impl Default for MilitaryAccessDraft {
  fn default() -> Self {
    Self {
      first_name:              String::new(),
      last_name:               String::new(),
      email:                   String::new(),
      phone:                   String::new(),
      organization:            String::new(),
      rank:                    String::new(),
      security_clearance:      SecurityClearance::default().to_string(),
      application_area:        ApplicationArea::default().to_string(),
      specifications:          String::new(),
      compliance_requirements: Vec::new(),
      privacy_accepted:        false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilitaryAccessRequest {
  pub first_name:              String,
  pub last_name:               String,
  pub email:                   String,
  pub phone:                   String,
  pub organization:            String,
  pub rank:                    String,
  pub security_clearance:      SecurityClearance,
  pub application_area:        ApplicationArea,
  pub specifications:          String,
  pub compliance_requirements: Vec<String>,
  pub privacy_accepted:        bool,
}

impl FormSchema for MilitaryAccessDraft {
  type Data = MilitaryAccessRequest;
  type Field = MilitaryField;

  const NAME: &'static str = "military-access";

  fn constraint(field: F) -> Constraint {
    match field {
      F::FirstName => FIRST_NAME,
      F::LastName => LAST_NAME,
      F::Email => EMAIL,
      F::Phone => Constraint::MinChars {
        min:     10,
        message: "Phone number is required for military access",
      },
      F::Organization => Constraint::MinChars {
        min:     2,
        message: "Organization name is required",
      },
      F::Rank => Constraint::OptionalText,
      F::SecurityClearance => Constraint::OneOf { options: SecurityClearance::VARIANTS },
      F::ApplicationArea => Constraint::OneOf { options: ApplicationArea::VARIANTS },
      F::Specifications => Constraint::MinChars {
        min:     20,
        message: "Please provide detailed specifications",
      },
      F::ComplianceRequirements => Constraint::AnyItems,
      F::PrivacyAccepted => PRIVACY,
    }
  }

  fn value(&self, field: F) -> FieldValue {
    match field {
      F::FirstName => self.first_name.clone().into(),
      F::LastName => self.last_name.clone().into(),
      F::Email => self.email.clone().into(),
      F::Phone => self.phone.clone().into(),
      F::Organization => self.organization.clone().into(),
      F::Rank => self.rank.clone().into(),
      F::SecurityClearance => self.security_clearance.clone().into(),
      F::ApplicationArea => self.application_area.clone().into(),
      F::Specifications => self.specifications.clone().into(),
      F::ComplianceRequirements => self.compliance_requirements.clone().into(),
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
      F::Organization => self.organization = value.into_text(name)?,
      F::Rank => self.rank = value.into_text(name)?,
      F::SecurityClearance => self.security_clearance = value.into_text(name)?,
      F::ApplicationArea => self.application_area = value.into_text(name)?,
      F::Specifications => self.specifications = value.into_text(name)?,
      F::ComplianceRequirements => self.compliance_requirements = value.into_list(name)?,
      F::PrivacyAccepted => self.privacy_accepted = value.into_flag(name)?,
    }
    Ok(())
  }

  fn build(&self) -> Result<MilitaryAccessRequest, FieldErrors<F>> {
    Ok(MilitaryAccessRequest {
      first_name:              self.first_name.clone(),
      last_name:               self.last_name.clone(),
      email:                   self.email.clone(),
      phone:                   self.phone.clone(),
      organization:            self.organization.clone(),
      rank:                    self.rank.clone(),
      security_clearance:      parse_choice(F::SecurityClearance, &self.security_clearance)?,
      application_area:        parse_choice(F::ApplicationArea, &self.application_area)?,
      specifications:          self.specifications.clone(),
      compliance_requirements: self.compliance_requirements.clone(),
      privacy_accepted:        self.privacy_accepted,
    })
  }
}
