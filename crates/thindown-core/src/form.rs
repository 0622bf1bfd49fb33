//! The `FormSchema` trait: a draft type bound to its field set and rules.
//!
//! A form is a draft struct (what the user has typed so far), a field enum
//! naming its inputs, and a validated data type that is only ever produced by
//! [`FormSchema::validate`]. Forms that are posted somewhere also implement
//! [`Submittable`].

use std::{fmt, str::FromStr};

use serde::{Serialize, de::DeserializeOwned};
use strum::IntoEnumIterator;

use crate::{
  Result,
  constraint::Constraint,
  field::{FieldErrors, FieldValue},
};

/// Declarative description of one field, as published by the site API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
  pub name:       String,
  pub constraint: Constraint,
  pub default:    FieldValue,
}

/// A form draft bound to its schema.
pub trait FormSchema:
  Clone + Default + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// The form's inputs, in declaration order.
  type Field: Copy
    + Ord
    + fmt::Debug
    + fmt::Display
    + FromStr
    + IntoEnumIterator
    + Serialize
    + Send
    + Sync
    + 'static;

  /// The payload produced by a successful validation.
  type Data: Clone + fmt::Debug + Serialize + Send + Sync + 'static;

  /// Stable machine name, e.g. `"contact"`.
  const NAME: &'static str;

  /// The rule attached to `field`.
  fn constraint(field: Self::Field) -> Constraint;

  /// A copy of the raw value currently held for `field`.
  fn value(&self, field: Self::Field) -> FieldValue;

  /// Replace the raw value for `field`. Fails only if `value` is of the
  /// wrong kind for the field.
  fn set_value(&mut self, field: Self::Field, value: FieldValue) -> Result<()>;

  /// Convert a draft that has passed every constraint into its payload.
  fn build(&self) -> Result<Self::Data, FieldErrors<Self::Field>>;

  /// Per-field mode: the message for `field` if its rule is violated.
  fn check_field(&self, field: Self::Field) -> Option<String> {
    Self::constraint(field).check(&self.value(field)).err()
  }

  /// Whole-object mode: check every field and build the payload only if all
  /// of them pass.
  fn validate(&self) -> Result<Self::Data, FieldErrors<Self::Field>> {
    let errors: FieldErrors<Self::Field> = Self::Field::iter()
      .filter_map(|field| self.check_field(field).map(|message| (field, message)))
      .collect();

    if !errors.is_empty() {
      tracing::debug!(form = Self::NAME, failed = errors.len(), "validation failed");
      return Err(errors);
    }
    self.build()
  }

  /// Every field with its rule and default value.
  fn describe() -> Vec<FieldSpec> {
    let defaults = Self::default();
    Self::Field::iter()
      .map(|field| FieldSpec {
        name:       field.to_string(),
        constraint: Self::constraint(field),
        default:    defaults.value(field),
      })
      .collect()
  }
}

/// A form that is delivered to a fixed endpoint.
pub trait Submittable: FormSchema {
  /// Path the validated payload is posted to, relative to the site root.
  const ENDPOINT: &'static str;
  /// Banner shown after the endpoint accepts the submission.
  const SUCCESS_MESSAGE: &'static str;
  /// Banner shown when delivery fails for any reason.
  const FAILURE_MESSAGE: &'static str;
}

/// Parse a token field during [`FormSchema::build`].
pub(crate) fn parse_choice<F, T>(field: F, raw: &str) -> Result<T, FieldErrors<F>>
where
  F: Copy + Ord,
  T: FromStr + strum::VariantNames,
{
  raw.parse().map_err(|_| {
    FieldErrors::single(field, crate::constraint::invalid_option(raw, T::VARIANTS))
  })
}
