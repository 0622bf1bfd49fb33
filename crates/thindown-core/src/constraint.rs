//! Declarative per-field rules.
//!
//! Every field of every form is described by exactly one [`Constraint`]. The
//! same value drives inline validation, the submit gate, and the schema
//! published by the site API.

use serde::Serialize;

use crate::{
  field::{FieldValue, ValueKind},
  text::is_valid_email,
};

/// A single validation rule with its failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Constraint {
  /// Free text with no rule attached.
  OptionalText,
  /// Text of at least `min` characters.
  MinChars { min: usize, message: &'static str },
  /// Text shaped like an email address.
  Email { message: &'static str },
  /// One token from a closed set.
  OneOf { options: &'static [&'static str] },
  /// A checkbox that has to be ticked.
  MustBeTrue { message: &'static str },
  /// A multi-select with at least `min` entries.
  MinItems { min: usize, message: &'static str },
  /// A multi-select with no rule attached.
  AnyItems,
}

impl Constraint {
  /// The value kind this rule applies to.
  pub fn kind(&self) -> ValueKind {
    match self {
      Self::OptionalText
      | Self::MinChars { .. }
      | Self::Email { .. }
      | Self::OneOf { .. } => ValueKind::Text,
      Self::MustBeTrue { .. } => ValueKind::Flag,
      Self::MinItems { .. } | Self::AnyItems => ValueKind::List,
    }
  }

  /// Check `value`, returning the failure message if the rule is violated.
  pub fn check(&self, value: &FieldValue) -> Result<(), String> {
    match (self, value) {
      (Self::OptionalText, FieldValue::Text(_)) => Ok(()),
      (Self::MinChars { min, message }, FieldValue::Text(s)) => {
        if s.chars().count() >= *min {
          Ok(())
        } else {
          Err((*message).to_string())
        }
      }
      (Self::Email { message }, FieldValue::Text(s)) => {
        if is_valid_email(s) {
          Ok(())
        } else {
          Err((*message).to_string())
        }
      }
      (Self::OneOf { options }, FieldValue::Text(s)) => {
        if options.contains(&s.as_str()) {
          Ok(())
        } else {
          Err(invalid_option(s, options))
        }
      }
      (Self::MustBeTrue { message }, FieldValue::Flag(b)) => {
        if *b { Ok(()) } else { Err((*message).to_string()) }
      }
      (Self::MinItems { min, message }, FieldValue::List(items)) => {
        if items.len() >= *min {
          Ok(())
        } else {
          Err((*message).to_string())
        }
      }
      (Self::AnyItems, FieldValue::List(_)) => Ok(()),
      (rule, other) => Err(format!(
        "Expected {}, received {}",
        rule.kind().as_str(),
        other.kind().as_str()
      )),
    }
  }
}

/// The message reported for a token outside its closed set.
pub fn invalid_option(value: &str, options: &[&str]) -> String {
  format!(
    "Invalid option '{value}', expected one of: {}",
    options.join(", ")
  )
}
