//! Raw field values and the field-keyed error map.
//!
//! A draft holds whatever the user typed, including values that do not yet
//! satisfy the form's constraints. Values cross the controller boundary as
//! [`FieldValue`]; validation failures come back as [`FieldErrors`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Value kinds ─────────────────────────────────────────────────────────────

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
  /// Free text or a token from a closed set.
  Text,
  /// A checkbox.
  Flag,
  /// A multi-select.
  List,
}

impl ValueKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Text => "text",
      Self::Flag => "flag",
      Self::List => "list",
    }
  }
}

// ─── FieldValue ──────────────────────────────────────────────────────────────

/// A single raw input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Flag(bool),
  List(Vec<String>),
  Text(String),
}

impl FieldValue {
  pub fn kind(&self) -> ValueKind {
    match self {
      Self::Flag(_) => ValueKind::Flag,
      Self::List(_) => ValueKind::List,
      Self::Text(_) => ValueKind::Text,
    }
  }

  pub fn into_text(self, field: &'static str) -> Result<String> {
    match self {
      Self::Text(s) => Ok(s),
      other => Err(other.mismatch(field, ValueKind::Text)),
    }
  }

  pub fn into_flag(self, field: &'static str) -> Result<bool> {
    match self {
      Self::Flag(b) => Ok(b),
      other => Err(other.mismatch(field, ValueKind::Flag)),
    }
  }

  pub fn into_list(self, field: &'static str) -> Result<Vec<String>> {
    match self {
      Self::List(items) => Ok(items),
      other => Err(other.mismatch(field, ValueKind::List)),
    }
  }

  fn mismatch(&self, field: &'static str, expected: ValueKind) -> Error {
    Error::FieldType {
      field,
      expected: expected.as_str(),
      found: self.kind().as_str(),
    }
  }
}

impl From<&str> for FieldValue {
  fn from(s: &str) -> Self { Self::Text(s.to_string()) }
}

impl From<String> for FieldValue {
  fn from(s: String) -> Self { Self::Text(s) }
}

impl From<bool> for FieldValue {
  fn from(b: bool) -> Self { Self::Flag(b) }
}

impl From<Vec<String>> for FieldValue {
  fn from(items: Vec<String>) -> Self { Self::List(items) }
}

// ─── FieldErrors ─────────────────────────────────────────────────────────────

/// Validation failures keyed by field. Each failing field carries exactly one
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<F: Ord> {
  errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
  fn default() -> Self { Self { errors: BTreeMap::new() } }
}

impl<F: Ord + Copy> FieldErrors<F> {
  pub fn new() -> Self { Self::default() }

  /// A map holding a single error.
  pub fn single(field: F, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.insert(field, message);
    errors
  }

  /// Set the message for `field`, replacing any previous one.
  pub fn insert(&mut self, field: F, message: impl Into<String>) {
    self.errors.insert(field, message.into());
  }

  pub fn remove(&mut self, field: F) -> Option<String> {
    self.errors.remove(&field)
  }

  pub fn get(&self, field: F) -> Option<&str> {
    self.errors.get(&field).map(String::as_str)
  }

  pub fn contains(&self, field: F) -> bool { self.errors.contains_key(&field) }

  pub fn clear(&mut self) { self.errors.clear(); }

  pub fn is_empty(&self) -> bool { self.errors.is_empty() }

  pub fn len(&self) -> usize { self.errors.len() }

  /// Iterate in field declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
    self.errors.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

impl<F: Ord + Copy> FromIterator<(F, String)> for FieldErrors<F> {
  fn from_iter<I: IntoIterator<Item = (F, String)>>(iter: I) -> Self {
    Self { errors: iter.into_iter().collect() }
  }
}
