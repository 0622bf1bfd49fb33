//! `GET /forms/{form}/schema`: the declarative description of a form.
//!
//! Lets a front end render inputs and run the same rules client-side without
//! hard-coding them. The form submission endpoints themselves are not served
//! here.

use axum::{Json, extract::Path};
use serde::Serialize;
use thindown_core::{form::FieldSpec, forms::FormKind};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchemaBody {
  pub form:     FormKind,
  /// `null` for forms that are never posted.
  pub endpoint: Option<&'static str>,
  pub fields:   Vec<FieldSpec>,
}

/// `GET /forms/{form}/schema`
pub async fn handler(Path(form): Path<String>) -> Result<Json<FormSchemaBody>, ApiError> {
  let kind: FormKind = form
    .parse()
    .map_err(|_| ApiError::NotFound(format!("form {form} not found")))?;
  tracing::debug!(form = %kind, "serving form schema");
  Ok(Json(FormSchemaBody {
    form:     kind,
    endpoint: kind.endpoint(),
    fields:   kind.describe(),
  }))
}
