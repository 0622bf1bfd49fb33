//! Handlers for the read-only catalog endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/products` | Optional `?recycled=true\|false` |
//! | `GET`  | `/products/{id}` | Id or slugified name; 404 if unknown |
//! | `GET`  | `/applications` | |
//! | `GET`  | `/applications/{id}` | Category token; 404 for `other` |
//! | `GET`  | `/features` | |
//! | `GET`  | `/certifications` | |

use axum::{
  Json,
  extract::{Path, Query},
};
use serde::Deserialize;
use thindown_core::{
  catalog::{
    self,
    APPLICATION_CATEGORIES,
    ApplicationCategoryInfo,
    CERTIFICATIONS,
    Certification,
    FEATURES,
    Feature,
    PRODUCT_LINES,
    ProductLine,
  },
  choice::ApplicationCategory,
};

use crate::error::ApiError;

// ─── Products ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProductParams {
  pub recycled: Option<String>,
}

/// `GET /products[?recycled=<bool>]`
pub async fn products(
  Query(params): Query<ProductParams>,
) -> Result<Json<Vec<&'static ProductLine>>, ApiError> {
  let lines = match params.recycled.as_deref() {
    None => PRODUCT_LINES.iter().collect(),
    Some(raw) => {
      let recycled: bool = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("recycled must be true or false, got {raw:?}")))?;
      catalog::product_lines_where_recycled(recycled).collect()
    }
  };
  Ok(Json(lines))
}

/// `GET /products/{id}`
pub async fn product(Path(id): Path<String>) -> Result<Json<&'static ProductLine>, ApiError> {
  catalog::product_line(&id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("product line {id} not found")))
}

// ─── Applications ─────────────────────────────────────────────────────────────

/// `GET /applications`
pub async fn applications() -> Json<&'static [ApplicationCategoryInfo]> {
  Json(APPLICATION_CATEGORIES)
}

/// `GET /applications/{id}`
pub async fn application(
  Path(id): Path<String>,
) -> Result<Json<&'static ApplicationCategoryInfo>, ApiError> {
  id.parse::<ApplicationCategory>()
    .ok()
    .and_then(catalog::application_category)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("application category {id} not found")))
}

// ─── Features & certifications ────────────────────────────────────────────────

/// `GET /features`
pub async fn features() -> Json<&'static [Feature]> { Json(FEATURES) }

/// `GET /certifications`
pub async fn certifications() -> Json<&'static [Certification]> { Json(CERTIFICATIONS) }
