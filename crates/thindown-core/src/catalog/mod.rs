//! Static content the site pages are built from.
//!
//! Everything here is `'static` reference data: defined once, never mutated.
//! The structs only derive `Serialize`; the site API and the CLI print them
//! as JSON with camelCase keys.

mod applications;
mod features;
mod products;

use serde::Serialize;

use crate::{choice::ApplicationCategory, text::slugify};

pub use applications::APPLICATION_CATEGORIES;
pub use features::{CERTIFICATIONS, FEATURES};
pub use products::PRODUCT_LINES;

// ─── Products ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecifications {
  pub weight:         &'static str,
  pub thickness:      &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fill_power:     Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub temperature:    Option<&'static str>,
  pub certifications: &'static [&'static str],
}

/// One THINDOWN® fabric line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
  pub id:             &'static str,
  pub name:           &'static str,
  pub description:    &'static str,
  pub features:       &'static [&'static str],
  pub applications:   &'static [&'static str],
  pub specifications: ProductSpecifications,
  pub image:          &'static str,
  pub is_recycled:    bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_stretch:     Option<bool>,
}

// ─── Applications ────────────────────────────────────────────────────────────

/// Marketing copy for one [`ApplicationCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCategoryInfo {
  pub id:          ApplicationCategory,
  pub name:        &'static str,
  pub description: &'static str,
  /// Icon name from the site's icon set.
  pub icon:        &'static str,
  pub benefits:    &'static [&'static str],
  pub use_cases:   &'static [&'static str],
  pub image:       &'static str,
}

// ─── Features & certifications ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
  pub id:          &'static str,
  pub title:       &'static str,
  pub description: &'static str,
  pub icon:        &'static str,
  pub benefit:     &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
  pub name:        &'static str,
  pub description: &'static str,
  pub logo:        &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link:        Option<&'static str>,
}

// ─── Lookups ─────────────────────────────────────────────────────────────────

/// Find a product line by id or by the slug of its display name.
pub fn product_line(key: &str) -> Option<&'static ProductLine> {
  PRODUCT_LINES
    .iter()
    .find(|p| p.id == key)
    .or_else(|| PRODUCT_LINES.iter().find(|p| slugify(p.name) == key))
}

/// Product lines filtered by recycled content.
pub fn product_lines_where_recycled(recycled: bool) -> impl Iterator<Item = &'static ProductLine> {
  PRODUCT_LINES.iter().filter(move |p| p.is_recycled == recycled)
}

/// Marketing copy for `category`. [`ApplicationCategory::Other`] has none.
pub fn application_category(
  category: ApplicationCategory,
) -> Option<&'static ApplicationCategoryInfo> {
  APPLICATION_CATEGORIES.iter().find(|a| a.id == category)
}

pub fn feature(id: &str) -> Option<&'static Feature> { FEATURES.iter().find(|f| f.id == id) }
