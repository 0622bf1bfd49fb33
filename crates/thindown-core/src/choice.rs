//! Closed token sets used by the enum fields of the forms.
//!
//! Tokens are kebab-case on the wire and in the drop-downs. Each enum knows
//! its human label for rendering option lists.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Market segment a visitor is interested in. Shared by the contact form
/// (`interestedArea`) and the sample request (`applicationCategory`).
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
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
pub enum ApplicationCategory {
  #[default]
  OutdoorApparel,
  FashionLifestyle,
  Footwear,
  Accessories,
  Military,
  HomeTextiles,
  Other,
}

impl ApplicationCategory {
  pub fn label(self) -> &'static str {
    match self {
      Self::OutdoorApparel => "Outdoor Apparel",
      Self::FashionLifestyle => "Fashion & Lifestyle",
      Self::Footwear => "Footwear",
      Self::Accessories => "Accessories",
      Self::Military => "Military & Tactical",
      Self::HomeTextiles => "Home Textiles",
      Self::Other => "Other",
    }
  }
}

/// When the requester expects to need material.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
  VariantNames,
)]
pub enum Timeline {
  #[default]
  #[serde(rename = "immediate")]
  #[strum(to_string = "immediate")]
  Immediate,
  #[serde(rename = "1-3-months")]
  #[strum(to_string = "1-3-months")]
  OneToThreeMonths,
  #[serde(rename = "3-6-months")]
  #[strum(to_string = "3-6-months")]
  ThreeToSixMonths,
  #[serde(rename = "6-12-months")]
  #[strum(to_string = "6-12-months")]
  SixToTwelveMonths,
  #[serde(rename = "over-1-year")]
  #[strum(to_string = "over-1-year")]
  OverOneYear,
}

impl Timeline {
  pub fn label(self) -> &'static str {
    match self {
      Self::Immediate => "Immediate (within 30 days)",
      Self::OneToThreeMonths => "1-3 months",
      Self::ThreeToSixMonths => "3-6 months",
      Self::SixToTwelveMonths => "6-12 months",
      Self::OverOneYear => "Over 1 year",
    }
  }
}

/// Expected order size.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
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
pub enum Volume {
  #[default]
  Prototype,
  SmallBatch,
  MediumVolume,
  LargeVolume,
}

impl Volume {
  pub fn label(self) -> &'static str {
    match self {
      Self::Prototype => "Prototype/R&D",
      Self::SmallBatch => "Small batch (< 1,000 units)",
      Self::MediumVolume => "Medium volume (1,000-10,000 units)",
      Self::LargeVolume => "Large volume (> 10,000 units)",
    }
  }
}

/// Highest clearance held by the requester.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
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
pub enum SecurityClearance {
  #[default]
  None,
  Confidential,
  Secret,
  TopSecret,
}

impl SecurityClearance {
  pub fn label(self) -> &'static str {
    match self {
      Self::None => "None",
      Self::Confidential => "Confidential",
      Self::Secret => "Secret",
      Self::TopSecret => "Top Secret",
    }
  }
}

/// Military use the requester has in mind.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
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
pub enum ApplicationArea {
  #[default]
  ProtectiveGear,
  ColdWeatherClothing,
  SleepingSystems,
  TacticalEquipment,
  Other,
}

impl ApplicationArea {
  pub fn label(self) -> &'static str {
    match self {
      Self::ProtectiveGear => "Protective Gear",
      Self::ColdWeatherClothing => "Cold Weather Clothing",
      Self::SleepingSystems => "Sleeping Systems",
      Self::TacticalEquipment => "Tactical Equipment",
      Self::Other => "Other",
    }
  }
}
