//! Optional TOML config file and its merge with command-line flags.

use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::Deserialize;
use thindown_forms::TransportConfig;

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
  #[serde(default)]
  pub url:          String,
  #[serde(default)]
  pub timeout_secs: Option<u64>,
}

impl ConfigFile {
  /// Read `path` if given; no path means an empty file.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let Some(path) = path else {
      return Ok(Self::default());
    };
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// CLI flags override the config file, which overrides defaults.
pub fn resolve(url: Option<String>, timeout_secs: Option<u64>, file: ConfigFile) -> TransportConfig {
  let defaults = TransportConfig::default();
  TransportConfig {
    base_url: url
      .or_else(|| (!file.url.is_empty()).then(|| file.url.clone()))
      .unwrap_or(defaults.base_url),
    timeout:  timeout_secs
      .or(file.timeout_secs)
      .map(Duration::from_secs)
      .unwrap_or(defaults.timeout),
  }
}
