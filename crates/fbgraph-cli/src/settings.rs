//! Layered client settings: config file, then `FBGRAPH_*` environment
//! variables, then command-line flags.

use std::path::Path;

use anyhow::Context as _;
use fbgraph_api::DEFAULT_BASE_URL;
use fbgraph_http::{DEFAULT_TIMEOUT_SECS, TransportConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  #[serde(default = "default_base_url")]
  pub base_url:     String,
  #[serde(default)]
  pub access_token: Option<String>,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }

fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

impl Settings {
  /// Read `path` (if it exists) and overlay `FBGRAPH_*` variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("FBGRAPH"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  pub fn transport(&self) -> TransportConfig {
    TransportConfig {
      access_token: self.access_token.clone(),
      timeout_secs: self.timeout_secs,
    }
  }
}
