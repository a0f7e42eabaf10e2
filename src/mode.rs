//! Output mode selection for a single identifier.

use serde::Deserialize;

use crate::config::PluginConfig;
use crate::identifier::{COMPONENT_FLAG, Query, URL_FLAG};

/// What kind of module an eligible, non-collection identifier turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
  /// Inline renderable component module.
  Component,
  /// Left to the host's default asset URL handling.
  Url,
}

/// Decide the mode for `query`. `component` beats `url`, and both beat the configured default.
pub fn resolve_mode(query: &Query, config: &PluginConfig) -> ResolutionMode {
  if query.has(COMPONENT_FLAG) {
    ResolutionMode::Component
  } else if query.has(URL_FLAG) {
    ResolutionMode::Url
  } else {
    config.default_export_mode
  }
}
