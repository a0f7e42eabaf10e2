//! Plugin configuration loader.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::mode::ResolutionMode;

/// File looked up in the project root by [`PluginConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "solid-svg.config.json";

/// Static options fixed when the plugin is constructed.
///
/// Both the descriptive keys and the short legacy keys (`defaultExport`, `svgo`, `usvg`)
/// are accepted in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
  /// Mode used when an identifier carries neither `component` nor `url`.
  #[serde(alias = "defaultExport")]
  pub default_export_mode: ResolutionMode,
  /// Run markup through the optimizer before wrapping it.
  #[serde(alias = "svgo")]
  pub enable_optimize: bool,
  /// Run markup through the simplifier before wrapping it.
  #[serde(alias = "usvg")]
  pub enable_simplify: bool,
}

impl Default for PluginConfig {
  fn default() -> Self {
    Self {
      default_export_mode: ResolutionMode::Component,
      enable_optimize: true,
      enable_simplify: true,
    }
  }
}

impl PluginConfig {
  /// Look for `solid-svg.config.json` next to the sources being built.
  ///
  /// Projects without the file, or with one that is not valid JSON, get optimized and
  /// simplified components by default.
  pub fn discover(root: &Path) -> Self {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Like [`PluginConfig::load`], for callers that treat an unusable file as absent.
  pub fn from_path(path: &Path) -> Option<Self> {
    Self::load(path).ok()
  }

  /// Read configuration from a specific JSON file.
  pub fn load(path: &Path) -> Result<Self> {
    let wrap = |source: ConfigError| Error::Config {
      path: path.to_path_buf(),
      source,
    };
    let content = fs::read_to_string(path).map_err(|err| wrap(err.into()))?;
    serde_json::from_str(&content).map_err(|err| wrap(err.into()))
  }
}
