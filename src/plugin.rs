//! Build-host entry points sequencing parsing, mode selection and module synthesis.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::asset_paths::{
  component_source_path, has_collection_placeholder, is_svg_path, resolve_canonical_path,
  to_component_path,
};
use crate::collaborators::{FileGlob, FsGlob, Optimizer, Simplifier, SvgoOptimizer, UsvgSimplifier};
use crate::config::PluginConfig;
use crate::error::Result;
use crate::identifier::ModuleIdentifier;
use crate::mode::{ResolutionMode, resolve_mode};
use crate::synthesis::{synthesize_collection, synthesize_component};

/// Stage of the host pipeline the plugin runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
  /// Before the host's own resolvers and loaders.
  Pre,
}

/// Result of an entry point call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
  /// The identifier is a single-file component.
  Component(T),
  /// The identifier names a family of sibling files.
  Collection(T),
  /// Not ours; the host applies its default handling.
  NoOpinion,
}

impl<T> Outcome<T> {
  /// The carried value, or `None` for [`Outcome::NoOpinion`].
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Component(value) | Self::Collection(value) => Some(value),
      Self::NoOpinion => None,
    }
  }

  /// Whether the host should fall back to its default handling.
  pub fn is_no_opinion(&self) -> bool {
    matches!(self, Self::NoOpinion)
  }
}

/// SVG resolver plugin.
///
/// Holds only immutable state: the project root, the configuration and the collaborators.
/// Every call re-derives its decision from the identifier alone, so calls may run
/// concurrently in any order.
#[derive(Debug, Clone)]
pub struct SvgPlugin<O = SvgoOptimizer, S = UsvgSimplifier, G = FsGlob> {
  root: PathBuf,
  config: PluginConfig,
  optimizer: O,
  simplifier: S,
  glob: G,
}

impl SvgPlugin {
  /// Create a plugin using svgo, usvg and the file system glob.
  pub fn new(root: impl Into<PathBuf>, config: PluginConfig) -> Self {
    let root = root.into();
    Self {
      optimizer: SvgoOptimizer::new(root.clone()),
      simplifier: UsvgSimplifier::default(),
      glob: FsGlob,
      root,
      config,
    }
  }
}

impl<O, S, G> SvgPlugin<O, S, G> {
  /// Plugin name reported to the host.
  pub const NAME: &'static str = "solid-svg";

  /// Pipeline stage the plugin must be registered in.
  pub fn enforce(&self) -> Enforce {
    Enforce::Pre
  }

  /// Project root canonical identifiers are relative to.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Configuration fixed at construction.
  pub fn config(&self) -> &PluginConfig {
    &self.config
  }

  /// Replace the markup optimizer.
  pub fn with_optimizer<T: Optimizer>(self, optimizer: T) -> SvgPlugin<T, S, G> {
    SvgPlugin {
      root: self.root,
      config: self.config,
      optimizer,
      simplifier: self.simplifier,
      glob: self.glob,
    }
  }

  /// Replace the markup simplifier.
  pub fn with_simplifier<T: Simplifier>(self, simplifier: T) -> SvgPlugin<O, T, G> {
    SvgPlugin {
      root: self.root,
      config: self.config,
      optimizer: self.optimizer,
      simplifier,
      glob: self.glob,
    }
  }

  /// Replace the collection member enumerator.
  pub fn with_glob<T: FileGlob>(self, glob: T) -> SvgPlugin<O, S, T> {
    SvgPlugin {
      root: self.root,
      config: self.config,
      optimizer: self.optimizer,
      simplifier: self.simplifier,
      glob,
    }
  }

  /// Map a raw import to its canonical identifier.
  ///
  /// Collections resolve to their root-relative path, components to the same path with
  /// a `.svg.tsx` suffix. URL mode and non-SVG paths are left to the host.
  pub fn resolve_id(&self, raw: &str, importer: Option<&Path>) -> Outcome<String> {
    let id = ModuleIdentifier::parse(raw);
    if !is_svg_path(&id.path) {
      return Outcome::NoOpinion;
    }

    let resolved = resolve_canonical_path(&self.root, importer, &id.path);
    if has_collection_placeholder(raw) {
      let canonical = format!("{resolved}{}", id.query.suffix());
      debug!(%raw, %canonical, "resolved svg collection");
      return Outcome::Collection(canonical);
    }

    match resolve_mode(&id.query, &self.config) {
      ResolutionMode::Component => {
        let canonical = format!("{}{}", to_component_path(&resolved), id.query.suffix());
        debug!(%raw, %canonical, "resolved svg component");
        Outcome::Component(canonical)
      }
      ResolutionMode::Url => {
        debug!(%raw, "leaving svg to default asset handling");
        Outcome::NoOpinion
      }
    }
  }
}

impl<O, S, G> SvgPlugin<O, S, G>
where
  O: Optimizer,
  S: Simplifier,
  G: FileGlob,
{
  /// Produce the module source for a canonical identifier.
  pub async fn load(&self, raw: &str) -> Result<Outcome<String>> {
    let id = ModuleIdentifier::parse(raw);
    if !is_svg_path(&id.path) {
      return Ok(Outcome::NoOpinion);
    }

    if has_collection_placeholder(raw) {
      let source = synthesize_collection(&self.glob, &self.root, &id)?;
      return Ok(Outcome::Collection(source));
    }

    match resolve_mode(&id.query, &self.config) {
      ResolutionMode::Component => {
        let file_path = component_source_path(&id.path);
        debug!(%raw, file = file_path, "loading svg component");
        let source = synthesize_component(
          &self.root,
          file_path,
          &self.config,
          &self.optimizer,
          &self.simplifier,
        )
        .await?;
        Ok(Outcome::Component(source))
      }
      ResolutionMode::Url => Ok(Outcome::NoOpinion),
    }
  }
}
