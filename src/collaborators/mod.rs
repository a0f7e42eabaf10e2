//! Contracts with the external systems the resolver delegates to.
//!
//! Each trait has one production adapter: [`FsGlob`] walks the file system,
//! [`SvgoOptimizer`] and [`UsvgSimplifier`] drive the respective tools as child processes.

use std::future::Future;
use std::path::Path;

use crate::error::{CollaboratorError, Result};

mod glob;
mod process;
mod svgo;
mod usvg;

pub use glob::FsGlob;
pub use svgo::SvgoOptimizer;
pub use usvg::UsvgSimplifier;

/// Markup optimizer applied before a component is generated.
pub trait Optimizer: Send + Sync {
  /// Optimize `markup` read from `path`, returning the optimized markup text.
  fn optimize(
    &self,
    markup: &[u8],
    path: &Path,
  ) -> impl Future<Output = std::result::Result<String, CollaboratorError>> + Send;
}

/// Canonicalizes markup for the downstream renderer.
///
/// Callers must pass markup whose root element declares the SVG namespace.
pub trait Simplifier: Send + Sync {
  /// Simplify namespaced markup text.
  fn simplify(
    &self,
    markup: &str,
  ) -> impl Future<Output = std::result::Result<String, CollaboratorError>> + Send;
}

/// Enumerates the files matching a shell-style pattern.
pub trait FileGlob: Send + Sync {
  /// Return paths matching `pattern`, interpreted relative to `root`.
  ///
  /// Returned paths keep the directory prefix as written in the pattern. Their order is
  /// whatever order the implementation guarantees.
  fn glob(&self, root: &Path, pattern: &str) -> Result<Vec<String>>;
}
