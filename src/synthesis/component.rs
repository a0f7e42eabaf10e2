use std::path::Path;

use crate::collaborators::{Optimizer, Simplifier};
use crate::config::PluginConfig;
use crate::error::{Error, Result};

use super::markup::{compile_component, ensure_namespace};

/// Read a markup file and turn it into a component module.
///
/// `file_path` is the real `.svg` file, relative to `root` or absolute. The optimizer and
/// simplifier run only when enabled in `config`; their failures are returned unchanged.
pub async fn synthesize_component<O, S>(
  root: &Path,
  file_path: &str,
  config: &PluginConfig,
  optimizer: &O,
  simplifier: &S,
) -> Result<String>
where
  O: Optimizer,
  S: Simplifier,
{
  let absolute = root.join(file_path);
  let raw = tokio::fs::read(&absolute).await.map_err(|source| Error::Read {
    path: absolute.clone(),
    source,
  })?;

  let mut markup = if config.enable_optimize {
    optimizer
      .optimize(&raw, Path::new(file_path))
      .await
      .map_err(Error::Optimize)?
  } else {
    String::from_utf8_lossy(&raw).into_owned()
  };

  if config.enable_simplify {
    let namespaced = ensure_namespace(&markup);
    markup = simplifier
      .simplify(&namespaced)
      .await
      .map_err(Error::Simplify)?;
  }

  Ok(compile_component(&markup))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CollaboratorError;
  use std::fs;
  use std::sync::Mutex;
  use tempfile::tempdir;

  #[derive(Default)]
  struct RecordingOptimizer {
    paths: Mutex<Vec<String>>,
  }

  impl Optimizer for RecordingOptimizer {
    async fn optimize(
      &self,
      markup: &[u8],
      path: &Path,
    ) -> std::result::Result<String, CollaboratorError> {
      self.paths.lock().unwrap().push(path.display().to_string());
      let text = String::from_utf8_lossy(markup);
      Ok(text.replace("  ", ""))
    }
  }

  #[derive(Default)]
  struct RecordingSimplifier {
    inputs: Mutex<Vec<String>>,
  }

  impl Simplifier for RecordingSimplifier {
    async fn simplify(&self, markup: &str) -> std::result::Result<String, CollaboratorError> {
      self.inputs.lock().unwrap().push(markup.to_string());
      Ok(markup.replace("<path/>", "<path d=\"M0 0\"/>"))
    }
  }

  struct Failing;

  impl Optimizer for Failing {
    async fn optimize(
      &self,
      _markup: &[u8],
      _path: &Path,
    ) -> std::result::Result<String, CollaboratorError> {
      Err(CollaboratorError::Other("optimizer exploded".into()))
    }
  }

  impl Simplifier for Failing {
    async fn simplify(&self, _markup: &str) -> std::result::Result<String, CollaboratorError> {
      Err(CollaboratorError::Other("simplifier exploded".into()))
    }
  }

  fn config(enable_optimize: bool, enable_simplify: bool) -> PluginConfig {
    PluginConfig {
      enable_optimize,
      enable_simplify,
      ..PluginConfig::default()
    }
  }

  fn fixture(content: &str) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logo.svg"), content).unwrap();
    dir
  }

  #[tokio::test]
  async fn wraps_raw_markup_when_collaborators_are_disabled() {
    let dir = fixture(r#"<svg width="10"><path/></svg>"#);
    let optimizer = RecordingOptimizer::default();
    let simplifier = RecordingSimplifier::default();

    let source = synthesize_component(
      dir.path(),
      "logo.svg",
      &config(false, false),
      &optimizer,
      &simplifier,
    )
    .await
    .unwrap();

    assert_eq!(
      source,
      r#"export default (props = {}) => <svg width="10" {...props}><path/></svg>"#
    );
    assert!(optimizer.paths.lock().unwrap().is_empty());
    assert!(simplifier.inputs.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn optimizer_receives_the_file_path() {
    let dir = fixture("<svg>  <path/></svg>");
    let optimizer = RecordingOptimizer::default();

    let source = synthesize_component(
      dir.path(),
      "logo.svg",
      &config(true, false),
      &optimizer,
      &Failing,
    )
    .await
    .unwrap();

    assert_eq!(source, "export default (props = {}) => <svg {...props}><path/></svg>");
    assert_eq!(*optimizer.paths.lock().unwrap(), vec!["logo.svg".to_string()]);
  }

  #[tokio::test]
  async fn simplifier_receives_namespaced_markup() {
    let dir = fixture("<svg><path/></svg>");
    let simplifier = RecordingSimplifier::default();

    let source = synthesize_component(
      dir.path(),
      "logo.svg",
      &config(false, true),
      &Failing,
      &simplifier,
    )
    .await
    .unwrap();

    assert_eq!(
      *simplifier.inputs.lock().unwrap(),
      vec![r#"<svg xmlns="http://www.w3.org/2000/svg"><path/></svg>"#.to_string()]
    );
    assert_eq!(
      source,
      r#"export default (props = {}) => <svg xmlns="http://www.w3.org/2000/svg" {...props}><path d="M0 0"/></svg>"#
    );
  }

  #[tokio::test]
  async fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = synthesize_component(
      dir.path(),
      "missing.svg",
      &config(false, false),
      &Failing,
      &Failing,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
  }

  #[tokio::test]
  async fn collaborator_failures_propagate() {
    let dir = fixture("<svg/>");
    let err = synthesize_component(dir.path(), "logo.svg", &config(true, true), &Failing, &Failing)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Optimize(CollaboratorError::Other(_))));

    let optimizer = RecordingOptimizer::default();
    let err = synthesize_component(
      dir.path(),
      "logo.svg",
      &config(true, true),
      &optimizer,
      &Failing,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Simplify(CollaboratorError::Other(_))));
  }
}
