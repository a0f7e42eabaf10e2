use std::path::{Path, PathBuf};

use serde_json::json;
use tokio::process::Command;

use super::Optimizer;
use super::process::run_piped;
use crate::error::CollaboratorError;

/// Environment variable carrying the per-call options into the node script.
const OPTIONS_ENV: &str = "SOLID_SVG_SVGO_OPTIONS";

/// Loads the project's svgo configuration, overlays the per-call options and optimizes
/// the markup read from stdin.
const SVGO_SCRIPT: &str = r#"import { optimize, loadConfig } from "svgo";
const chunks = [];
for await (const chunk of process.stdin) chunks.push(chunk);
const config = (await loadConfig()) ?? {};
const options = JSON.parse(process.env.SOLID_SVG_SVGO_OPTIONS ?? "{}");
const { data } = optimize(Buffer.concat(chunks).toString("utf-8"), Object.assign({}, config, options));
process.stdout.write(data);
"#;

/// Optimizer backed by the `svgo` package installed in the project.
///
/// svgo's own configuration discovery runs from the project root on every call, so edits
/// to `svgo.config.*` are picked up without restarting the build.
#[derive(Debug, Clone)]
pub struct SvgoOptimizer {
  node: PathBuf,
  root: PathBuf,
}

impl SvgoOptimizer {
  /// Use the `node` binary on `PATH`, resolving `svgo` from `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      node: PathBuf::from("node"),
      root: root.into(),
    }
  }

  /// Override the node executable.
  pub fn with_node(mut self, node: impl Into<PathBuf>) -> Self {
    self.node = node.into();
    self
  }

  fn command(&self, path: &Path) -> Command {
    let options = json!({ "path": path.to_string_lossy() });
    let mut command = Command::new(&self.node);
    command
      .args(["--input-type=module", "-e", SVGO_SCRIPT])
      .current_dir(&self.root)
      .env(OPTIONS_ENV, options.to_string());
    command
  }
}

impl Optimizer for SvgoOptimizer {
  async fn optimize(&self, markup: &[u8], path: &Path) -> Result<String, CollaboratorError> {
    tracing::trace!(path = %path.display(), "running svgo");
    let program = self.node.to_string_lossy();
    run_piped(self.command(path), &program, markup).await
  }
}
