use std::ffi::OsString;
use std::path::PathBuf;

use tokio::process::Command;

use super::Simplifier;
use super::process::run_piped;
use crate::error::CollaboratorError;

/// Simplifier backed by the `usvg` command line tool.
///
/// By default the markup is read from stdin (`-`) and printed to stdout (`-c`).
#[derive(Debug, Clone)]
pub struct UsvgSimplifier {
  program: PathBuf,
  args: Vec<OsString>,
}

impl Default for UsvgSimplifier {
  fn default() -> Self {
    Self {
      program: PathBuf::from("usvg"),
      args: vec!["-c".into(), "-".into()],
    }
  }
}

impl UsvgSimplifier {
  /// Use a specific executable with its stdin-to-stdout arguments.
  pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    Self {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
    }
  }
}

impl Simplifier for UsvgSimplifier {
  async fn simplify(&self, markup: &str) -> Result<String, CollaboratorError> {
    tracing::trace!(bytes = markup.len(), "running usvg");
    let mut command = Command::new(&self.program);
    command.args(&self.args);
    let program = self.program.to_string_lossy();
    run_piped(command, &program, markup.as_bytes()).await
  }
}
