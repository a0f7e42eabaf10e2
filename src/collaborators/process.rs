use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::CollaboratorError;

/// Feed `input` to the child's stdin and collect its stdout as text.
///
/// Stdin is written while the output is being drained so large documents cannot fill
/// both pipes and stall the child.
pub(crate) async fn run_piped(
  mut command: Command,
  program: &str,
  input: &[u8],
) -> Result<String, CollaboratorError> {
  let spawn_error = |source: std::io::Error| CollaboratorError::Spawn {
    program: program.to_string(),
    source,
  };

  let mut child = command
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true)
    .spawn()
    .map_err(spawn_error)?;

  let mut stdin = child
    .stdin
    .take()
    .ok_or_else(|| CollaboratorError::Other(format!("`{program}` stdin was not captured")))?;
  let feed = async move {
    stdin.write_all(input).await?;
    stdin.shutdown().await
  };

  let (fed, output) = tokio::join!(feed, child.wait_with_output());
  let output = output.map_err(spawn_error)?;

  if !output.status.success() {
    return Err(CollaboratorError::Status {
      program: program.to_string(),
      status: output.status.to_string(),
      stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    });
  }
  // A child that exits successfully without reading all of stdin is not an error.
  if let Err(err) = fed {
    tracing::trace!(program, error = %err, "collaborator closed stdin early");
  }

  String::from_utf8(output.stdout).map_err(|_| CollaboratorError::Utf8 {
    program: program.to_string(),
  })
}
