//! Error types surfaced to the host when a module load fails.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single identifier's resolution or load.
#[derive(Error, Debug)]
pub enum Error {
  /// The markup file backing a component could not be read.
  #[error("failed to read {}: {source}", .path.display())]
  Read {
    /// File that was requested.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },

  /// The optimizer collaborator rejected the markup.
  #[error("optimizer failed: {0}")]
  Optimize(#[source] CollaboratorError),

  /// The simplifier collaborator rejected the markup.
  #[error("simplifier failed: {0}")]
  Simplify(#[source] CollaboratorError),

  /// Enumerating the members of a collection failed.
  #[error("failed to expand pattern {pattern}: {source}")]
  Glob {
    /// Shell-style pattern that was being expanded.
    pattern: String,
    /// Source traversal error.
    source: walkdir::Error,
  },

  /// The collection pattern is not a valid shell pattern.
  #[error("invalid collection pattern {pattern}: {source}")]
  GlobPattern {
    /// Shell-style pattern that failed to compile.
    pattern: String,
    /// Source pattern error.
    source: glob::PatternError,
  },

  /// A file returned by the glob did not match the placeholder expression.
  #[error("collection member {file} does not match placeholder pattern {pattern}")]
  PlaceholderMismatch {
    /// File path produced by the glob collaborator.
    file: String,
    /// Regular expression derived from the placeholder path.
    pattern: String,
  },

  /// The placeholder path could not be compiled into a regular expression.
  #[error("invalid placeholder pattern: {0}")]
  Pattern(#[from] regex::Error),

  /// A configuration file could not be read or parsed.
  #[error("failed to load configuration {}: {source}", .path.display())]
  Config {
    /// Configuration file path.
    path: PathBuf,
    /// Underlying cause.
    source: ConfigError,
  },
}

/// Reasons a configuration file failed to load.
#[derive(Error, Debug)]
pub enum ConfigError {
  /// The file could not be read.
  #[error(transparent)]
  Io(#[from] std::io::Error),
  /// The file is not valid configuration JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

/// Failure reported by an external collaborator process.
#[derive(Error, Debug)]
pub enum CollaboratorError {
  /// The collaborator program could not be started or waited on.
  #[error("failed to run `{program}`: {source}")]
  Spawn {
    /// Program that was invoked.
    program: String,
    /// Source I/O error.
    source: std::io::Error,
  },

  /// The collaborator exited unsuccessfully.
  #[error("`{program}` exited with {status}: {stderr}")]
  Status {
    /// Program that was invoked.
    program: String,
    /// Exit status description.
    status: String,
    /// Captured standard error output.
    stderr: String,
  },

  /// The collaborator produced output that is not UTF-8 text.
  #[error("`{program}` produced non UTF-8 output")]
  Utf8 {
    /// Program that was invoked.
    program: String,
  },

  /// Any other collaborator-specific failure.
  #[error("{0}")]
  Other(String),
}
