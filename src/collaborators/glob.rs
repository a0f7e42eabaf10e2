use std::path::Path;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use super::FileGlob;
use crate::error::{Error, Result};

/// Shell semantics for member names: wildcards stop at `/` and never match a leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: true,
};

/// File system glob restricted to wildcards in the final path segment.
///
/// Results are sorted by file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsGlob;

impl FileGlob for FsGlob {
  fn glob(&self, root: &Path, pattern: &str) -> Result<Vec<String>> {
    let (dir, file_pattern) = match pattern.rsplit_once('/') {
      Some((dir, file)) => (Some(dir), file),
      None => (None, pattern),
    };
    let matcher = Pattern::new(file_pattern).map_err(|source| Error::GlobPattern {
      pattern: pattern.to_string(),
      source,
    })?;

    let search_dir = match dir {
      Some("") => root.join("/"),
      Some(dir) => root.join(dir),
      None => root.to_path_buf(),
    };
    if !search_dir.is_dir() {
      return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(&search_dir)
      .min_depth(1)
      .max_depth(1)
      .follow_links(true)
      .sort_by_file_name()
    {
      let entry = entry.map_err(|source| Error::Glob {
        pattern: pattern.to_string(),
        source,
      })?;
      if !entry.file_type().is_file() {
        continue;
      }

      let file_name = entry.file_name().to_string_lossy();
      if !matcher.matches_with(&file_name, MATCH_OPTIONS) {
        continue;
      }

      matches.push(match dir {
        Some(dir) => format!("{dir}/{file_name}"),
        None => file_name.into_owned(),
      });
    }

    Ok(matches)
  }
}
