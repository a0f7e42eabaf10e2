//! Splitting raw module identifiers into a file path and an ordered query.

use std::fmt;

use url::form_urlencoded;

/// Query flag forcing component output.
pub const COMPONENT_FLAG: &str = "component";
/// Query flag forcing the host's asset URL handling.
pub const URL_FLAG: &str = "url";

/// A module reference split at its first `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdentifier {
  /// Everything before the first `?`.
  pub path: String,
  /// Everything after the first `?`.
  pub query: Query,
}

/// Query part of an identifier, kept both verbatim and decoded.
///
/// The verbatim text is what gets forwarded to collection members so that
/// unrecognised flags survive untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  raw: String,
  pairs: Vec<(String, String)>,
}

impl ModuleIdentifier {
  /// Parse any string into an identifier. There is no failing input.
  pub fn parse(raw: &str) -> Self {
    let (path, query) = match raw.split_once('?') {
      Some((path, query)) => (path, query),
      None => (raw, ""),
    };

    Self {
      path: path.to_string(),
      query: Query::parse(query),
    }
  }

  /// Rebuild the identifier string. Parsing the result yields `self` again.
  pub fn join(&self) -> String {
    format!("{}{}", self.path, self.query.suffix())
  }
}

impl fmt::Display for ModuleIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.join())
  }
}

impl Query {
  /// Decode URL query text; repeated keys are kept in order.
  pub fn parse(raw: &str) -> Self {
    let pairs = form_urlencoded::parse(raw.as_bytes())
      .map(|(key, value)| (key.into_owned(), value.into_owned()))
      .collect();

    Self {
      raw: raw.to_string(),
      pairs,
    }
  }

  /// The query text exactly as it appeared after the `?`.
  pub fn as_str(&self) -> &str {
    &self.raw
  }

  /// Decoded key/value pairs. Presence-only keys carry an empty value.
  pub fn pairs(&self) -> &[(String, String)] {
    &self.pairs
  }

  /// Whether `key` appears at least once, with or without a value.
  pub fn has(&self, key: &str) -> bool {
    self.pairs.iter().any(|(candidate, _)| candidate == key)
  }

  /// Whether the identifier carried no query text at all.
  pub fn is_empty(&self) -> bool {
    self.raw.is_empty()
  }

  /// The query ready to append to a path: `?<raw>`, or nothing when empty.
  pub fn suffix(&self) -> String {
    if self.raw.is_empty() {
      String::new()
    } else {
      format!("?{}", self.raw)
    }
  }
}
