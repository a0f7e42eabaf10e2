use std::path::Path;

use regex::Regex;

use crate::asset_paths::COLLECTION_PLACEHOLDER;
use crate::collaborators::FileGlob;
use crate::error::{Error, Result};
use crate::identifier::ModuleIdentifier;

/// Glob replacement for the placeholder segment.
const MEMBER_GLOB: &str = "*.svg";

/// Build the anchored expression extracting a member name from a globbed path.
///
/// Everything around the first placeholder is matched literally.
pub fn placeholder_regex(path: &str) -> Result<Regex> {
  let (before, after) = path.split_once(COLLECTION_PLACEHOLDER).unwrap_or((path, ""));
  let pattern = format!(
    r"^{}(.*)\.svg{}$",
    regex::escape(before),
    regex::escape(after)
  );
  Ok(Regex::new(&pattern)?)
}

/// Generate a module mapping each member name to a lazy import of that member.
///
/// The collection's query is forwarded to every member import so members resolve in the
/// same mode as the collection. Entries follow the glob's ordering. A globbed file the
/// placeholder expression cannot match aborts the whole module.
pub fn synthesize_collection<G: FileGlob>(
  glob: &G,
  root: &Path,
  id: &ModuleIdentifier,
) -> Result<String> {
  let pattern = id.path.replacen(COLLECTION_PLACEHOLDER, MEMBER_GLOB, 1);
  let matcher = placeholder_regex(&id.path)?;
  let files = glob.glob(root, &pattern)?;
  tracing::debug!(%pattern, members = files.len(), "expanding svg collection");

  let query = id.query.suffix();
  let mut source = String::from("export default {\n");
  for file in files {
    let name = matcher
      .captures(&file)
      .and_then(|caps| caps.get(1))
      .map(|m| m.as_str())
      .ok_or_else(|| Error::PlaceholderMismatch {
        file: file.clone(),
        pattern: matcher.as_str().to_string(),
      })?;

    let key = serde_json::to_string(name).unwrap();
    let specifier = serde_json::to_string(&format!("./{name}.svg{query}")).unwrap();
    source.push_str(&format!("{key}: () => import({specifier}),\n"));
  }
  source.push('}');

  Ok(source)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::collaborators::FsGlob;
  use std::fs;
  use tempfile::tempdir;

  struct FixedGlob(Vec<&'static str>);

  impl FileGlob for FixedGlob {
    fn glob(&self, _root: &Path, _pattern: &str) -> Result<Vec<String>> {
      Ok(self.0.iter().map(|file| file.to_string()).collect())
    }
  }

  #[test]
  fn placeholder_regex_escapes_surrounding_path() {
    let regex = placeholder_regex("src/icons.v2/[name].svg").unwrap();
    assert_eq!(&regex.captures("src/icons.v2/home.svg").unwrap()[1], "home");
    assert!(!regex.is_match("src/iconsXv2/home.svg"));
    assert!(!regex.is_match("prefix/src/icons.v2/home.svg"));
  }

  #[test]
  fn expands_members_found_on_disk() {
    let dir = tempdir().unwrap();
    let icons = dir.path().join("icons");
    fs::create_dir_all(&icons).unwrap();
    fs::write(icons.join("a.svg"), "<svg/>").unwrap();
    fs::write(icons.join("b.svg"), "<svg/>").unwrap();

    let id = ModuleIdentifier::parse("icons/[name].svg?component");
    let source = synthesize_collection(&FsGlob, dir.path(), &id).unwrap();
    assert_eq!(
      source,
      "export default {\n\
\"a\": () => import(\"./a.svg?component\"),\n\
\"b\": () => import(\"./b.svg?component\"),\n\
}"
    );
  }

  #[test]
  fn forwards_query_verbatim_and_omits_empty_query() {
    let glob = FixedGlob(vec!["icons/x.svg"]);
    let with_query = ModuleIdentifier::parse("icons/[name].svg?url&size=2");
    let source = synthesize_collection(&glob, Path::new("."), &with_query).unwrap();
    assert!(source.contains(r#""x": () => import("./x.svg?url&size=2"),"#));

    let bare = ModuleIdentifier::parse("icons/[name].svg");
    let source = synthesize_collection(&glob, Path::new("."), &bare).unwrap();
    assert!(source.contains(r#""x": () => import("./x.svg"),"#));
  }

  #[test]
  fn preserves_glob_ordering() {
    let glob = FixedGlob(vec!["i/zeta.svg", "i/alpha.svg"]);
    let id = ModuleIdentifier::parse("i/[name].svg");
    let source = synthesize_collection(&glob, Path::new("."), &id).unwrap();
    let zeta = source.find("\"zeta\"").unwrap();
    let alpha = source.find("\"alpha\"").unwrap();
    assert!(zeta < alpha);
  }

  #[test]
  fn empty_collection_is_an_empty_mapping() {
    let id = ModuleIdentifier::parse("i/[name].svg");
    let source = synthesize_collection(&FixedGlob(Vec::new()), Path::new("."), &id).unwrap();
    assert_eq!(source, "export default {\n}");
  }

  #[test]
  fn diverging_glob_result_aborts_synthesis() {
    let glob = FixedGlob(vec!["i/a.svg", "elsewhere/b.svg"]);
    let id = ModuleIdentifier::parse("i/[name].svg");
    let err = synthesize_collection(&glob, Path::new("."), &id).unwrap_err();
    match err {
      Error::PlaceholderMismatch { file, .. } => assert_eq!(file, "elsewhere/b.svg"),
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn member_names_are_escaped_as_string_literals() {
    let glob = FixedGlob(vec!["i/say \"hi\".svg"]);
    let id = ModuleIdentifier::parse("i/[name].svg");
    let source = synthesize_collection(&glob, Path::new("."), &id).unwrap();
    assert!(source.contains(r#""say \"hi\"": () => import("./say \"hi\".svg"),"#));
  }
}
