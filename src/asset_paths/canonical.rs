use std::path::{Component, Path, PathBuf};

use super::filters::{COMPONENT_SUFFIX, SVG_SUFFIX};

/// Resolve `path` against the importer's directory and express it relative to `root`.
///
/// The result is lexically normalised and always uses forward slashes, so it can be
/// used as a stable module identifier on every platform. Without an importer the path
/// is resolved against `root` itself.
pub fn resolve_canonical_path(root: &Path, importer: Option<&Path>, path: &str) -> String {
  let base = match importer.and_then(Path::parent) {
    Some(dir) => root.join(dir),
    None => root.to_path_buf(),
  };
  let resolved = normalize(&base.join(path));
  let root = normalize(root);

  let relative = pathdiff::diff_paths(&resolved, &root).unwrap_or(resolved);
  to_forward_slashes(&relative)
}

/// Give a resolved markup path the synthetic component suffix.
pub fn to_component_path(path: &str) -> String {
  if path.ends_with(COMPONENT_SUFFIX) {
    path.to_string()
  } else if let Some(stem) = path.strip_suffix(SVG_SUFFIX) {
    format!("{stem}{COMPONENT_SUFFIX}")
  } else {
    path.to_string()
  }
}

/// The markup file a component identifier was derived from.
pub fn component_source_path(path: &str) -> &str {
  match path.strip_suffix(COMPONENT_SUFFIX) {
    Some(stem) => &path[..stem.len() + SVG_SUFFIX.len()],
    None => path,
  }
}

fn normalize(path: &Path) -> PathBuf {
  let mut result = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        // `..` only cancels a named segment; leading `..` steps of a relative path stay.
        let last = result.components().next_back();
        if matches!(last, Some(Component::Normal(_))) {
          result.pop();
        } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
          result.push(component);
        }
      }
      other => result.push(other),
    }
  }
  result
}

fn to_forward_slashes(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/")
}
