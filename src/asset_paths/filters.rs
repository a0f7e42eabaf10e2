/// Extension of plain markup files.
pub const SVG_SUFFIX: &str = ".svg";
/// Synthetic extension given to component identifiers so the host treats them as TSX.
pub const COMPONENT_SUFFIX: &str = ".svg.tsx";
/// Path segment marking an identifier as a family of sibling files.
pub const COLLECTION_PLACEHOLDER: &str = "[name].svg";

/// Whether a path is eligible for handling at all.
///
/// Anything else is left to the host's default resolution.
pub fn is_svg_path(path: &str) -> bool {
  path.ends_with(SVG_SUFFIX) || path.ends_with(COMPONENT_SUFFIX)
}

/// Whether a raw identifier names a collection rather than a single file.
pub fn has_collection_placeholder(raw: &str) -> bool {
  raw.contains(COLLECTION_PLACEHOLDER)
}
