//! Helpers deciding which identifiers are ours and what their canonical form is.
//!
//! Both plugin entry points run the same gate so that every identifier accepted during
//! resolution is also accepted when its content is loaded.

mod canonical;
mod filters;

pub use canonical::{component_source_path, resolve_canonical_path, to_component_path};
pub use filters::{
  COLLECTION_PLACEHOLDER, COMPONENT_SUFFIX, SVG_SUFFIX, has_collection_placeholder, is_svg_path,
};
