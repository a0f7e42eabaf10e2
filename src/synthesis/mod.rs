//! Generators producing the source text of virtual modules.

mod collection;
mod component;
pub mod markup;

pub use collection::{placeholder_regex, synthesize_collection};
pub use component::synthesize_component;
