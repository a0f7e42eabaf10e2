//! Textual edits on the root `<svg>` element.
//!
//! These are regex substitutions on the first `>` following `<svg`, not a markup parse.
//! A root opening tag containing a literal `>` inside an attribute value, or a
//! self-closing root (`<svg/>`), is edited at the wrong place. Markup without an `<svg`
//! tag is returned unchanged.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Namespace the simplifier requires on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

fn root_tag_end() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)(<svg[^>]*?)>").expect("invalid root tag regex"))
}

fn namespace_attribute() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)\sxmlns\s*=").expect("invalid xmlns regex"))
}

/// Insert `attribute` right before the root element's closing `>`.
fn append_root_attribute(markup: &str, attribute: &str) -> String {
  root_tag_end()
    .replacen(markup, 1, |caps: &Captures| {
      format!("{} {attribute}>", &caps[1])
    })
    .into_owned()
}

/// Declare the SVG namespace on the root element unless it already does.
pub fn ensure_namespace(markup: &str) -> String {
  let already_declared = root_tag_end()
    .captures(markup)
    .is_some_and(|caps| namespace_attribute().is_match(&caps[1]));
  if already_declared {
    return markup.to_string();
  }

  append_root_attribute(markup, &format!("xmlns=\"{SVG_NAMESPACE}\""))
}

/// Wrap markup into a component module spreading its props onto the root element.
pub fn compile_component(markup: &str) -> String {
  let with_props = append_root_attribute(markup, "{...props}");
  format!("export default (props = {{}}) => {with_props}")
}
