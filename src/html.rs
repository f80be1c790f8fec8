//! Markup stripping for recipe summaries.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Remove every `<...>` run from `html`, keeping the text between tags.
///
/// Best effort only: a `<` with no closing `>` is left in place and entities
/// such as `&amp;` are not decoded.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}
