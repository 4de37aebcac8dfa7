//! Existing link extraction
//!
//! A loose textual match over the whole outline, not a markdown parse:
//! anything shaped like `[label](path.md)` counts as a link.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\((.*?\.md)\)").unwrap());

/// Collect every markdown path already linked anywhere in `content`.
pub fn extract_existing_links(content: &str) -> BTreeSet<String> {
    LINK_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
