//! Link entry rendering
//!
//! Turns a document path into a GitBook bullet line.

use std::path::Path;

/// Spaces per indentation level
const INDENT: &str = "  ";

/// Convert a file path into a human-readable title.
///
/// `research/competitive-landscape.md` becomes `Competitive Landscape`,
/// `mvp_feature_spec.md` becomes `Mvp Feature Spec`.
pub fn filename_to_title(filepath: &str) -> String {
    let stem = Path::new(filepath)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    title_case(&stem.replace(['-', '_'], " "))
}

/// Upper-case the first cased letter of every word and lower-case the rest.
///
/// A word starts after any character that is not itself cased, so digits
/// and punctuation split words as well as spaces do.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && previous_cased {
            result.extend(c.to_lowercase());
        } else if cased {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }

    result
}

/// Render one bullet line: `<indent>* [<title>](<path>)`.
pub fn create_entry(filepath: &str, indent_level: usize) -> String {
    format!(
        "{}* [{}]({})",
        INDENT.repeat(indent_level),
        filename_to_title(filepath),
        filepath
    )
}

/// Render a group header such as `  * [Research]`.
pub fn group_header(label: &str) -> String {
    format!("{}* [{}]", INDENT, label)
}
