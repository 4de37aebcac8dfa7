//! Merge new documents into the outline
//!
//! Computes which discovered documents are not linked yet and splices
//! entries for them into the managed section.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::entry::{create_entry, group_header};
use crate::outline::{HEADER_TOKEN, Outline};

/// Indentation depth of rendered document entries
const ENTRY_INDENT_LEVEL: usize = 2;

/// Documents that still need a link, in discovery order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Insertions {
    pub research: Vec<String>,
    pub output: Vec<String>,
}

impl Insertions {
    pub fn is_empty(&self) -> bool {
        self.research.is_empty() && self.output.is_empty()
    }

    pub fn total(&self) -> usize {
        self.research.len() + self.output.len()
    }
}

/// Drop every discovered path already linked somewhere in the outline.
pub fn plan_insertions(
    research_files: &[String],
    output_files: &[String],
    existing: &BTreeSet<String>,
) -> Insertions {
    let unlinked = |files: &[String]| {
        files
            .iter()
            .filter(|f| {
                let linked = existing.contains(f.as_str());
                if linked {
                    tracing::debug!(file = %f, "Already linked, skipping");
                }
                !linked
            })
            .cloned()
            .collect::<Vec<_>>()
    };

    Insertions {
        research: unlinked(research_files),
        output: unlinked(output_files),
    }
}

/// Build the full replacement line sequence.
///
/// New entries go after the section's leading content, before any later
/// header inside the body. A group header is only emitted when the body
/// does not already carry one. Without a section marker nothing is added.
/// Inserted lines keep the marker line's CRLF ending when it has one.
pub fn splice(outline: &Outline, insertions: &Insertions, config: &Config) -> Vec<String> {
    if !outline.has_section() {
        return outline.lines().cloned().collect();
    }

    let section = &outline.section;
    let carriage_return = if outline.line_ending() == "\r\n" { "\r" } else { "" };
    let insertion_index = section
        .iter()
        .skip(1)
        .position(|line| line.trim().starts_with(HEADER_TOKEN))
        .map_or(section.len(), |i| i + 1);

    let mut result: Vec<String> = outline.before.clone();
    result.extend_from_slice(&section[..insertion_index]);

    for (label, files) in [
        (&config.research_group, &insertions.research),
        (&config.output_group, &insertions.output),
    ] {
        let group = render_group(section, label, files);
        result.extend(group.into_iter().map(|line| line + carriage_return));
    }

    result.extend_from_slice(&section[insertion_index..]);
    result.extend(outline.between.iter().cloned());
    result.extend(outline.next.iter().cloned());
    result.extend(outline.after.iter().cloned());
    result
}

fn render_group(section: &[String], label: &str, files: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    if files.is_empty() {
        return lines;
    }

    let needle = format!("* [{}]", label);
    if !section.iter().any(|line| line.contains(&needle)) {
        lines.push(group_header(label));
    }
    lines.extend(files.iter().map(|f| create_entry(f, ENTRY_INDENT_LEVEL)));
    lines
}
