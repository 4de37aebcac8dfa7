//! Outline structure
//!
//! Partitions `SUMMARY.md` into five contiguous regions around two section
//! markers. Concatenating the regions in order gives back the input.

/// Prefix that marks a section header line
pub const HEADER_TOKEN: &str = "##";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Before,
    Section,
    Between,
    Next,
    After,
}

/// The outline file split around the managed section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outline {
    /// Lines before the section marker
    pub before: Vec<String>,
    /// The section marker line and its body
    pub section: Vec<String>,
    /// Lines after the section body, up to the next marker
    pub between: Vec<String>,
    /// The next marker line and its body
    pub next: Vec<String>,
    /// Everything after the next section body
    pub after: Vec<String>,
}

impl Outline {
    /// Parse `content` into regions.
    ///
    /// Lines are split on `\n` only, so carriage returns and a trailing
    /// empty line survive. Regions only ever advance forward: a second
    /// occurrence of either marker is treated as an ordinary header.
    pub fn parse(content: &str, section_marker: &str, next_marker: &str) -> Self {
        let mut outline = Outline::default();
        let mut region = Region::Before;

        for line in content.split('\n') {
            let stripped = line.trim();
            let is_header = stripped.starts_with(HEADER_TOKEN);

            region = match region {
                Region::Before if stripped == section_marker => Region::Section,
                Region::Section | Region::Between if stripped == next_marker => Region::Next,
                Region::Section if is_header => Region::Between,
                Region::Next if is_header => Region::After,
                current => current,
            };

            outline.region_mut(region).push(line.to_string());
        }

        if outline.section.is_empty() {
            tracing::warn!(marker = section_marker, "Section marker not found in outline");
        } else if outline.next.is_empty() {
            tracing::debug!(marker = next_marker, "Next section marker not found in outline");
        }

        outline
    }

    fn region_mut(&mut self, region: Region) -> &mut Vec<String> {
        match region {
            Region::Before => &mut self.before,
            Region::Section => &mut self.section,
            Region::Between => &mut self.between,
            Region::Next => &mut self.next,
            Region::After => &mut self.after,
        }
    }

    /// Whether the section marker was found
    pub fn has_section(&self) -> bool {
        !self.section.is_empty()
    }

    /// Line ending used by the section marker line, `"\r\n"` or `"\n"`
    pub fn line_ending(&self) -> &'static str {
        match self.section.first() {
            Some(marker) if marker.ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }

    /// All lines, in original order
    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.before
            .iter()
            .chain(&self.section)
            .chain(&self.between)
            .chain(&self.next)
            .chain(&self.after)
    }

    /// Reassemble the original text
    #[cfg(test)]
    pub(crate) fn to_content(&self) -> String {
        self.lines().map(String::as_str).collect::<Vec<_>>().join("\n")
    }
}
