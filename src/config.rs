//! Configuration for summary-sync
//!
//! Holds the file names and section markers a run works against. Every
//! value has a default, and an optional `summary-sync.toml` in the project
//! root can override any subset of them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "summary-sync.toml";

/// Default outline file name
pub const DEFAULT_SUMMARY_FILE: &str = "SUMMARY.md";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Outline file, relative to the project root
    pub summary_file: String,

    /// Directory holding research documents (relative to project root)
    pub research_dir: String,

    /// Directory holding output documents (relative to project root)
    pub output_dir: String,

    /// Header line opening the section new entries are added to
    pub section_marker: String,

    /// Header line of the section that follows it
    pub next_marker: String,

    /// Group label for research entries
    pub research_group: String,

    /// Group label for output entries
    pub output_group: String,

    /// Extension appended to the summary file name for the backup copy
    pub backup_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_file: DEFAULT_SUMMARY_FILE.to_string(),
            research_dir: "research".to_string(),
            output_dir: "output".to_string(),
            section_marker: "## M+M".to_string(),
            next_marker: "## Claude code stuff".to_string(),
            research_group: "Research".to_string(),
            output_group: "Output".to_string(),
            backup_extension: "bak".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `summary-sync.toml` from the project root, or fall back to defaults
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            tracing::debug!(path = %config_path.display(), "Loading config");
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Find the project root by searching up from `start_dir`.
    ///
    /// The first directory holding either a config file or a `SUMMARY.md`
    /// wins. When nothing is found, `start_dir` itself is returned so the
    /// missing summary is reported against the directory the user gave.
    /// Relative paths are resolved against the current directory first so
    /// the search can climb above them.
    pub fn find_project_root(start_dir: &Path) -> PathBuf {
        let start_dir =
            std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());
        let mut current = start_dir.clone();

        loop {
            if current.join(CONFIG_FILE_NAME).is_file()
                || current.join(DEFAULT_SUMMARY_FILE).is_file()
            {
                return current;
            }

            if !current.pop() {
                return start_dir;
            }
        }
    }

    /// Absolute path of the outline file
    pub fn summary_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.summary_file)
    }

    /// Sibling backup path, e.g. `SUMMARY.md.bak`
    pub fn backup_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(format!("{}.{}", self.summary_file, self.backup_extension))
    }

    pub fn research_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.research_dir)
    }

    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output_dir)
    }
}
