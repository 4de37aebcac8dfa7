//! Summary synchronization
//!
//! Runs one pass of discovery, link extraction, outline parsing and merge,
//! then writes the result back to `SUMMARY.md`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;
use crate::discovery::find_markdown_files;
use crate::fs::{atomic_write, ensure_trailing_newline, write_backup};
use crate::links::extract_existing_links;
use crate::merge::{Insertions, plan_insertions, splice};
use crate::outline::Outline;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{} not found", .0.display())]
    MissingSummary(PathBuf),
    #[error("Failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to list {}", .dir.display())]
    Discovery { dir: PathBuf, source: io::Error },
    #[error("Failed to write backup {}", .path.display())]
    Backup { path: PathBuf, source: io::Error },
    #[error("Error writing {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Options for the sync operation
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncOptions {
    /// Show what would be added without making changes
    pub dry_run: bool,
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Neither watched directory holds any markdown
    NoSourceFiles,
    /// Every discovered document is already linked
    UpToDate,
    /// New documents exist but the section marker is missing
    SectionMissing(Insertions),
    /// Dry run: these would be added
    DryRun(Insertions),
    /// These were added
    Updated(Insertions),
}

/// Keeps one project's `SUMMARY.md` in sync with its documents
pub struct Syncer {
    config: Config,
    project_root: PathBuf,
}

impl Syncer {
    pub fn new(config: Config, project_root: PathBuf) -> Self {
        Self {
            config,
            project_root,
        }
    }

    /// Get the project root path
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute path of the outline file
    pub fn summary_path(&self) -> PathBuf {
        self.config.summary_path(&self.project_root)
    }

    /// Perform the sync operation
    pub fn run(&self, options: &SyncOptions) -> Result<SyncOutcome, SyncError> {
        let summary_path = self.summary_path();
        if !summary_path.is_file() {
            return Err(SyncError::MissingSummary(summary_path));
        }

        let research_files = self.discover(&self.config.research_path(&self.project_root))?;
        let output_files = self.discover(&self.config.output_path(&self.project_root))?;

        if research_files.is_empty() && output_files.is_empty() {
            return Ok(SyncOutcome::NoSourceFiles);
        }

        let content = fs::read_to_string(&summary_path).map_err(|source| SyncError::Read {
            path: summary_path.clone(),
            source,
        })?;

        let existing = extract_existing_links(&content);
        tracing::debug!(count = existing.len(), "Existing links");

        let insertions = plan_insertions(&research_files, &output_files, &existing);
        if insertions.is_empty() {
            return Ok(SyncOutcome::UpToDate);
        }

        let outline = Outline::parse(
            &content,
            &self.config.section_marker,
            &self.config.next_marker,
        );
        if !outline.has_section() {
            return Ok(SyncOutcome::SectionMissing(insertions));
        }

        if options.dry_run {
            return Ok(SyncOutcome::DryRun(insertions));
        }

        let backup_path = self.config.backup_path(&self.project_root);
        write_backup(&backup_path, &content).map_err(|source| SyncError::Backup {
            path: backup_path,
            source,
        })?;

        let lines = splice(&outline, &insertions, &self.config);
        let updated = ensure_trailing_newline(&lines.join("\n"), outline.line_ending());

        atomic_write(&summary_path, &updated).map_err(|source| SyncError::Write {
            path: summary_path.clone(),
            source,
        })?;

        tracing::info!(
            research = insertions.research.len(),
            output = insertions.output.len(),
            "Updated summary"
        );
        Ok(SyncOutcome::Updated(insertions))
    }

    fn discover(&self, dir: &Path) -> Result<Vec<String>, SyncError> {
        find_markdown_files(&self.project_root, dir).map_err(|source| SyncError::Discovery {
            dir: dir.to_path_buf(),
            source,
        })
    }
}
