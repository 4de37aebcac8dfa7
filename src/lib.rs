//! SummarySync - GitBook Table of Contents Synchronization
//!
//! Keeps a GitBook `SUMMARY.md` in step with the markdown documents in a
//! project's research and output directories. New documents get a link in
//! the managed section; documents already linked anywhere are left alone.

pub mod config;
pub mod discovery;
pub mod entry;
pub mod fs;
pub mod links;
pub mod merge;
pub mod outline;
pub mod sync;

pub use config::Config;
pub use merge::Insertions;
pub use sync::{SyncError, SyncOptions, SyncOutcome, Syncer};
