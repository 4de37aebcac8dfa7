//! SummarySync CLI
//!
//! Command-line interface for keeping SUMMARY.md in sync with project documents.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

use summary_sync::{Config, Insertions, SyncOptions, SyncOutcome, Syncer};

#[derive(Parser)]
#[command(name = "summary-sync")]
#[command(
    author,
    version,
    about = "Add links for new research and output documents to SUMMARY.md"
)]
struct Cli {
    /// Show what would be added without making changes
    #[arg(long)]
    dry_run: bool,

    /// Directory to start the project root search from (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Path to configuration file (default: summary-sync.toml in the project root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show detailed output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let start_dir = match cli.path {
        Some(p) => p,
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    let project_root = Config::find_project_root(&start_dir);

    let config = match cli.config {
        Some(p) => Config::load(&p)?,
        None => Config::load_or_default(&project_root)?,
    };

    let syncer = Syncer::new(config, project_root);
    if cli.verbose {
        println!(
            "Using project root: {}",
            syncer.project_root().display().to_string().dimmed()
        );
    }

    let options = SyncOptions {
        dry_run: cli.dry_run,
    };
    let outcome = syncer.run(&options)?;
    report(&syncer, &outcome, cli.dry_run);

    Ok(())
}

/// Initialize tracing; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        "summary_sync=debug"
    } else {
        "summary_sync=warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report(syncer: &Syncer, outcome: &SyncOutcome, dry_run: bool) {
    let config = syncer.config();
    let summary = &config.summary_file;

    match outcome {
        // A dry run only lists pending additions
        SyncOutcome::NoSourceFiles | SyncOutcome::UpToDate if dry_run => {}
        SyncOutcome::NoSourceFiles => {
            println!(
                "No markdown files found in {}/ or {}/ directories",
                config.research_dir, config.output_dir
            );
        }
        SyncOutcome::UpToDate => {
            println!(
                "All files already present in {} - no changes needed",
                summary
            );
        }
        SyncOutcome::SectionMissing(insertions) => {
            println!(
                "{} Section '{}' not found in {} - {} new file(s) not added",
                "⚠".yellow(),
                config.section_marker,
                summary,
                insertions.total()
            );
        }
        SyncOutcome::DryRun(insertions) => {
            println!("Would add the following files to {}:", summary);
            print_group("Research files:", &insertions.research);
            print_group("Output files:", &insertions.output);
        }
        SyncOutcome::Updated(Insertions { research, output }) => {
            println!("{}", format!("✔ Updated {} successfully:", summary).green());
            if !research.is_empty() {
                println!("  Added {} research file(s)", research.len().to_string().green());
            }
            if !output.is_empty() {
                println!("  Added {} output file(s)", output.len().to_string().green());
            }
        }
    }
}

fn print_group(title: &str, files: &[String]) {
    if files.is_empty() {
        return;
    }
    println!("\n{}", title.bold());
    for file in files {
        println!("  {} {}", "-".cyan(), file);
    }
}
