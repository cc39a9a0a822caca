// src/main.rs
mod extractors;
mod medline;
mod storage;
mod utils;

use clap::Parser;
use extractors::ReviewExtractor;
use std::path::PathBuf;
use storage::{ExclusionListWriter, ExportFormat};
use utils::AppError;

/// Extract review articles from MEDLINE files for a web app exclusion list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// MEDLINE files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output file for exclusion list
    #[arg(short, long, default_value = "review_articles_exclusion.txt")]
    output: PathBuf,

    /// Output format: pmid (just PMIDs), pmid_with_title (PMIDs with comments), title (titles)
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Pmid)]
    format: ExportFormat,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting processing for args: {:?}", args);

    // 3. Parse all input files, strictly in the order given. Per-file
    //    problems are warnings; the remaining files are still processed.
    let mut extractor = ReviewExtractor::new();
    for filepath in &args.files {
        if !filepath.exists() {
            tracing::warn!("File {} not found", filepath.display());
            continue;
        }
        if let Err(e) = extractor.parse_medline_file(filepath) {
            tracing::warn!("Skipping unreadable file {}: {}", filepath.display(), e);
        }
    }

    // 4. Show statistics
    extractor.show_statistics();

    // 5. Export for the web app. An empty result set skips the write; a
    //    failed write is the one fatal error of the run.
    if extractor.is_empty() {
        tracing::info!("No review articles found to export.");
        return Ok(());
    }

    let writer = ExclusionListWriter::new(&args.output);
    writer.export(extractor.records(), args.format)?;

    tracing::info!(
        "Use {} in the web app as the 'Review Articles' exclusion list.",
        args.output.display()
    );

    Ok(())
}
