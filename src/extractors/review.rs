// src/extractors/review.rs

// --- Imports ---
use crate::medline::{parse_records, ArticleRecord};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// --- Constants ---
// Publication-type values that mark a record as a review. Matching is exact
// string membership, NOT substring or case-insensitive: "review article"
// (lowercase, different exact string) does not qualify. The lowercase
// "review" entry covers exports that emit the tag uncased.
const REVIEW_KEYWORDS: [&str; 4] = ["Review", "Systematic Review", "Meta-Analysis", "review"];

// How many example records the statistics block prints.
const STATS_EXAMPLE_COUNT: usize = 5;

/// Accumulates review articles across all input files of a run.
///
/// Constructed once, fed one file at a time, then read out for statistics
/// and export. Never deduplicates: a PMID appearing in two input files is
/// retained twice, which the downstream consumer tolerates.
pub struct ReviewExtractor {
    review_articles: Vec<ArticleRecord>,
}

impl ReviewExtractor {
    pub fn new() -> Self {
        Self {
            review_articles: Vec::new(),
        }
    }

    /// Parses one MEDLINE file and retains its qualifying records.
    ///
    /// The file is read as raw bytes and decoded lossily, so invalid UTF-8
    /// sequences are replaced rather than failing the parse. Returns the
    /// number of review articles found in this file.
    pub fn parse_medline_file(&mut self, filepath: &Path) -> Result<usize, std::io::Error> {
        tracing::info!("Parsing file: {}", filepath.display());

        let bytes = fs::read(filepath)?;
        let content = String::from_utf8_lossy(&bytes);

        let mut found = 0;
        for record in parse_records(&content) {
            if Self::is_review(&record) && !record.pmid.is_empty() {
                self.review_articles.push(record);
                found += 1;
            }
        }

        tracing::info!("Found {} review articles in {}", found, filepath.display());
        Ok(found)
    }

    /// A record qualifies when any of its publication types is an exact
    /// match for one of the review keywords.
    fn is_review(record: &ArticleRecord) -> bool {
        record
            .publication_types
            .iter()
            .any(|pub_type| REVIEW_KEYWORDS.contains(&pub_type.as_str()))
    }

    /// All records retained so far, in input order.
    pub fn records(&self) -> &[ArticleRecord] {
        &self.review_articles
    }

    pub fn is_empty(&self) -> bool {
        self.review_articles.is_empty()
    }

    /// Prints the statistics report to stdout: total count, frequency of
    /// review/meta publication types (descending), and the first few
    /// retained records as examples.
    pub fn show_statistics(&self) {
        if self.review_articles.is_empty() {
            println!("No review articles found.");
            return;
        }

        println!("\nReview Articles Statistics:");
        println!("Total review articles: {}", self.review_articles.len());

        let mut type_counts: HashMap<&str, usize> = HashMap::new();
        for article in &self.review_articles {
            for pub_type in &article.publication_types {
                *type_counts.entry(pub_type.as_str()).or_insert(0) += 1;
            }
        }
        // Descending by count; ties broken by label so the report is stable
        let mut counts: Vec<(&str, usize)> = type_counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        println!("\nPublication types found:");
        for (pub_type, count) in counts {
            let label = pub_type.to_lowercase();
            if label.contains("review") || label.contains("meta") {
                println!("  {}: {}", pub_type, count);
            }
        }

        println!("\nFirst {} review articles:", STATS_EXAMPLE_COUNT);
        for (i, article) in self
            .review_articles
            .iter()
            .take(STATS_EXAMPLE_COUNT)
            .enumerate()
        {
            println!(
                "  {}. PMID {}: {}",
                i + 1,
                article.pmid,
                article.truncated_title(60)
            );
            println!("     Types: {}", article.publication_types.join(", "));
        }
    }
}

impl Default for ReviewExtractor {
    fn default() -> Self {
        Self::new()
    }
}
