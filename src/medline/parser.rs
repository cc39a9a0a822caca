// src/medline/parser.rs

// --- Imports ---
use crate::medline::models::ArticleRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
// MEDLINE field tags this tool cares about. Everything after the first '-'
// on a tag line is the field value.
const PMID_TAG: &str = "PMID-";
const TITLE_TAG: &str = "TI  -";
const PUB_TYPE_TAG: &str = "PT  -";
// Continuation lines are indented at least six spaces under their field tag.
const CONTINUATION_INDENT: &str = "      ";

// --- Regex Patterns (Lazy Static) ---
// Records in a MEDLINE export are separated by one or more blank lines
// (blank may include stray whitespace).
static BLOCK_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Failed to compile BLOCK_SPLIT_RE")
});

/// Title accumulation cursor for the per-block line scan.
///
/// `TI  -` starts accumulation; indented lines extend it; any other line
/// (including `PT  -`) flushes it into the record. A fresh `TI  -` restarts
/// accumulation, discarding anything not yet flushed, so the last title in a
/// block wins.
#[derive(Debug, PartialEq, Eq)]
enum TitleCursor {
    Idle,
    Accumulating(String),
}

impl TitleCursor {
    /// Moves any accumulated text into `title` and resets to `Idle`.
    fn flush_into(&mut self, title: &mut String) {
        if let TitleCursor::Accumulating(value) = std::mem::replace(self, TitleCursor::Idle) {
            *title = value;
        }
    }
}

/// Parses raw MEDLINE text into one `ArticleRecord` per non-empty block.
///
/// Best-effort field scraping: unknown tags are ignored, repeated PMID or
/// title fields overwrite earlier values, and a record is produced even when
/// the block has no PMID (the classifier filters those out).
pub fn parse_records(content: &str) -> Vec<ArticleRecord> {
    BLOCK_SPLIT_RE
        .split(content)
        .filter(|block| !block.trim().is_empty())
        .map(extract_record)
        .collect()
}

/// Scans a single record block line by line, tracking the title cursor.
fn extract_record(block: &str) -> ArticleRecord {
    let mut pmid = String::new();
    let mut title = String::new();
    let mut publication_types = Vec::new();
    let mut cursor = TitleCursor::Idle;

    for line in block.trim().lines() {
        if let Some(value) = line.strip_prefix(PMID_TAG) {
            pmid = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(TITLE_TAG) {
            // A new title field restarts accumulation; an unflushed earlier
            // title is discarded rather than merged.
            cursor = TitleCursor::Accumulating(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(PUB_TYPE_TAG) {
            publication_types.push(value.trim().to_string());
            cursor.flush_into(&mut title);
        } else {
            match cursor {
                // Continuation line under an open title field
                TitleCursor::Accumulating(ref mut value)
                    if line.starts_with(CONTINUATION_INDENT) =>
                {
                    value.push(' ');
                    value.push_str(line.trim());
                }
                // Any other line ends the accumulation (no-op when idle)
                _ => cursor.flush_into(&mut title),
            }
        }
    }

    // The block may end mid-title.
    cursor.flush_into(&mut title);

    ArticleRecord {
        pmid,
        title,
        publication_types,
    }
}
