// src/medline/models.rs

/// A single bibliographic record scraped from a MEDLINE block.
///
/// One record is produced per block, even when the block carries no PMID;
/// classification downstream drops records without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// PubMed identifier. Required for a record to survive classification.
    pub pmid: String,
    /// Article title, possibly empty. Continuation lines are already joined.
    pub title: String,
    /// Publication type values, in the order they appeared in the block.
    pub publication_types: Vec<String>,
}

impl ArticleRecord {
    /// Returns the title clipped to at most `max` characters, with an `...`
    /// marker appended when clipping occurred. Counts characters rather than
    /// bytes so multibyte titles never split a codepoint.
    pub fn truncated_title(&self, max: usize) -> String {
        let mut chars = self.title.chars();
        let clipped: String = chars.by_ref().take(max).collect();
        if chars.next().is_some() {
            format!("{}...", clipped)
        } else {
            clipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record_with_title(title: &str) -> ArticleRecord {
        ArticleRecord {
            pmid: "12345".to_string(),
            title: title.to_string(),
            publication_types: vec!["Review".to_string()],
        }
    }

    #[rstest]
    #[case("short title", 80, "short title")]
    #[case(&"x".repeat(80), 80, &"x".repeat(80))] // exactly at the limit: no marker
    #[case(&"x".repeat(90), 80, &format!("{}...", "x".repeat(80)))]
    #[case(&"ß".repeat(90), 80, &format!("{}...", "ß".repeat(80)))]
    fn title_truncation(#[case] title: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(record_with_title(title).truncated_title(max), expected);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // 61 two-byte chars: byte-based slicing at 60 would split a codepoint
        let record = record_with_title(&"é".repeat(61));
        let truncated = record.truncated_title(60);
        assert_eq!(truncated.chars().count(), 63); // 60 chars + "..."
        assert!(truncated.ends_with("..."));
    }
}
