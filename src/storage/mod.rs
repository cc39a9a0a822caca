// src/storage/mod.rs
use crate::medline::ArticleRecord;
use crate::utils::error::StorageError;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

// Titles in pmid_with_title mode are clipped to keep comment lines readable.
const TITLE_COMMENT_MAX_CHARS: usize = 80;

/// Output layout of the exclusion list. Value names match the original
/// tool's CLI so existing scripts keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One PMID per line
    Pmid,
    /// PMID per line with a truncated title comment
    #[value(name = "pmid_with_title")]
    PmidWithTitle,
    /// One title per line
    Title,
}

/// Writes the exclusion list consumed by the web application.
pub struct ExclusionListWriter {
    output_path: PathBuf,
}

impl ExclusionListWriter {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Writes the header block followed by one line per record in the
    /// selected format. This is the only fallible step of a run that is
    /// allowed to abort it.
    pub fn export(
        &self,
        records: &[ArticleRecord],
        format: ExportFormat,
    ) -> Result<(), StorageError> {
        let mut file = fs::File::create(&self.output_path)?;

        writeln!(file, "# Review articles exclusion list")?;
        writeln!(file, "# Generated automatically from MEDLINE publication types")?;
        writeln!(file, "# Total reviews found: {}", records.len())?;
        writeln!(file, "# Format: PMID per line")?;
        writeln!(file)?;

        for record in records {
            match format {
                ExportFormat::Pmid => writeln!(file, "{}", record.pmid)?,
                ExportFormat::PmidWithTitle => writeln!(
                    file,
                    "PMID-{} # {}",
                    record.pmid,
                    record.truncated_title(TITLE_COMMENT_MAX_CHARS)
                )?,
                ExportFormat::Title => writeln!(file, "{}", record.title)?,
            }
        }

        tracing::info!(
            "Exported {} review articles to {}",
            records.len(),
            self.output_path.display()
        );

        Ok(())
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn record(pmid: &str, title: &str) -> ArticleRecord {
        ArticleRecord {
            pmid: pmid.to_string(),
            title: title.to_string(),
            publication_types: vec!["Review".to_string()],
        }
    }

    fn export_to_string(records: &[ArticleRecord], format: ExportFormat) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclusion.txt");
        ExclusionListWriter::new(&path).export(records, format).unwrap();
        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn pmid_format_writes_header_and_one_pmid_per_line() {
        let records = vec![record("12345", "A Study of Widgets"), record("67890", "Another")];
        let content = export_to_string(&records, ExportFormat::Pmid);

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "# Review articles exclusion list");
        assert_eq!(lines[1], "# Generated automatically from MEDLINE publication types");
        assert_eq!(lines[2], "# Total reviews found: 2");
        assert_eq!(lines[3], "# Format: PMID per line");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "12345");
        assert_eq!(lines[6], "67890");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn pmid_with_title_format_truncates_long_titles() {
        let long_title = "x".repeat(90);
        let content = export_to_string(
            &[record("1", &long_title)],
            ExportFormat::PmidWithTitle,
        );

        let data_line = content.lines().last().unwrap();
        assert_eq!(data_line, format!("PMID-1 # {}...", "x".repeat(80)));
    }

    #[test]
    fn pmid_with_title_format_leaves_short_titles_alone() {
        let content = export_to_string(
            &[record("1", "Short title")],
            ExportFormat::PmidWithTitle,
        );
        assert!(content.ends_with("PMID-1 # Short title\n"));
    }

    #[test]
    fn title_format_writes_titles_only() {
        let content = export_to_string(&[record("1", "Only the title")], ExportFormat::Title);
        let data_line = content.lines().last().unwrap();
        assert_eq!(data_line, "Only the title");
    }

    #[test]
    fn export_is_idempotent() {
        let records = vec![record("12345", "A Study of Widgets")];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclusion.txt");
        let writer = ExclusionListWriter::new(&path);

        writer.export(&records, ExportFormat::Pmid).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        writer.export(&records, ExportFormat::Pmid).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn end_to_end_only_reviews_with_pmid_reach_the_output() {
        use crate::extractors::ReviewExtractor;

        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(
            input,
            "PMID- 12345\nTI  - A Study of\n      Widgets\nPT  - Review\n\n\
             PMID- 67890\nTI  - Not a review\nPT  - Journal Article\n\n\
             TI  - Review lacking a PMID\nPT  - Review\n"
        )
        .unwrap();

        let mut extractor = ReviewExtractor::new();
        extractor.parse_medline_file(input.path()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exclusion.txt");
        ExclusionListWriter::new(&path)
            .export(extractor.records(), ExportFormat::Pmid)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let data_lines: Vec<&str> = content.lines().skip(5).collect();
        assert_eq!(data_lines, vec!["12345"]);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let writer = ExclusionListWriter::new("/nonexistent-dir/exclusion.txt");
        assert!(writer.export(&[record("1", "t")], ExportFormat::Pmid).is_err());
    }
}
