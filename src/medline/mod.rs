// src/medline/mod.rs
pub mod models;
pub mod parser;

// Re-export the types callers actually touch
pub use models::ArticleRecord;
pub use parser::parse_records;
