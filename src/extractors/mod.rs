// src/extractors/mod.rs
pub mod review;

// Re-export the extractor type for convenience
pub use review::ReviewExtractor;
