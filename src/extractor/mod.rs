// file: src/extractor/mod.rs
// description: score extraction module exports

pub mod patterns;
pub mod score;

pub use score::extract_score;
