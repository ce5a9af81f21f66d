// file: src/handlers/mod.rs
// description: HTTP handler module exports

pub mod health;
pub mod plagiarism;
