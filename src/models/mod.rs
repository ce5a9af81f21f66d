// file: src/models/mod.rs
// description: request and response models module

pub mod check;

pub use check::{CheckRequest, CheckResult};
