// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod app;
pub mod completion;
pub mod config;
pub mod error;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod utils;

pub use app::{AppState, build_router};
pub use completion::{CompletionClient, OpenAiClient};
pub use config::{Config, OpenAiConfig, ServerConfig};
pub use error::{Result, ServiceError};
pub use extractor::extract_score;
pub use models::{CheckRequest, CheckResult};
