// file: src/models/check.rs
// description: plagiarism check request and response types
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Text submitted for an originality check. No length validation: the
/// handler truncates long texts instead of rejecting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub text: String,
}

/// Result of an originality check. The score is whatever number the model
/// self-reported, clamped into [0, 100]; feedback is the full raw reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub originality_score: f64,
    pub feedback: String,
}
