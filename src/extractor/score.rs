// file: src/extractor/score.rs
// description: originality score parsing from free-form model replies

use crate::extractor::patterns;

/// Pulls an originality score out of an unstructured model reply.
///
/// The reply is not guaranteed to contain a parseable number: the model is
/// merely asked to mention one. Matching is a case-insensitive search for
/// "score" followed eventually by a decimal literal; the first match wins
/// and the parsed value is clamped into [0, 100]. Returns `None` when no
/// match is found or the matched group does not parse.
pub fn extract_score(reply: &str) -> Option<f64> {
    let captures = patterns::SCORE.captures(reply)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    Some(value.clamp(0.0, 100.0))
}
