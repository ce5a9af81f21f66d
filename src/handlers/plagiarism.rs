// file: src/handlers/plagiarism.rs
// description: plagiarism check endpoint: prompt construction, completion call, score parsing

use crate::app::AppState;
use crate::error::{Result, ServiceError};
use crate::extractor::extract_score;
use crate::models::{CheckRequest, CheckResult};
use axum::Json;
use axum::extract::State;
use tracing::{debug, info};

/// Hard cap on the text embedded in the prompt, in Unicode code points.
/// Bounds cost and latency of the upstream call; longer texts are truncated,
/// never rejected.
pub const MAX_PROMPT_CHARS: usize = 4000;

pub const SYSTEM_PROMPT: &str = "You are an AI assistant specialized in analyzing text originality \
and providing concise feedback.";

/// POST /api/ai/plagiarism/ — asks the model for an originality assessment of
/// the submitted text.
///
/// A real plagiarism check would compare against a corpus of existing texts;
/// this endpoint only relays the model's self-reported estimate.
pub async fn check_plagiarism(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResult>> {
    if !state.credential_present {
        return Err(ServiceError::MissingCredential);
    }

    let excerpt = truncate_chars(&request.text, MAX_PROMPT_CHARS);
    let prompt = build_prompt(excerpt);

    debug!(
        "Submitting {} chars for originality assessment",
        excerpt.chars().count()
    );

    let reply = state.completion.complete(SYSTEM_PROMPT, &prompt).await?;

    // Parse miss is not an error: the score degrades to 0.0 and the caller
    // reads the full reply. Feedback is always the raw model output.
    let originality_score = extract_score(&reply).unwrap_or(0.0);

    info!("Originality check complete, score {:.1}", originality_score);

    Ok(Json(CheckResult {
        originality_score,
        feedback: reply,
    }))
}

pub fn build_prompt(text: &str) -> String {
    format!(
        "Analyze the following academic text for its originality and provide a numerical originality \
         score between 0 (fully plagiarized) and 100 (fully original), followed by a brief textual \
         feedback explaining the score. Focus on common patterns of unoriginality. \n\nText: '{}'",
        text
    )
}

/// Returns the prefix of `text` holding at most `max_chars` Unicode code
/// points, without splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_shorter_text_unchanged() {
        assert_eq!(truncate_chars("short", MAX_PROMPT_CHARS), "short");
    }

    #[test]
    fn test_truncate_at_exact_limit() {
        let text = "x".repeat(MAX_PROMPT_CHARS);
        assert_eq!(truncate_chars(&text, MAX_PROMPT_CHARS), text);
    }

    #[test]
    fn test_truncate_long_text_to_limit() {
        let text = "x".repeat(MAX_PROMPT_CHARS + 500);
        let truncated = truncate_chars(&text, MAX_PROMPT_CHARS);
        assert_eq!(truncated.chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn test_truncate_counts_code_points_not_bytes() {
        // 'é' is two bytes in UTF-8; counting bytes would cut in half
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 5);
        assert_eq!(truncated, "ééééé");
    }

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let prompt = build_prompt("the quick brown fox");
        assert!(prompt.contains("Text: 'the quick brown fox'"));
        assert!(prompt.contains("between 0 (fully plagiarized) and 100 (fully original)"));
    }
}
