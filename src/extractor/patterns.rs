// file: src/extractor/patterns.rs
// description: compiled regex patterns for score extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "score" followed, within the same line, by a decimal literal with an
    // optional sign and fractional part. First match wins.
    pub static ref SCORE: Regex = Regex::new(
        r"(?i)score.*?(-?\d+(?:\.\d+)?)"
    ).expect("SCORE regex is valid");
}
