pub mod error_handling;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod regex;
pub mod self_test;

pub use regex::Regex;

const VERSION: &str = "0.0.1";

pub fn version() -> &'static str {
    VERSION
}

/// Compiles `pattern` and searches `text` with it.
///
/// Never fails: a pattern that does not parse is reported through `tracing`
/// at warn level and counts as no match.
pub fn is_match(pattern: &str, text: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(text),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "failed to parse regex");
            false
        }
    }
}
