//! Input tokenization.
//!
//! Splits one raw input line into whitespace-delimited tokens.

/// Tokenizes command input.
pub struct LineTokenizer;

impl LineTokenizer {
    /// Splits `input` on runs of whitespace.
    ///
    /// Leading and trailing whitespace never produce empty tokens.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_string).collect()
    }
}
