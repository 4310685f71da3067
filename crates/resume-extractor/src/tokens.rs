//! Tokenization for skill classification

use std::collections::HashSet;

/// Set of distinct lower-cased tokens drawn from a document
///
/// A token is a maximal run of ASCII word characters (letters, digits, `_`).
/// Everything else separates tokens, so `"Python, NumPy!"` and
/// `"python numpy"` produce the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    /// Tokenize `text`
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let tokens = lower
            .split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// Whether `keyword` is one of the tokens
    pub fn contains(&self, keyword: &str) -> bool {
        self.tokens.contains(keyword)
    }

    /// Whether at least one keyword is present
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.contains(keyword))
    }

    /// Whether every keyword is present (vacuously true for no keywords)
    pub fn contains_all(&self, keywords: &[&str]) -> bool {
        keywords.iter().all(|keyword| self.contains(keyword))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the text had no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
