use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Case-insensitive whole-word matcher for the target term.
///
/// Metacharacters in the word are escaped so the term always matches
/// literally; `\b` on both sides rejects partial-word hits ("cat" never
/// matches inside "category").
#[derive(Debug, Clone)]
pub struct WordMatcher {
    pattern: Regex,
}

impl WordMatcher {
    pub fn new(word: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_whole_word_case_insensitive() {
        let matcher = WordMatcher::new("category").unwrap();
        assert!(matcher.is_match("The Category is large"));
        assert!(matcher.is_match("CATEGORY at the start"));
    }

    #[test]
    fn test_rejects_partial_word() {
        let matcher = WordMatcher::new("cat").unwrap();
        assert!(!matcher.is_match("category theory"));
        assert!(!matcher.is_match("concatenation"));
    }

    #[test]
    fn test_matches_at_punctuation_and_edges() {
        let matcher = WordMatcher::new("cat").unwrap();
        assert!(matcher.is_match("cat"));
        assert!(matcher.is_match("A cat, apparently."));
        assert!(matcher.is_match("(cat)"));
    }

    #[test]
    fn test_escapes_regex_metacharacters() {
        let matcher = WordMatcher::new("3.5").unwrap();
        assert!(matcher.is_match("version 3.5 shipped"));
        assert!(!matcher.is_match("a 345 b"));
    }

    #[test]
    fn test_matches_unicode_words() {
        let matcher = WordMatcher::new("żółć").unwrap();
        assert!(matcher.is_match("Kolor żółć występuje w naturze"));
        assert!(matcher.is_match("Żółć to barwa"));
        assert!(!matcher.is_match("żółćią"));
    }

    #[test]
    fn test_oversized_word_fails_compilation() {
        // Escaping rules out syntax errors; the compiled-size limit is
        // the one failure left
        let word = "x".repeat(20_000_000);
        assert!(WordMatcher::new(&word).is_err());
    }
}
