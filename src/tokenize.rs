use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;

/// Extraction strategy for candidate person/entity names. The scoring
/// algorithm is script-agnostic; only the extractor knows the word-boundary
/// conventions of the target script.
pub trait NameExtractor: Send + Sync {
    fn candidate_names(&self, text: &str) -> Vec<String>;
}

/// Two adjacent Arabic-script words. Matches the naming convention of the
/// domain corpus, where author names are written as first name plus
/// family/tribal name.
pub struct ArabicNameExtractor {
    pair: Regex,
}

impl ArabicNameExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pair: Regex::new(r"[أ-ي]+\s+[أ-ي]+")?,
        })
    }
}

impl NameExtractor for ArabicNameExtractor {
    fn candidate_names(&self, text: &str) -> Vec<String> {
        self.pair
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Lowercased whitespace-delimited word set, used for query/response
/// vocabulary overlap.
pub fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_adjacent_arabic_word_pairs() {
        let extractor = ArabicNameExtractor::new().unwrap();
        let names = extractor.candidate_names("سيف الرحبي شاعر عماني");
        assert!(names.contains(&"سيف الرحبي".to_string()));
        assert!(names.contains(&"شاعر عماني".to_string()));
    }

    #[test]
    fn pairs_are_non_overlapping() {
        let extractor = ArabicNameExtractor::new().unwrap();
        let names = extractor.candidate_names("سيف الرحبي كاتب");
        assert_eq!(names, vec!["سيف الرحبي".to_string()]);
    }

    #[test]
    fn latin_text_yields_no_candidates() {
        let extractor = ArabicNameExtractor::new().unwrap();
        assert!(extractor.candidate_names("John Smith wrote a novel").is_empty());
    }

    #[test]
    fn word_set_lowercases_and_dedupes() {
        let words = word_set("Poetry POETRY شعر");
        assert_eq!(words.len(), 2);
        assert!(words.contains("poetry"));
        assert!(words.contains("شعر"));
    }
}
