//! Keyword parsing and whole-word matching.
//!
//! Keywords come from one comma-separated string. Matching is case-insensitive
//! and bounded by `\b` on both ends, so "java" does not hit "javascript" and
//! "machine learning" only hits the consecutive phrase.

use regex::Regex;

/// Splits a comma-separated keyword string into normalized keywords.
///
/// Each token is trimmed and lowercased; empty tokens are dropped.
/// Duplicates and input order are kept.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .collect()
}

/// Compiled whole-word patterns for one keyword list, reused across every
/// document in a batch.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<(String, Regex)>,
}

impl KeywordMatcher {
    pub fn new(keywords: &[String]) -> Result<Self, regex::Error> {
        let patterns = keywords
            .iter()
            .map(|kw| {
                let pattern = format!(r"\b{}\b", regex::escape(&kw.to_lowercase()));
                Regex::new(&pattern).map(|re| (kw.clone(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn keyword_count(&self) -> usize {
        self.patterns.len()
    }

    /// Returns the keywords found in `text`, in keyword-list order.
    /// A keyword is reported once no matter how often it occurs.
    pub fn match_keywords(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let haystack = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(&haystack))
            .map(|(kw, _)| kw.clone())
            .collect()
    }
}
