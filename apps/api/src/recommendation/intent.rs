//! Intent interpreter: expands free-text career interest into a matchable keyword set.

use std::collections::BTreeSet;

use anyhow::Context;
use regex::Regex;
use serde::Serialize;

use crate::errors::AppError;
use crate::recommendation::domain_table::related_concepts;

/// Tokens of this length or shorter are dropped. Short fragments match unrelated words.
const MIN_TOKEN_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "about", "also", "become", "being", "career", "field", "from", "future", "have", "interest",
    "interested", "into", "just", "like", "maybe", "really", "some", "that", "their", "them",
    "then", "there", "they", "this", "want", "what", "when", "where", "which", "will", "with",
    "work", "working", "would",
];

/// A keyword and its whole-word pattern, compiled once per request.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    pub keyword: String,
    regex: Regex,
}

impl KeywordPattern {
    pub fn new(keyword: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))?;
        Ok(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Expanded career interest for one request.
#[derive(Debug, Clone, Serialize)]
pub struct CareerIntent {
    pub raw_text: String,
    /// Whole input phrase after normalization. Always present in `keywords`.
    pub normalized: String,
    pub keywords: BTreeSet<String>,
    #[serde(skip)]
    patterns: Vec<KeywordPattern>,
    #[serde(skip)]
    phrase: KeywordPattern,
}

impl CareerIntent {
    /// Precompiled patterns, one per keyword, in keyword order.
    pub fn patterns(&self) -> &[KeywordPattern] {
        &self.patterns
    }

    /// Whether the whole normalized phrase occurs, on word boundaries, in `text`.
    pub fn phrase_matches(&self, text: &str) -> bool {
        self.phrase.is_match(text)
    }

    /// Keywords (in sorted order) that occur as whole words in `text`.
    pub fn matched_keywords<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.patterns
            .iter()
            .filter(|p| p.is_match(text))
            .map(|p| p.keyword.as_str())
            .collect()
    }
}

/// Lowercases, turns every non-alphanumeric char into a space and collapses whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the keyword set for a career description.
///
/// Keywords = surviving tokens ∪ domain-table concepts of those tokens ∪ the whole phrase.
pub fn interpret(career_text: &str) -> Result<CareerIntent, AppError> {
    if career_text.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "career_text cannot be empty".to_string(),
        ));
    }

    let normalized = normalize(career_text);
    if normalized.is_empty() {
        return Err(AppError::InvalidArgument(
            "career_text must contain letters or digits".to_string(),
        ));
    }

    let mut keywords = BTreeSet::new();
    for token in normalized
        .split(' ')
        .filter(|t| t.chars().count() > MIN_TOKEN_LEN && !STOP_WORDS.contains(t))
    {
        if let Some(concepts) = related_concepts(token) {
            keywords.extend(concepts.iter().map(|c| c.to_string()));
        }
        keywords.insert(token.to_string());
    }
    keywords.insert(normalized.clone());

    let patterns = keywords
        .iter()
        .map(|k| KeywordPattern::new(k))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to compile keyword pattern")?;
    let phrase = KeywordPattern::new(&normalized).context("failed to compile phrase pattern")?;

    Ok(CareerIntent {
        raw_text: career_text.to_string(),
        normalized,
        keywords,
        patterns,
        phrase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_invalid() {
        assert!(matches!(interpret("   "), Err(AppError::InvalidArgument(_))));
        assert!(matches!(interpret(""), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_punctuation_only_is_invalid() {
        assert!(matches!(interpret("?!..."), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_normalize_strips_punctuation_and_collapses_space() {
        assert_eq!(normalize("  Software-Engineer,  AI!! "), "software engineer ai");
    }

    #[test]
    fn test_doctor_expands_via_domain_table() {
        let intent = interpret("Doctor").unwrap();
        assert_eq!(intent.normalized, "doctor");
        assert!(intent.keywords.contains("doctor"));
        assert!(intent.keywords.contains("medical"));
        assert!(intent.keywords.contains("clinical"));
        assert!(intent.keywords.contains("patient"));
    }

    #[test]
    fn test_short_tokens_and_stop_words_dropped_but_phrase_kept() {
        let intent = interpret("I want to be an AI lawyer").unwrap();
        assert!(!intent.keywords.contains("want"));
        assert!(!intent.keywords.contains("ai"));
        assert!(!intent.keywords.contains("be"));
        assert!(intent.keywords.contains("lawyer"));
        assert!(intent.keywords.contains("law"));
        assert!(intent.keywords.contains("i want to be an ai lawyer"));
    }

    #[test]
    fn test_unknown_terms_still_yield_non_empty_set() {
        let intent = interpret("xyz").unwrap();
        assert_eq!(intent.keywords.len(), 1);
        assert!(intent.keywords.contains("xyz"));
    }

    #[test]
    fn test_patterns_match_keywords_one_to_one() {
        let intent = interpret("marine biology").unwrap();
        assert_eq!(intent.patterns().len(), intent.keywords.len());
        let pattern_keywords: Vec<&str> =
            intent.patterns().iter().map(|p| p.keyword.as_str()).collect();
        let keywords: Vec<&str> = intent.keywords.iter().map(String::as_str).collect();
        assert_eq!(pattern_keywords, keywords);
    }

    #[test]
    fn test_phrase_match_respects_word_boundaries() {
        let intent = interpret("data").unwrap();
        assert!(!intent.phrase_matches("database club"));
        assert!(intent.phrase_matches("open data hackathon"));

        let intent = interpret("Software Engineer").unwrap();
        assert!(intent.phrase_matches("software engineer shadowing day"));
        assert!(!intent.phrase_matches("software engineering club"));
    }

    #[test]
    fn test_keyword_pattern_is_whole_word() {
        let art = KeywordPattern::new("art").unwrap();
        assert!(art.is_match("community art show"));
        assert!(!art.is_match("start a club"));
        assert!(!art.is_match("smart city"));
    }

    #[test]
    fn test_keyword_pattern_escapes_metacharacters() {
        let node = KeywordPattern::new("node.js").unwrap();
        assert!(node.is_match("built a node.js api"));
        assert!(!node.is_match("built a nodexjs api"));
    }
}
