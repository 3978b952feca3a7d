//! Core input types for the metric engine.
//!
//! - [`ResponseText`] - One model response, immutable once loaded
//! - [`KeywordSet`] - Normalized, de-duplicated target keywords

use serde::{Deserialize, Serialize};

/// The raw content of one model's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseText {
    content: String,
    lowered: String,
}

impl ResponseText {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let lowered = content.to_lowercase();
        Self { content, lowered }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Lower-cased copy used for case-insensitive matching.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Empty or whitespace-only. Every metric scores a blank text as 0.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl From<&str> for ResponseText {
    fn from(value: &str) -> Self {
        ResponseText::new(value)
    }
}

impl From<String> for ResponseText {
    fn from(value: String) -> Self {
        ResponseText::new(value)
    }
}

/// A single keyword: the spelling to display and its lower-cased match form.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyword {
    display: String,
    needle: String,
}

/// Target keywords matched case-insensitively against a response.
///
/// Entries are trimmed, empty entries dropped, and case-insensitive
/// duplicates collapsed so a keyword can never be counted twice. Insertion
/// order is kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `"joy metric, flow,actionable suggestions"`.
    pub fn parse_list(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Add a keyword. Returns `false` when it was blank or already present.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return false;
        }
        let needle = trimmed.to_lowercase();
        if self.keywords.iter().any(|k| k.needle == needle) {
            return false;
        }
        self.keywords.push(Keyword {
            display: trimmed.to_string(),
            needle,
        });
        true
    }

    pub fn extend<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.insert(keyword.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Lower-cased forms, in insertion order.
    pub fn needles(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.needle.as_str())
    }

    /// Keywords as given by the caller (first spelling wins).
    pub fn display_names(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.display.clone()).collect()
    }

    /// Keywords found in `text`, each reported once.
    pub fn matched_in(&self, text: &ResponseText) -> Vec<String> {
        let haystack = text.lowered();
        self.keywords
            .iter()
            .filter(|k| haystack.contains(k.needle.as_str()))
            .map(|k| k.display.clone())
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = KeywordSet::new();
        set.extend(iter);
        set
    }
}

/// Which of the two compared responses scored higher on a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    First,
    Second,
    Tie,
}
