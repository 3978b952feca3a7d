//! Lexicon-based sentiment analysis.
//!
//! Polarity is the mean polarity of every opinion word found in the text,
//! subjectivity the mean subjectivity. A negation within a few words before an
//! opinion word multiplies its polarity by -0.5; intensifiers ("very",
//! "extremely") scale polarity and subjectivity. Output ranges are fixed:
//! polarity -1.0..=1.0, subjectivity 0.0..=1.0, and text without opinion words
//! (including blank text) is neutral `(0, 0)`.

mod lexicon;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

use crate::text::words;
use crate::types::{ResponseText, Sentiment};

/// Modifiers stop applying after this many non-opinion words.
const MODIFIER_WINDOW: usize = 3;
const NEGATION_FACTOR: f64 = -0.5;

static SHARED: Lazy<SentimentAnalyzer> = Lazy::new(SentimentAnalyzer::builtin);

/// Polarity and subjectivity of one opinion word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl LexiconEntry {
    fn clamped(self) -> Self {
        Self {
            polarity: self.polarity.clamp(-1.0, 1.0),
            subjectivity: self.subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<String, LexiconEntry>,
    intensifiers: HashMap<&'static str, f64>,
}

impl SentimentAnalyzer {
    /// Process-wide analyzer over the built-in lexicon, built on first use.
    pub fn shared() -> &'static SentimentAnalyzer {
        &SHARED
    }

    pub fn builtin() -> Self {
        let lexicon = lexicon::ENTRIES
            .iter()
            .map(|&(word, polarity, subjectivity)| {
                (
                    word.to_string(),
                    LexiconEntry {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();
        let intensifiers = lexicon::INTENSIFIERS.iter().copied().collect();
        Self {
            lexicon,
            intensifiers,
        }
    }

    /// Built-in lexicon plus caller entries; caller entries win on conflict.
    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a LexiconEntry)>,
    {
        let mut analyzer = Self::builtin();
        for (word, entry) in entries {
            let key = word.trim().to_lowercase();
            if !key.is_empty() {
                analyzer.lexicon.insert(key, entry.clamped());
            }
        }
        analyzer
    }

    #[cfg(test)]
    fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn analyze(&self, text: &ResponseText) -> Sentiment {
        if text.is_blank() {
            return Sentiment::NEUTRAL;
        }

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        let mut negated = false;
        let mut intensity = 1.0;
        let mut since_modifier = 0usize;

        for word in words(text.as_str()) {
            if is_negation(&word) {
                negated = !negated;
                since_modifier = 0;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(word.as_str()) {
                intensity *= factor;
                since_modifier = 0;
                continue;
            }

            match self.lexicon.get(word.as_str()) {
                Some(entry) => {
                    let mut polarity = entry.polarity * intensity;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                    }
                    let subjectivity = (entry.subjectivity * intensity).min(1.0);
                    trace!(word = %word, polarity, subjectivity, "opinion word");

                    polarity_sum += polarity.clamp(-1.0, 1.0);
                    subjectivity_sum += subjectivity;
                    hits += 1;

                    negated = false;
                    intensity = 1.0;
                    since_modifier = 0;
                }
                None => {
                    since_modifier += 1;
                    if since_modifier > MODIFIER_WINDOW {
                        negated = false;
                        intensity = 1.0;
                    }
                }
            }
        }

        if hits == 0 {
            return Sentiment::NEUTRAL;
        }

        let n = hits as f64;
        Sentiment {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_negation(word: &str) -> bool {
    word.ends_with("n't") || lexicon::NEGATIONS.contains(&word)
}

/// Sentiment of `text` using the shared built-in analyzer.
pub fn sentiment(text: &ResponseText) -> Sentiment {
    SentimentAnalyzer::shared().analyze(text)
}
