//! Tokenization helpers shared by the readability and sentiment metrics.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*").expect("word pattern"));

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern"));

/// Lower-cased word tokens. Apostrophe contractions stay joined ("don't").
/// At least one word token; punctuation-only text has none.
pub fn has_words(text: &str) -> bool {
    WORD_RE.is_match(text)
}

pub fn words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().replace('’', "'").to_lowercase())
        .collect()
}

/// Number of sentences: segments between terminal punctuation that contain
/// at least one word. Text with words but no terminator counts as one.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|segment| WORD_RE.is_match(segment))
        .count()
}

/// Heuristic English syllable count: vowel groups, minus a silent trailing
/// `e`, never less than one.
pub fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();
    if chars.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0usize;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = chars.len();
    if n > 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) && count > 1 {
        // "table", "simple" keep the syllable carried by the final "le"
        if !(chars[n - 2] == 'l' && !is_vowel(chars[n - 3])) {
            count -= 1;
        }
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_lowercases_and_keeps_contractions() {
        assert_eq!(
            words("Don't PANIC, it's fine."),
            vec!["don't", "panic", "it's", "fine"]
        );
    }

    #[test]
    fn has_words_ignores_punctuation() {
        assert!(has_words("ok."));
        assert!(has_words("42"));
        assert!(!has_words("... !? --"));
        assert!(!has_words(""));
    }

    #[test]
    fn words_normalizes_typographic_apostrophe() {
        assert_eq!(words("isn’t"), vec!["isn't"]);
    }

    #[test]
    fn sentence_count_ignores_empty_segments() {
        assert_eq!(sentence_count("Hi. How are you?! Fine..."), 3);
        assert_eq!(sentence_count("no terminator"), 1);
        assert_eq!(sentence_count("..."), 0);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn syllables_follow_vowel_groups() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("readability"), 5);
        assert_eq!(syllables("the"), 1);
        assert_eq!(syllables("rhythm"), 1);
        assert_eq!(syllables("42"), 1);
    }
}
