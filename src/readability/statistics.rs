/*!
 * Text statistics feeding the readability formulas.
 *
 * A word is a whitespace-separated token holding at least one letter or
 * digit, so hyphenated compounds and decimals count once. A sentence ends at
 * a run of `.`, `!` or `?` followed by whitespace or the end of the text,
 * unless the period closes a known abbreviation ("et al.", "e.g.").
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::familiar_words::is_familiar;
use super::syllables::count_syllables;

static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\x{2019}\x{201d})\]]*(?:\s+|$)"#)
        .expect("Failed to compile sentence end regex")
});

/// Abbreviations whose period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "al", "cf", "dr", "e.g", "fig", "i.e", "mr", "mrs", "ms", "prof", "vs",
];

/// Counts gathered from one pass over a text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStatistics {
    /// Sentences holding at least one word
    pub sentence_count: usize,
    /// Words
    pub word_count: usize,
    /// Characters inside words, inner punctuation included
    pub character_count: usize,
    /// Letters inside words
    pub letter_count: usize,
    /// Syllables over all words
    pub syllable_count: usize,
    /// Words of three or more syllables
    pub polysyllable_count: usize,
    /// Polysyllables that are not proper nouns or simple inflections
    pub complex_word_count: usize,
    /// Words outside the familiar word list
    pub difficult_word_count: usize,
}

impl TextStatistics {
    /// Gather statistics for `text`.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::default();

        for sentence in split_sentences(text) {
            let mut words = words(sentence).peekable();
            if words.peek().is_none() {
                continue;
            }
            stats.sentence_count += 1;

            for (index, word) in words.enumerate() {
                stats.add_word(word, index == 0);
            }
        }

        trace!("Text statistics: {:?}", stats);
        stats
    }

    fn add_word(&mut self, word: &str, starts_sentence: bool) {
        let syllables = count_syllables(word);

        self.word_count += 1;
        self.character_count += word.chars().count();
        self.letter_count += word.chars().filter(|c| c.is_alphabetic()).count();
        self.syllable_count += syllables;

        if syllables >= 3 {
            self.polysyllable_count += 1;
            if is_complex_word(word, syllables, starts_sentence) {
                self.complex_word_count += 1;
            }
        }

        if !contains_digit(word) && !is_familiar(word) {
            self.difficult_word_count += 1;
        }
    }

    /// Average words per sentence, if there is a sentence.
    pub fn words_per_sentence(&self) -> Option<f64> {
        if self.sentence_count == 0 || self.word_count == 0 {
            return None;
        }
        Some(self.word_count as f64 / self.sentence_count as f64)
    }

    /// Ratio of `count` to the number of words, if there are words.
    pub fn per_word(&self, count: usize) -> Option<f64> {
        if self.word_count == 0 {
            return None;
        }
        Some(count as f64 / self.word_count as f64)
    }
}

/// Split `text` into sentences, keeping abbreviations inside their sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for end in SENTENCE_END_REGEX.find_iter(text) {
        if end.as_str().starts_with('.') && ends_with_abbreviation(&text[start..end.start()]) {
            continue;
        }
        sentences.push(&text[start..end.start()]);
        start = end.end();
    }
    sentences.push(&text[start..]);

    sentences
}

fn ends_with_abbreviation(text: &str) -> bool {
    text.split_whitespace()
        .next_back()
        .map(|word| {
            word.trim_start_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .is_some_and(|word| ABBREVIATIONS.contains(&word.as_str()))
}

/// Words of a sentence, stripped of surrounding punctuation.
fn words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

/// Gunning fog excludes proper nouns and words made long by `-es`, `-ed`, `-ing`.
fn is_complex_word(word: &str, syllables: usize, starts_sentence: bool) -> bool {
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !starts_sentence {
        return false;
    }

    let lower = word.to_lowercase();
    for suffix in ["ing", "es", "ed"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if !stem.is_empty() && count_syllables(stem) < 3 {
                return false;
            }
        }
    }

    syllables >= 3
}

fn contains_digit(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}
