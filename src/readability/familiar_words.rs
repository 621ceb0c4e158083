/*!
 * Familiar word list used by the Dale–Chall formula.
 *
 * The list holds common English words a fourth-grade reader knows. Regular
 * inflections of a listed word (plurals, past tense, `-ing`, `-ly`,
 * comparatives, possessives) count as familiar too.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

static FAMILIAR_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    include_str!("../../data/familiar_words.txt")
        .split_whitespace()
        .collect()
});

/// Check whether a word is familiar, ignoring case and regular inflections.
pub fn is_familiar(word: &str) -> bool {
    let lower = word.to_lowercase();
    let lower = lower
        .strip_suffix("'s")
        .or_else(|| lower.strip_suffix("\u{2019}s"))
        .unwrap_or(lower.as_str());

    if FAMILIAR_WORDS.contains(lower) {
        return true;
    }

    base_forms(lower)
        .iter()
        .any(|base| FAMILIAR_WORDS.contains(base.as_str()))
}

/// Number of words in the list.
pub fn familiar_word_count() -> usize {
    FAMILIAR_WORDS.len()
}

/// Candidate base forms for an inflected word.
fn base_forms(word: &str) -> Vec<String> {
    let mut forms = Vec::new();

    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        forms.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("ier").or_else(|| word.strip_suffix("iest")) {
        forms.push(format!("{}y", stem));
    }
    for suffix in ["s", "es", "ed", "d", "ing", "ly", "er", "est", "r", "st"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 2 {
                forms.push(stem.to_string());
            }
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        forms.push(format!("{}e", stem));
        if let Some(undoubled) = undouble(stem) {
            forms.push(undoubled);
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if let Some(undoubled) = undouble(stem) {
            forms.push(undoubled);
        }
    }

    forms
}

/// `stopp` -> `stop`
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}
