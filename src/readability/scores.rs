/*!
 * Readability score record and the analyzer seam.
 */

use serde::{Deserialize, Serialize};

/// Grade-level sub-scores for a text, plus its word count.
///
/// A formula that cannot be applied to the text is `None`, which keeps
/// "absent" distinct from a score of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    /// Dale–Chall score (difficult-word based)
    pub dale_chall: Option<f64>,

    /// Automated Readability Index
    pub ari: Option<f64>,

    /// Coleman–Liau index
    pub coleman_liau: Option<f64>,

    /// Flesch–Kincaid grade level
    pub flesch_kincaid: Option<f64>,

    /// SMOG grade
    pub smog: Option<f64>,

    /// Gunning fog index
    pub gunning_fog: Option<f64>,

    /// Total number of words
    pub word_count: usize,
}

impl ReadabilityScores {
    /// Create a record with no sub-scores.
    pub fn with_word_count(word_count: usize) -> Self {
        Self {
            word_count,
            ..Self::default()
        }
    }

    /// Present sub-scores, in the order Dale–Chall, ARI, Coleman–Liau,
    /// Flesch–Kincaid, SMOG, Gunning fog.
    pub fn grade_levels(&self) -> Vec<f64> {
        [
            self.dale_chall,
            self.ari,
            self.coleman_liau,
            self.flesch_kincaid,
            self.smog,
            self.gunning_fog,
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Check whether at least one sub-score is present.
    pub fn has_grade_levels(&self) -> bool {
        !self.grade_levels().is_empty()
    }
}

/// Computes readability scores for a string.
pub trait TextAnalyzer {
    /// Error raised by the analyzer; passed to the caller unchanged.
    type Error;

    /// Analyze `text`.
    ///
    /// `Ok(None)` means no result could be produced at all, which callers
    /// treat as no sub-scores and a word count of zero.
    fn analyze(&self, text: &str) -> Result<Option<ReadabilityScores>, Self::Error>;
}

impl<T: TextAnalyzer + ?Sized> TextAnalyzer for &T {
    type Error = T::Error;

    fn analyze(&self, text: &str) -> Result<Option<ReadabilityScores>, Self::Error> {
        (**self).analyze(text)
    }
}
