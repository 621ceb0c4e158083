/*!
 * Default readability analyzer.
 */

use std::convert::Infallible;

use log::debug;

use super::formulas;
use super::scores::{ReadabilityScores, TextAnalyzer};
use super::statistics::TextStatistics;

/// Analyzer computing the six English grade-level formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compute scores from already gathered statistics.
    ///
    /// Returns `None` when the statistics hold no words.
    pub fn scores_for(&self, stats: &TextStatistics) -> Option<ReadabilityScores> {
        if stats.word_count == 0 {
            return None;
        }

        Some(ReadabilityScores {
            dale_chall: formulas::dale_chall(stats),
            ari: formulas::automated_readability_index(stats),
            coleman_liau: formulas::coleman_liau(stats),
            flesch_kincaid: formulas::flesch_kincaid(stats),
            smog: formulas::smog(stats),
            gunning_fog: formulas::gunning_fog(stats),
            word_count: stats.word_count,
        })
    }
}

impl TextAnalyzer for ReadabilityAnalyzer {
    type Error = Infallible;

    fn analyze(&self, text: &str) -> Result<Option<ReadabilityScores>, Self::Error> {
        let stats = TextStatistics::from_text(text);
        let scores = self.scores_for(&stats);

        match &scores {
            Some(scores) => debug!(
                "Analyzed {} words in {} sentences: {:?}",
                scores.word_count,
                stats.sentence_count,
                scores.grade_levels()
            ),
            None => debug!("No words to analyze"),
        }

        Ok(scores)
    }
}
