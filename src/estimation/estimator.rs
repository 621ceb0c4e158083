/*!
 * Reading time estimator.
 *
 * The estimate starts from the reading speed of the target age, then slows
 * down or speeds up depending on how far the text's grade level is from
 * that age:
 * 1. Clamp the target age to the schooling range
 * 2. Flatten the tree and analyze its text
 * 3. Take the median of the readability sub-scores
 * 4. Adjust the target WPM by half a grade step per year of difference
 * 5. Clamp the WPM and divide the word count by it
 *
 * Grade levels: <https://en.wikipedia.org/wiki/Educational_stage#United_States>.
 * Reading speeds: <https://en.wikipedia.org/wiki/Words_per_minute#Reading_and_comprehension>
 * and <https://en.wikipedia.org/wiki/Reading#Reading_rate>.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::median::median;
use crate::document::{HastTextFlattener, Node, TextFlattener};
use crate::readability::{ReadabilityAnalyzer, TextAnalyzer};

/// Age of a first grader
pub const FIRST_GRADE_AGE: f64 = 5.0;

/// Age at high school graduation
pub const HIGHSCHOOL_GRADUATION_AGE: f64 = 18.0;

/// Age at college graduation, the oldest meaningful target age
pub const GRADUATION_AGE: f64 = 22.0;

/// Adult silent reading speed; other estimates range from 200 to 280
pub const REASONABLE_WPM: f64 = 228.0;

/// Fastest speed an estimate may assume
pub const REASONABLE_WPM_MAX: f64 = 340.0;

/// Speed gained per school grade
pub const ADDED_WPM_PER_GRADE: f64 = 14.0;

/// Reading speed of a first grader (46 WPM)
pub const BASE_WPM: f64 =
    REASONABLE_WPM - (HIGHSCHOOL_GRADUATION_AGE - FIRST_GRADE_AGE) * ADDED_WPM_PER_GRADE;

/// Results are rounded to this many parts of a minute (6 decimals)
pub const ACCURACY: f64 = 1_000_000.0;

/// Target age used when none is given
pub const DEFAULT_AGE: f64 = 16.0;

/// Options for a single estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingTimeOptions {
    /// Age of the target audience, as the age they were still in school.
    ///
    /// Use 18 when all readers finished high school, 21 for college
    /// graduates. `None`, `0` and NaN all mean "use the default of 16".
    #[serde(default)]
    pub age: Option<f64>,
}

impl ReadingTimeOptions {
    /// Options with the default age.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a specific target age.
    pub fn with_age(age: f64) -> Self {
        Self { age: Some(age) }
    }

    /// Target age rounded and clamped to the 5-22 schooling range.
    pub fn target_age(&self) -> f64 {
        let age = match self.age {
            Some(age) if age != 0.0 && !age.is_nan() => age,
            _ => DEFAULT_AGE,
        };
        age.round().clamp(FIRST_GRADE_AGE, GRADUATION_AGE)
    }
}

/// Breakdown of a single estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTimeReport {
    /// Target age after rounding and clamping
    pub target_age: f64,

    /// Words in the document
    pub word_count: usize,

    /// Median of the readability sub-scores, if any could be computed
    pub score: Option<f64>,

    /// Age matching the document's grade level
    pub readability_age: Option<f64>,

    /// Usual reading speed of the target age
    pub target_wpm: f64,

    /// Reading speed used for the estimate, after difficulty adjustment
    pub wpm: Option<f64>,

    /// Estimated reading time in minutes
    pub minutes: f64,
}

/// Usual reading speed for a target age.
pub fn target_wpm(target_age: f64) -> f64 {
    BASE_WPM + (target_age - FIRST_GRADE_AGE) * ADDED_WPM_PER_GRADE
}

/// Reading speed adjusted for the gap between text difficulty and reader age.
///
/// Harder text than the reader's level slows reading down, easier text
/// speeds it up, at half the per-grade rate. The result is not clamped.
pub fn adjusted_wpm(target_age: f64, readability_age: f64) -> f64 {
    target_wpm(target_age) - (readability_age - target_age) * (ADDED_WPM_PER_GRADE / 2.0)
}

fn round_minutes(minutes: f64) -> f64 {
    (minutes * ACCURACY).round() / ACCURACY
}

/// Estimates reading time using a text flattener and a readability analyzer.
///
/// The estimator keeps no state between calls, so one instance can be shared
/// freely across threads when its collaborators allow it.
#[derive(Debug, Clone, Default)]
pub struct ReadingTimeEstimator<F = HastTextFlattener, A = ReadabilityAnalyzer> {
    flattener: F,
    analyzer: A,
}

impl ReadingTimeEstimator {
    /// Estimator using the built-in flattener and analyzer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: TextFlattener, A: TextAnalyzer> ReadingTimeEstimator<F, A> {
    /// Estimator using custom collaborators.
    pub fn with_components(flattener: F, analyzer: A) -> Self {
        Self {
            flattener,
            analyzer,
        }
    }

    /// Estimate the reading time of `tree` in minutes.
    ///
    /// Analyzer errors are returned unchanged.
    pub fn estimate(&self, tree: &Node, options: &ReadingTimeOptions) -> Result<f64, A::Error> {
        Ok(self.estimate_detailed(tree, options)?.minutes)
    }

    /// Estimate the reading time of `tree` and report the intermediate values.
    pub fn estimate_detailed(
        &self,
        tree: &Node,
        options: &ReadingTimeOptions,
    ) -> Result<ReadingTimeReport, A::Error> {
        let target_age = options.target_age();
        let target_wpm = target_wpm(target_age);

        let text = self.flattener.flatten(tree);
        let scores = self.analyzer.analyze(&text)?.unwrap_or_default();

        let grade_levels: Vec<f64> = scores
            .grade_levels()
            .into_iter()
            .filter(|score| {
                let finite = score.is_finite();
                if !finite {
                    warn!("Ignoring non-finite readability score: {}", score);
                }
                finite
            })
            .collect();

        let mut report = ReadingTimeReport {
            target_age,
            word_count: scores.word_count,
            score: None,
            readability_age: None,
            target_wpm,
            wpm: None,
            minutes: 0.0,
        };

        let Some(score) = median(&grade_levels) else {
            debug!(
                "No readability scores for {} words, estimating 0 minutes",
                scores.word_count
            );
            return Ok(report);
        };

        let readability_age = FIRST_GRADE_AGE + score;
        let wpm = adjusted_wpm(target_age, readability_age).clamp(BASE_WPM, REASONABLE_WPM_MAX);
        let minutes = round_minutes(scores.word_count as f64 / wpm);

        debug!(
            "Estimated {} minutes: {} words, score {:.3}, target age {}, {:.1} WPM (target {:.1})",
            minutes, scores.word_count, score, target_age, wpm, target_wpm
        );

        report.score = Some(score);
        report.readability_age = Some(readability_age);
        report.wpm = Some(wpm);
        report.minutes = minutes;
        Ok(report)
    }
}

/// Estimate the reading time of `tree` in minutes.
///
/// Uses the built-in flattener and English readability analyzer. Returns
/// `0` when the document has no text to score.
pub fn reading_time(tree: &Node, options: &ReadingTimeOptions) -> f64 {
    let estimator = ReadingTimeEstimator::new();
    match estimator.estimate(tree, options) {
        Ok(minutes) => minutes,
        Err(never) => match never {},
    }
}
