/*!
 * Readability analysis for English text.
 *
 * # Architecture
 *
 * - `scores`: The score record and the `TextAnalyzer` seam
 * - `statistics`: Sentence and word counting
 * - `syllables`: English syllable estimation
 * - `formulas`: The six grade-level formulas
 * - `familiar_words`: Word list used by the Dale–Chall formula
 * - `analyzer`: Default analyzer combining the above
 */

pub mod analyzer;
pub mod familiar_words;
pub mod formulas;
pub mod scores;
pub mod statistics;
pub mod syllables;

// Re-export main types
pub use analyzer::ReadabilityAnalyzer;
pub use scores::{ReadabilityScores, TextAnalyzer};
pub use statistics::TextStatistics;
pub use syllables::count_syllables;
