/*!
 * Grade-level readability formulas.
 *
 * Every formula returns `None` when the text has no words or no sentences.
 */

use super::statistics::TextStatistics;

/// Fewest sentences SMOG is defined for
const SMOG_MIN_SENTENCES: usize = 3;

/// Share of difficult words (in percent) above which Dale–Chall is adjusted
const DALE_CHALL_DIFFICULT_THRESHOLD: f64 = 5.0;

/// Highest grade of each Dale–Chall band, for raw scores 4 (and below) to 10 (and above)
const DALE_CHALL_GRADES: [f64; 7] = [4.0, 6.0, 8.0, 10.0, 12.0, 15.0, 16.0];

/// Automated Readability Index.
pub fn automated_readability_index(stats: &TextStatistics) -> Option<f64> {
    let words_per_sentence = stats.words_per_sentence()?;
    let characters_per_word = stats.per_word(stats.character_count)?;
    Some(4.71 * characters_per_word + 0.5 * words_per_sentence - 21.43)
}

/// Coleman–Liau index.
pub fn coleman_liau(stats: &TextStatistics) -> Option<f64> {
    stats.words_per_sentence()?;
    let letters = stats.per_word(stats.letter_count)? * 100.0;
    let sentences = stats.per_word(stats.sentence_count)? * 100.0;
    Some(0.0588 * letters - 0.296 * sentences - 15.8)
}

/// Flesch–Kincaid grade level.
pub fn flesch_kincaid(stats: &TextStatistics) -> Option<f64> {
    let words_per_sentence = stats.words_per_sentence()?;
    let syllables_per_word = stats.per_word(stats.syllable_count)?;
    Some(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// SMOG grade.
pub fn smog(stats: &TextStatistics) -> Option<f64> {
    stats.words_per_sentence()?;
    if stats.sentence_count < SMOG_MIN_SENTENCES {
        return None;
    }
    let scaled = stats.polysyllable_count as f64 * (30.0 / stats.sentence_count as f64);
    Some(1.043 * scaled.sqrt() + 3.1291)
}

/// Gunning fog index.
pub fn gunning_fog(stats: &TextStatistics) -> Option<f64> {
    let words_per_sentence = stats.words_per_sentence()?;
    let complex_percent = stats.per_word(stats.complex_word_count)? * 100.0;
    Some(0.4 * (words_per_sentence + complex_percent))
}

/// Dale–Chall raw score: 0.1579·difficult% + 0.0496·words per sentence,
/// plus 3.6365 when more than 5% of the words are difficult.
pub fn dale_chall_raw(stats: &TextStatistics) -> Option<f64> {
    let words_per_sentence = stats.words_per_sentence()?;
    let difficult_percent = stats.per_word(stats.difficult_word_count)? * 100.0;

    let mut score = 0.1579 * difficult_percent + 0.0496 * words_per_sentence;
    if difficult_percent > DALE_CHALL_DIFFICULT_THRESHOLD {
        score += 3.6365;
    }
    Some(score)
}

/// Dale–Chall grade level.
///
/// The raw score falls into a band of grades (4 and below, 5-6, ..., 16 and
/// above); the upper grade of the band is reported.
pub fn dale_chall(stats: &TextStatistics) -> Option<f64> {
    let band = dale_chall_raw(stats)?.floor().clamp(4.0, 10.0) as usize;
    Some(DALE_CHALL_GRADES[band - 4])
}
