/*!
 * Common test utilities for the readtime test suite
 */

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use readtime::{ReadabilityScores, TextAnalyzer};

// https://simple.wikipedia.org/wiki/Reading
pub const SOMEWHAT_SIMPLE: &str = r#"<p>Reading is what we do when we understand writing.</p>
<p>More fully, it a cognitive process of understanding information represented by printed or written language. It is a way of getting information and insights about something that is written. Reading involves understanding the symbols in that language. It can only be done if one knows the language. Reading and hearing are the two most common ways to get information. Information gained from reading can include entertainment, especially when reading fiction or humor.</p>
<p>Proofreading is a kind of reading that is done to find mistakes in a piece of writing</p>
<p>Directed Reading-Thinking Activity is a method which aims to develop better reading.</p>
<ol>
<li>Making predictions/hypothesis about the content, idea, and concepts from the title of the reading material.</li>
<li>Sectional reading or processing (chunking) of the material.</li>
<li>Checking the reliability and similarity of the read content with the predictions supported by evidence from the text.</li>
<li>For better comprehension, to know what and why the text says: review vocabulary, understanding of the main idea, syntax of the sentence, details/facts and sequence of the story, and make inferences about the characters&#x2019; attitudes, behaviors or circumstances in the story.</li>
<li>Make plausible predictions about what the next section will be about in the reading material.</li>
</ol>"#;

// https://en.wikipedia.org/wiki/Words_per_minute#Alphanumeric_entry
pub const SOMEWHAT_COMPLEX: &str = r#"<p>Since the length or duration of words is clearly variable, for the purpose of measurement of text entry, the definition of each "word" is often standardized to be five characters or keystrokes long in English, including spaces and punctuation. For example, under such a method applied to plain English text the phrase "I run" counts as one word, but "rhinoceros" and "let's talk" would both count as two.</p>
<p>Karat et al. found that one study of average computer users in 1999, the average rate for transcription was 32.5 words per minute, and 19.0 words per minute for composition. In the same study, when the group was divided into "fast", "moderate", and "slow" groups, the average speeds were 40 wpm, 35 wpm, and 23 wpm, respectively.</p>
<p>With the onset of the era of desktop computers, fast typing skills became much more widespread.</p>
<p>An average professional typist types usually in speeds of 43 to 80 wpm, while some positions can require 80 to 95 (usually the minimum required for dispatch positions and other time-sensitive typing jobs), and some advanced typists work at speeds above 120 wpm. Two-finger typists, sometimes also referred to as "hunt and peck" typists, commonly reach sustained speeds of about 37 wpm for memorized</p>
"#;

/// Analyzer returning the same scores for any text
pub struct FixedAnalyzer {
    pub scores: Option<ReadabilityScores>,
}

impl FixedAnalyzer {
    /// Fills the sub-scores in order, leaving the rest absent
    pub fn new(grade_levels: &[f64], word_count: usize) -> Self {
        let level = |index: usize| grade_levels.get(index).copied();
        Self {
            scores: Some(ReadabilityScores {
                dale_chall: level(0),
                ari: level(1),
                coleman_liau: level(2),
                flesch_kincaid: level(3),
                smog: level(4),
                gunning_fog: level(5),
                word_count,
            }),
        }
    }

    pub fn without_result() -> Self {
        Self { scores: None }
    }
}

impl TextAnalyzer for FixedAnalyzer {
    type Error = Infallible;

    fn analyze(&self, _text: &str) -> Result<Option<ReadabilityScores>, Self::Error> {
        Ok(self.scores.clone())
    }
}

/// Error raised by `FailingAnalyzer`
#[derive(Debug, PartialEq)]
pub struct AnalyzerFailure(pub String);

/// Analyzer that always fails
pub struct FailingAnalyzer;

impl TextAnalyzer for FailingAnalyzer {
    type Error = AnalyzerFailure;

    fn analyze(&self, text: &str) -> Result<Option<ReadabilityScores>, Self::Error> {
        Err(AnalyzerFailure(format!("cannot analyze {} bytes", text.len())))
    }
}

/// Analyzer recording every text it receives
#[derive(Default)]
pub struct RecordingAnalyzer {
    pub seen: RefCell<Vec<String>>,
}

impl TextAnalyzer for RecordingAnalyzer {
    type Error = Infallible;

    fn analyze(&self, text: &str) -> Result<Option<ReadabilityScores>, Self::Error> {
        self.seen.borrow_mut().push(text.to_string());
        Ok(None)
    }
}

/// Unwraps a result that cannot fail
pub fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Routes library logs to the test output
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}
