/*!
 * Tests for the reading time estimator
 */

use std::sync::Arc;
use std::thread;

use readtime::document::{Element, Node};
use readtime::estimation::{BASE_WPM, REASONABLE_WPM_MAX};
use readtime::{
    parse_html, HastTextFlattener, ReadabilityScores, ReadingTimeEstimator, ReadingTimeOptions,
};

use crate::common::{
    infallible, init_test_logging, AnalyzerFailure, FailingAnalyzer, FixedAnalyzer,
    RecordingAnalyzer,
};

/// Scores whose median is 15.555, over 205 words
fn fixed_estimator() -> ReadingTimeEstimator<HastTextFlattener, FixedAnalyzer> {
    ReadingTimeEstimator::with_components(
        HastTextFlattener::new(),
        FixedAnalyzer::new(&[14.0, 15.11, 16.0, 17.2], 205),
    )
}

fn minutes_for(
    estimator: &ReadingTimeEstimator<HastTextFlattener, FixedAnalyzer>,
    options: ReadingTimeOptions,
) -> f64 {
    infallible(estimator.estimate(&parse_html("<p>Any text.</p>"), &options))
}

fn assert_minutes(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} minutes, got {}",
        expected,
        actual
    );
}

#[test]
fn test_estimate_withDefaultAge_shouldMatchKnownValue() {
    init_test_logging();
    let estimator = fixed_estimator();

    assert_minutes(minutes_for(&estimator, ReadingTimeOptions::new()), 1.219403);
}

#[test]
fn test_estimate_withSeveralAges_shouldMatchKnownValues() {
    let estimator = fixed_estimator();

    assert_minutes(minutes_for(&estimator, ReadingTimeOptions::with_age(12.0)), 2.437140);
    assert_minutes(minutes_for(&estimator, ReadingTimeOptions::with_age(21.0)), 0.750600);
}

#[test]
fn test_estimate_withAgeOutOfRange_shouldClamp() {
    let estimator = fixed_estimator();

    let too_young = minutes_for(&estimator, ReadingTimeOptions::with_age(1.0));
    let too_old = minutes_for(&estimator, ReadingTimeOptions::with_age(81.0));

    assert_minutes(too_young, 4.456522);
    assert_minutes(too_old, 0.697006);
    assert_eq!(too_young, minutes_for(&estimator, ReadingTimeOptions::with_age(5.0)));
    assert_eq!(too_old, minutes_for(&estimator, ReadingTimeOptions::with_age(22.0)));
}

#[test]
fn test_estimate_withZeroAge_shouldUseDefault() {
    let estimator = fixed_estimator();

    assert_eq!(
        minutes_for(&estimator, ReadingTimeOptions::with_age(0.0)),
        minutes_for(&estimator, ReadingTimeOptions::with_age(16.0))
    );
    assert_eq!(
        minutes_for(&estimator, ReadingTimeOptions::default()),
        minutes_for(&estimator, ReadingTimeOptions::with_age(16.0))
    );
}

#[test]
fn test_estimateDetailed_shouldReportIntermediateValues() {
    let estimator = fixed_estimator();
    let tree = parse_html("<p>Any text.</p>");

    let report = infallible(estimator.estimate_detailed(&tree, &ReadingTimeOptions::new()));

    assert_eq!(report.target_age, 16.0);
    assert_eq!(report.word_count, 205);
    assert_eq!(report.target_wpm, 200.0);
    assert!((report.score.unwrap() - 15.555).abs() < 1e-9);
    assert!((report.readability_age.unwrap() - 20.555).abs() < 1e-9);
    assert!((report.wpm.unwrap() - 168.115).abs() < 1e-9);
    assert_minutes(report.minutes, 1.219403);
}

#[test]
fn test_estimate_withEmptyRoot_shouldReturnZero() {
    let estimator = ReadingTimeEstimator::new();

    let minutes = infallible(estimator.estimate(&Node::root(vec![]), &ReadingTimeOptions::new()));

    assert_eq!(minutes, 0.0);
}

#[test]
fn test_estimate_withAnalyzerWithoutResult_shouldReturnZero() {
    let estimator =
        ReadingTimeEstimator::with_components(HastTextFlattener::new(), FixedAnalyzer::without_result());

    let report = infallible(
        estimator.estimate_detailed(&parse_html("<p>Text</p>"), &ReadingTimeOptions::new()),
    );

    assert_eq!(report.minutes, 0.0);
    assert_eq!(report.word_count, 0);
    assert_eq!(report.score, None);
    assert_eq!(report.wpm, None);
}

#[test]
fn test_estimate_withNoSubScores_shouldReturnZero() {
    let analyzer = FixedAnalyzer {
        scores: Some(ReadabilityScores::with_word_count(120)),
    };
    let estimator = ReadingTimeEstimator::with_components(HastTextFlattener::new(), analyzer);

    let report = infallible(
        estimator.estimate_detailed(&parse_html("<p>Text</p>"), &ReadingTimeOptions::new()),
    );

    assert_eq!(report.minutes, 0.0);
    assert_eq!(report.word_count, 120);
    assert_eq!(report.score, None);
}

#[test]
fn test_estimate_withZeroScore_shouldNotTreatItAsAbsent() {
    let estimator = ReadingTimeEstimator::with_components(
        HastTextFlattener::new(),
        FixedAnalyzer::new(&[0.0], 100),
    );

    let report = infallible(
        estimator.estimate_detailed(&parse_html("<p>Text</p>"), &ReadingTimeOptions::new()),
    );

    assert_eq!(report.score, Some(0.0));
    assert!(report.minutes > 0.0);
}

#[test]
fn test_estimate_withNonFiniteScores_shouldIgnoreThem() {
    let with_nan = ReadingTimeEstimator::with_components(
        HastTextFlattener::new(),
        FixedAnalyzer::new(&[14.0, f64::NAN, 15.11, 16.0, f64::INFINITY, 17.2], 205),
    );

    assert_eq!(
        minutes_for(&with_nan, ReadingTimeOptions::new()),
        minutes_for(&fixed_estimator(), ReadingTimeOptions::new())
    );
}

#[test]
fn test_estimate_withVeryEasyText_shouldCapSpeed() {
    let estimator = ReadingTimeEstimator::with_components(
        HastTextFlattener::new(),
        FixedAnalyzer::new(&[-20.0], 340),
    );

    let report = infallible(
        estimator.estimate_detailed(&parse_html("<p>Text</p>"), &ReadingTimeOptions::with_age(22.0)),
    );

    assert_eq!(report.wpm, Some(REASONABLE_WPM_MAX));
    assert_minutes(report.minutes, 1.0);
}

#[test]
fn test_estimate_withVeryHardText_shouldFloorSpeed() {
    let estimator = ReadingTimeEstimator::with_components(
        HastTextFlattener::new(),
        FixedAnalyzer::new(&[30.0], 92),
    );

    let report = infallible(
        estimator.estimate_detailed(&parse_html("<p>Text</p>"), &ReadingTimeOptions::with_age(5.0)),
    );

    assert_eq!(report.wpm, Some(BASE_WPM));
    assert_minutes(report.minutes, 2.0);
}

#[test]
fn test_estimate_withMoreWords_shouldNeverDecrease() {
    let mut previous = 0.0;
    for word_count in (0..=1000).step_by(50) {
        let estimator = ReadingTimeEstimator::with_components(
            HastTextFlattener::new(),
            FixedAnalyzer::new(&[9.5, 11.0], word_count),
        );
        let minutes = minutes_for(&estimator, ReadingTimeOptions::new());

        assert!(minutes >= previous, "{} words gave {} < {}", word_count, minutes, previous);
        previous = minutes;
    }
    assert!(previous > 0.0);
}

#[test]
fn test_estimate_withOlderReaders_shouldNeverTakeLonger() {
    let estimator = fixed_estimator();
    let mut previous = f64::INFINITY;

    for age in 5..=22 {
        let minutes = minutes_for(&estimator, ReadingTimeOptions::with_age(f64::from(age)));
        assert!(minutes <= previous, "age {} gave {} > {}", age, minutes, previous);
        previous = minutes;
    }
}

#[test]
fn test_estimate_shouldRoundToSixDecimals() {
    let estimator = ReadingTimeEstimator::with_components(
        HastTextFlattener::new(),
        FixedAnalyzer::new(&[7.3, 8.1, 12.9], 333),
    );

    for age in [5.0, 9.0, 13.0, 16.0, 19.0, 22.0] {
        let scaled = minutes_for(&estimator, ReadingTimeOptions::with_age(age)) * 1_000_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}

#[test]
fn test_estimate_withSameInput_shouldBeDeterministic() {
    let tree = parse_html("<p>The cat sat on the mat. The dog ran in the park.</p>");
    let estimator = ReadingTimeEstimator::new();
    let options = ReadingTimeOptions::with_age(10.0);

    let first = infallible(estimator.estimate(&tree, &options));
    let second = infallible(estimator.estimate(&tree, &options));

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_estimate_withFailingAnalyzer_shouldPropagateError() {
    let estimator = ReadingTimeEstimator::with_components(HastTextFlattener::new(), FailingAnalyzer);

    let result = estimator.estimate(&parse_html("<p>abc</p>"), &ReadingTimeOptions::new());

    assert_eq!(result, Err(AnalyzerFailure("cannot analyze 3 bytes".to_string())));
}

#[test]
fn test_estimate_shouldAnalyzeFlattenedText() {
    let analyzer = RecordingAnalyzer::default();
    let estimator = ReadingTimeEstimator::with_components(HastTextFlattener::new(), &analyzer);
    let tree = Node::root(vec![
        Node::Element(Element::new("p").with_children(vec![Node::text("First paragraph.")])),
        Node::Element(Element::new("script").with_children(vec![Node::text("ignored()")])),
        Node::Element(Element::new("p").with_children(vec![Node::text("Second one.")])),
    ]);

    let minutes = infallible(estimator.estimate(&tree, &ReadingTimeOptions::new()));

    assert_eq!(minutes, 0.0);
    assert_eq!(
        *analyzer.seen.borrow(),
        vec!["First paragraph.\n\nSecond one.".to_string()]
    );
}

#[test]
fn test_estimator_acrossThreads_shouldAgree() {
    let estimator = Arc::new(ReadingTimeEstimator::new());
    let tree = Arc::new(parse_html(
        "<p>Reading is what we do when we understand writing. It is a way of getting information.</p>",
    ));
    let expected = infallible(estimator.estimate(&tree, &ReadingTimeOptions::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let estimator = Arc::clone(&estimator);
            let tree = Arc::clone(&tree);
            thread::spawn(move || infallible(estimator.estimate(&tree, &ReadingTimeOptions::new())))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
