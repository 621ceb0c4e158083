/*!
 * Reading time estimation.
 *
 * - `median`: Median with an explicit "no data" result
 * - `estimator`: The estimator, its calibration constants and options
 */

pub mod estimator;
pub mod median;

// Re-export main types
pub use estimator::{
    reading_time, ReadingTimeEstimator, ReadingTimeOptions, ReadingTimeReport, ACCURACY,
    ADDED_WPM_PER_GRADE, BASE_WPM, DEFAULT_AGE, FIRST_GRADE_AGE, GRADUATION_AGE,
    HIGHSCHOOL_GRADUATION_AGE, REASONABLE_WPM, REASONABLE_WPM_MAX,
};
pub use median::median;
