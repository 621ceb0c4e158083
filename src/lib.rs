/*!
 * # readtime - Reading time estimation for structured documents
 *
 * A Rust library estimating how many minutes a document takes to read,
 * taking both the difficulty of the text and the age of the target
 * audience into account.
 *
 * ## Features
 *
 * - hast-compatible document trees, built in code, parsed from HTML or loaded from JSON
 * - innerText-style text flattening
 * - Six English readability formulas (Dale–Chall, ARI, Coleman–Liau,
 *   Flesch–Kincaid, SMOG, Gunning fog)
 * - Age-aware reading speed with difficulty adjustment
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `document`: Document trees, HTML parsing and text flattening
 * - `readability`: Text statistics and readability formulas
 * - `estimation`: The reading time estimator and its median helper
 * - `app_config`: Configuration management
 * - `errors`: Custom error types
 *
 * ## Example
 *
 * ```
 * use readtime::{parse_html, reading_time, ReadingTimeOptions};
 *
 * let tree = parse_html("<p>Reading is what we do when we understand writing.</p>");
 * let minutes = reading_time(&tree, &ReadingTimeOptions::with_age(12.0));
 * assert!(minutes > 0.0);
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod document;
pub mod errors;
pub mod estimation;
pub mod readability;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{load_document, parse_html, HastTextFlattener, Node, TextFlattener};
pub use errors::DocumentError;
pub use estimation::{reading_time, ReadingTimeEstimator, ReadingTimeOptions, ReadingTimeReport};
pub use readability::{ReadabilityAnalyzer, ReadabilityScores, TextAnalyzer};
