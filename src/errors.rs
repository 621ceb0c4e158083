/*!
 * Error types for the readtime library.
 *
 * Estimation itself never fails: insufficient data is reported as a
 * reading time of zero. Errors only come from loading documents, and
 * from custom analyzers through their own associated error type.
 */

use thiserror::Error;

/// Errors that can occur when loading or converting a document tree
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Error reading the input file
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding or encoding a hast JSON tree
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input file extension is not one we know how to parse
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}
