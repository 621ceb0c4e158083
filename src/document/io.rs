/*!
 * Loading document trees from files.
 */

use std::fs;
use std::path::Path;

use log::debug;

use super::html::parse_html;
use super::model::Node;
use crate::errors::DocumentError;

/// Load a document tree from a file, choosing the parser by extension.
///
/// - `.html`, `.htm`: parsed as an HTML fragment
/// - `.json`: deserialized as a hast tree
/// - `.txt`, `.md`, `.text`: a root with a single text node
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Node, DocumentError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !matches!(extension.as_str(), "html" | "htm" | "json" | "txt" | "md" | "text") {
        let format = if extension.is_empty() {
            path.display().to_string()
        } else {
            extension
        };
        return Err(DocumentError::UnsupportedFormat(format));
    }

    let content = fs::read_to_string(path)?;
    debug!("Loaded {} bytes from {}", content.len(), path.display());

    match extension.as_str() {
        "html" | "htm" => Ok(parse_html(&content)),
        "json" => Node::from_json(&content),
        _ => Ok(Node::root(vec![Node::text(&content)])),
    }
}
