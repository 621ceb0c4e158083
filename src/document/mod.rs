/*!
 * Document trees for reading time estimation.
 *
 * This module provides:
 * - A hast-compatible node tree that can be built in code or loaded from JSON
 * - An html5ever-backed HTML parser producing that tree
 * - The text flattener turning a tree into its visible text
 * - File loading by extension
 */

pub mod html;
pub mod io;
pub mod model;
pub mod text;

// Re-export types used by other modules
pub use html::parse_html;
pub use io::load_document;
pub use model::{Comment, Element, Node, Root, Text};
pub use text::{HastTextFlattener, TextFlattener};
