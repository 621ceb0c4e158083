/*!
 * Flattening document trees into their visible text.
 *
 * The default flattener follows the `innerText` model: hidden content is
 * skipped, whitespace collapses, and block-level elements are separated by
 * line breaks (two around paragraphs).
 */

use super::model::{Element, Node};

/// Turns a document tree into a single string of text.
///
/// Implementations must be deterministic and emit text in document order.
pub trait TextFlattener {
    fn flatten(&self, tree: &Node) -> String;
}

/// Elements that are never rendered
const HIDDEN_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "datalist", "head", "link", "meta", "noembed", "noframes",
    "noscript", "param", "rp", "script", "style", "template", "title",
];

/// Elements that keep their whitespace as-is
const PREFORMATTED_ELEMENTS: &[&str] = &["listing", "plaintext", "pre", "textarea", "xmp"];

/// Elements separated from their surroundings by a single line break
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
    "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "li", "listing",
    "main", "menu", "nav", "ol", "plaintext", "pre", "search", "section", "summary", "table",
    "tbody", "tfoot", "thead", "tr", "ul", "xmp",
];

/// Default flattener for hast-style trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct HastTextFlattener;

impl HastTextFlattener {
    pub fn new() -> Self {
        Self
    }
}

impl TextFlattener for HastTextFlattener {
    fn flatten(&self, tree: &Node) -> String {
        let mut pieces = Vec::new();
        collect(tree, false, &mut pieces);

        let mut writer = TextWriter::default();
        for piece in pieces {
            writer.write(piece);
        }
        writer.finish()
    }
}

#[derive(Debug, PartialEq)]
enum Piece<'a> {
    /// Text subject to whitespace collapsing
    Text(&'a str),
    /// Text copied verbatim
    Preformatted(&'a str),
    /// Literal separator (`<br>` newline, cell tab)
    Literal(char),
    /// Request for at least this many line breaks
    Break(usize),
}

fn collect<'a>(node: &'a Node, preformatted: bool, out: &mut Vec<Piece<'a>>) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                collect(child, preformatted, out);
            }
        }
        Node::Text(text) if preformatted => out.push(Piece::Preformatted(&text.value)),
        Node::Text(text) => out.push(Piece::Text(&text.value)),
        Node::Element(element) => collect_element(element, preformatted, out),
        Node::Comment(_) | Node::Doctype => {}
    }
}

fn collect_element<'a>(element: &'a Element, preformatted: bool, out: &mut Vec<Piece<'a>>) {
    let tag = element.tag_name.as_str();
    if HIDDEN_ELEMENTS.contains(&tag) || element.is_hidden() {
        return;
    }

    match tag {
        "br" => {
            out.push(Piece::Literal('\n'));
            return;
        }
        "tr" => {
            out.push(Piece::Break(1));
            let mut first_cell = true;
            for child in &element.children {
                let is_cell = matches!(
                    child,
                    Node::Element(cell) if matches!(cell.tag_name.as_str(), "td" | "th") && !cell.is_hidden()
                );
                if is_cell {
                    if !first_cell {
                        out.push(Piece::Literal('\t'));
                    }
                    first_cell = false;
                }
                collect(child, preformatted, out);
            }
            out.push(Piece::Break(1));
            return;
        }
        _ => {}
    }

    let breaks = if tag == "p" {
        2
    } else if BLOCK_ELEMENTS.contains(&tag) {
        1
    } else {
        0
    };
    let preformatted = preformatted || PREFORMATTED_ELEMENTS.contains(&tag);

    if breaks > 0 {
        out.push(Piece::Break(breaks));
    }
    for child in &element.children {
        collect(child, preformatted, out);
    }
    if breaks > 0 {
        out.push(Piece::Break(breaks));
    }
}

/// Joins pieces, resolving break requests and collapsing whitespace.
#[derive(Default)]
struct TextWriter {
    output: String,
    pending_breaks: usize,
}

impl TextWriter {
    fn write(&mut self, piece: Piece) {
        match piece {
            Piece::Break(count) => self.pending_breaks = self.pending_breaks.max(count),
            Piece::Literal(c) => {
                self.flush_breaks();
                if c == '\n' {
                    self.trim_trailing_spaces();
                }
                self.output.push(c);
            }
            Piece::Preformatted(text) => {
                if text.is_empty() {
                    return;
                }
                self.flush_breaks();
                self.output.push_str(text);
            }
            Piece::Text(text) => self.write_collapsed(text),
        }
    }

    fn write_collapsed(&mut self, text: &str) {
        let collapsed = collapse_whitespace(text);
        if collapsed.is_empty() {
            return;
        }

        if collapsed == " " {
            // Lone whitespace only matters between two runs of text on one line.
            if self.pending_breaks == 0 && !self.at_line_start() && !self.output.ends_with(' ') {
                self.output.push(' ');
            }
            return;
        }

        self.flush_breaks();
        let mut text = collapsed.as_str();
        if self.at_line_start() || self.output.ends_with(' ') || self.output.ends_with('\t') {
            text = text.trim_start_matches(' ');
        }
        self.output.push_str(text);
    }

    fn flush_breaks(&mut self) {
        if self.pending_breaks == 0 {
            return;
        }
        if !self.output.is_empty() {
            self.trim_trailing_spaces();
            for _ in 0..self.pending_breaks {
                self.output.push('\n');
            }
        }
        self.pending_breaks = 0;
    }

    fn at_line_start(&self) -> bool {
        self.output.is_empty() || self.output.ends_with('\n')
    }

    fn trim_trailing_spaces(&mut self) {
        let trimmed = self.output.trim_end_matches(' ').len();
        self.output.truncate(trimmed);
    }

    fn finish(mut self) -> String {
        self.trim_trailing_spaces();
        self.output
    }
}

/// Collapse HTML whitespace runs (space, tab, newline, CR, form feed) to one space.
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c') {
            if !in_whitespace {
                result.push(' ');
                in_whitespace = true;
            }
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}
