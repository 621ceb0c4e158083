/*!
 * HTML parsing into document trees.
 *
 * Markup is parsed by html5ever (through `scraper`), so malformed input is
 * repaired exactly the way browsers do it and every named character
 * reference is decoded. Input starting with a doctype or an `<html>` tag is
 * parsed as a whole document, anything else as a `<body>` fragment.
 * The resulting DOM is converted into a hast-style `Node::Root`.
 */

use log::trace;
use scraper::{ElementRef, Html};
use serde_json::Value;

use super::model::{Element, Node};

/// Attributes whose mere presence means `true`
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "checked", "disabled", "hidden", "inert", "open", "readonly", "required", "selected",
];

/// Parse HTML markup into a document tree.
pub fn parse_html(html: &str) -> Node {
    if is_full_document(html) {
        let document = Html::parse_document(html);
        log_parse_errors(&document);

        let mut children = Vec::new();
        for child in document.tree.root().children() {
            match child.value() {
                scraper::Node::Doctype(_) => children.push(Node::Doctype),
                scraper::Node::Comment(comment) => children.push(Node::comment(comment)),
                _ => {
                    if let Some(element) = ElementRef::wrap(child) {
                        children.push(Node::Element(convert_element(element)));
                    }
                }
            }
        }
        return Node::root(children);
    }

    let fragment = Html::parse_fragment(html);
    log_parse_errors(&fragment);

    // Fragment content lives under a synthetic <html> element.
    Node::root(convert_element(fragment.root_element()).children)
}

fn is_full_document(html: &str) -> bool {
    let start = html.trim_start().as_bytes();
    let starts_with = |prefix: &[u8]| {
        start.len() >= prefix.len() && start[..prefix.len()].eq_ignore_ascii_case(prefix)
    };
    starts_with(b"<!doctype") || starts_with(b"<html")
}

fn log_parse_errors(html: &Html) {
    if !html.errors.is_empty() {
        trace!("Repaired {} HTML parse errors", html.errors.len());
    }
}

fn convert_element(element: ElementRef) -> Element {
    let dom = element.value();
    let mut converted = Element::new(dom.name());

    for (name, value) in dom.attrs() {
        let value = if value.is_empty() && BOOLEAN_ATTRIBUTES.contains(&name) {
            Value::Bool(true)
        } else {
            Value::String(value.to_string())
        };
        converted = converted.with_property(name, value);
    }

    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => converted.children.push(Node::text(text)),
            scraper::Node::Comment(comment) => converted.children.push(Node::comment(comment)),
            scraper::Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    converted.children.push(Node::Element(convert_element(child)));
                }
            }
            _ => {}
        }
    }

    converted
}
