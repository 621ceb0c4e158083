/*!
 * Core document model types.
 *
 * The tree mirrors hast, the HTML abstract syntax tree format, so trees
 * produced by other tools can be deserialized directly from JSON.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DocumentError;

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Top-level container
    Root(Root),

    /// Element with a tag name, properties and children
    Element(Element),

    /// Literal text
    Text(Text),

    /// Comment, never part of the visible text
    Comment(Comment),

    /// Document type declaration
    Doctype,
}

impl Node {
    /// Create a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root { children })
    }

    /// Create an element node without properties.
    pub fn element(tag_name: &str, children: Vec<Node>) -> Self {
        Node::Element(Element::new(tag_name).with_children(children))
    }

    /// Create a text node.
    pub fn text(value: &str) -> Self {
        Node::Text(Text {
            value: value.to_string(),
        })
    }

    /// Create a comment node.
    pub fn comment(value: &str) -> Self {
        Node::Comment(Comment {
            value: value.to_string(),
        })
    }

    /// Children of this node; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(root) => &root.children,
            Node::Element(element) => &element.children,
            Node::Text(_) | Node::Comment(_) | Node::Doctype => &[],
        }
    }

    /// Check whether this node is a root without any children.
    pub fn is_empty_root(&self) -> bool {
        matches!(self, Node::Root(root) if root.children.is_empty())
    }

    /// Deserialize a hast JSON tree.
    ///
    /// Unknown fields such as `position` or `data` are ignored.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this tree as hast JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Root node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Element node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Lowercase tag name (e.g., "p", "li")
    #[serde(rename = "tagName")]
    pub tag_name: String,

    /// Element properties, as in hast
    #[serde(default)]
    pub properties: Map<String, Value>,

    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            properties: Map::new(),
            children: Vec::new(),
        }
    }

    /// Set a property.
    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Check if the element carries the `hidden` property.
    pub fn is_hidden(&self) -> bool {
        match self.properties.get("hidden") {
            None | Some(Value::Bool(false)) | Some(Value::Null) => false,
            Some(_) => true,
        }
    }
}

/// Text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Comment node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
}
