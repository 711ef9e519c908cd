//! Document tree node types.
//!
//! A parsed document is an ordered tree of [`Node`] values. Only headings,
//! text, and the two comment encodings carry anchor semantics; the remaining
//! kinds exist so real documents round-trip through the tree untouched.
//!
//! Trees serialize to an internally-tagged JSON representation (`"type"`
//! discriminant), so hosts can hand documents across a process boundary:
//!
//! ```
//! use ankor::Node;
//!
//! let doc = Node::root(vec![Node::heading(1, vec![Node::text("Intro")])]);
//! let json = doc.to_json().unwrap();
//! assert_eq!(Node::from_json(&json).unwrap(), doc);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod visit;

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Document root.
    Root(Root),
    /// Section heading with inline content.
    Heading(Heading),
    /// Block-level text container.
    Paragraph(Paragraph),
    /// Leaf text content.
    Text(Text),
    /// Embedded expression (the host format's code-expression escape).
    Expression(Expression),
    /// Raw block-level markup passed through untouched.
    Html(Html),
    /// Embedded component markup passed through untouched.
    Component(Component),
    /// Emphasized inline content.
    Emphasis(Emphasis),
    /// Strongly emphasized inline content.
    Strong(Strong),
    /// Inline code span.
    InlineCode(InlineCode),
    /// Hard line break.
    Break,
}

/// Document root node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
}

/// A heading: depth 1-6, inline children, and a mutable attribute bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6).
    pub depth: u8,
    /// Inline content, in source order.
    pub children: Vec<Node>,
    /// Attributes written by transform passes.
    #[serde(default, skip_serializing_if = "HeadingData::is_empty")]
    pub data: HeadingData,
}

/// Attribute bag attached to a heading.
///
/// After anchor resolution, `id` and `properties["id"]` hold the identical
/// final identifier string: `id` is consumed by later transform stages,
/// `properties` becomes rendered element attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingData {
    /// Internal resolved identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Output-facing properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl HeadingData {
    /// True when no attributes have been attached yet.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.properties.is_empty()
    }
}

/// Block-level text container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// Leaf text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// An embedded expression, e.g. `{expr}` in the host format.
///
/// Expressions evaluate at render time and contribute no static text. A pure
/// comment expression (`{/* ... */}`) parses to a [`Fragment`] with no
/// statements and one comment string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    /// Raw expression source between the braces.
    pub value: String,
    /// Parse artifact attached by the host parser, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<Fragment>,
}

/// Parsed form of an embedded expression fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Top-level statements in the fragment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<String>,
    /// Raw comment strings carried by the fragment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl Fragment {
    /// Fragment carrying a single comment and no statements.
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            statements: Vec::new(),
            comments: vec![text.into()],
        }
    }

    /// The fragment's single comment string.
    ///
    /// Only a fragment with exactly zero statements and exactly one comment
    /// qualifies; anything else is not an identifier carrier.
    pub fn sole_comment(&self) -> Option<&str> {
        if self.statements.is_empty() && self.comments.len() == 1 {
            Some(&self.comments[0])
        } else {
            None
        }
    }
}

/// Raw block-level markup passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Html {
    pub value: String,
}

/// Embedded component markup passthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Component tag name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Emphasized inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

/// Strongly emphasized inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub children: Vec<Node>,
}

/// Inline code span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

impl Node {
    /// Create a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root { children })
    }

    /// Create a heading with an empty attribute bag.
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading {
            depth,
            children,
            data: HeadingData::default(),
        })
    }

    /// Create a paragraph node.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Create an embedded expression node.
    pub fn expression(value: impl Into<String>, fragment: Option<Fragment>) -> Self {
        Node::Expression(Expression {
            value: value.into(),
            fragment,
        })
    }

    /// Create a raw markup node.
    pub fn html(value: impl Into<String>) -> Self {
        Node::Html(Html {
            value: value.into(),
        })
    }

    /// Create a component node.
    pub fn component(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Component(Component {
            name: name.into(),
            children,
        })
    }

    /// Create an emphasis node.
    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis(Emphasis { children })
    }

    /// Create a strong node.
    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong(Strong { children })
    }

    /// Create an inline code node.
    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode(InlineCode {
            value: value.into(),
        })
    }

    /// Child nodes, for kinds that have them.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(n) => Some(&n.children),
            Node::Heading(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Component(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            Node::Text(_)
            | Node::Expression(_)
            | Node::Html(_)
            | Node::InlineCode(_)
            | Node::Break => None,
        }
    }

    /// Mutable child sequence, for kinds that have one.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(n) => Some(&mut n.children),
            Node::Heading(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Component(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            Node::Text(_)
            | Node::Expression(_)
            | Node::Html(_)
            | Node::InlineCode(_)
            | Node::Break => None,
        }
    }

    /// Deserialize a document tree from JSON.
    pub fn from_json(json: &str) -> Result<Node> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the tree to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Flatten a subtree to its plain-text rendering.
///
/// Text, inline code, and raw markup contribute their value; expressions and
/// breaks contribute nothing; container kinds recurse into their children.
pub fn to_text(node: &Node) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Node, text: &mut String) {
    match node {
        Node::Text(t) => text.push_str(&t.value),
        Node::InlineCode(code) => text.push_str(&code.value),
        Node::Html(html) => text.push_str(&html.value),
        Node::Expression(_) | Node::Break => {}
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    collect_text(child, text);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_nested() {
        let node = Node::paragraph(vec![
            Node::text("Hello "),
            Node::emphasis(vec![Node::text("World")]),
        ]);
        assert_eq!(to_text(&node), "Hello World");
    }

    #[test]
    fn test_to_text_expression_contributes_nothing() {
        let node = Node::paragraph(vec![
            Node::text("Title "),
            Node::expression("/* note */", Some(Fragment::comment(" note "))),
        ]);
        assert_eq!(to_text(&node), "Title ");
    }

    #[test]
    fn test_to_text_inline_code_and_html() {
        let node = Node::paragraph(vec![
            Node::text("The "),
            Node::inline_code("parse"),
            Node::text(" fn"),
        ]);
        assert_eq!(to_text(&node), "The parse fn");

        assert_eq!(to_text(&Node::html("<b>raw</b>")), "<b>raw</b>");
    }

    #[test]
    fn test_sole_comment_eligibility() {
        assert_eq!(Fragment::comment(" #id ").sole_comment(), Some(" #id "));

        let two_comments = Fragment {
            statements: Vec::new(),
            comments: vec!["a".into(), "b".into()],
        };
        assert_eq!(two_comments.sole_comment(), None);

        let with_statement = Fragment {
            statements: vec!["console.log(1)".into()],
            comments: vec!["a".into()],
        };
        assert_eq!(with_statement.sole_comment(), None);
    }

    #[test]
    fn test_json_round_trip() {
        let doc = Node::root(vec![
            Node::heading(2, vec![Node::text("Title")]),
            Node::paragraph(vec![
                Node::text("Body "),
                Node::strong(vec![Node::text("bold")]),
                Node::Break,
            ]),
            Node::html("<hr>"),
        ]);

        let json = doc.to_json().unwrap();
        assert_eq!(Node::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_json_heading_data_optional() {
        let json = r#"{
            "type": "heading",
            "depth": 3,
            "children": [{"type": "text", "value": "Hi"}]
        }"#;
        let node = Node::from_json(json).unwrap();

        match node {
            Node::Heading(heading) => {
                assert_eq!(heading.depth, 3);
                assert!(heading.data.is_empty());
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_json_tag_names() {
        let json = Node::inline_code("x").to_json().unwrap();
        assert!(json.contains("\"inline_code\""));

        let json = Node::Break.to_json().unwrap();
        assert!(json.contains("\"break\""));
    }
}
