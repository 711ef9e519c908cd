//! Legacy `{#id}` heading annotations.
//!
//! Historically an explicit identifier could be pinned by ending the heading
//! text with `{#identifier}`. The annotation is recognized in the flattened
//! heading text and then stripped from the heading's last text node.

use memchr::memmem;

use crate::ast::{Heading, Node};

/// Result of scanning heading text for a trailing `{#id}` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeading {
    /// The annotation's identifier, when present.
    pub id: Option<String>,
    /// The text with the annotation (and the whitespace before it) removed.
    pub text: String,
}

/// Parse heading text for a trailing `{#id}` annotation.
///
/// The annotation must close the text (trailing whitespace is tolerated).
/// Its identifier is the span between the last `{#` and the final `}`; it
/// must be non-empty and may not contain `}`.
///
/// # Examples
///
/// ```
/// use ankor::anchor::parse_heading_id;
///
/// let parsed = parse_heading_id("Hello World {#custom-id}");
/// assert_eq!(parsed.id.as_deref(), Some("custom-id"));
/// assert_eq!(parsed.text, "Hello World");
///
/// let parsed = parse_heading_id("No annotation here");
/// assert_eq!(parsed.id, None);
/// assert_eq!(parsed.text, "No annotation here");
/// ```
pub fn parse_heading_id(text: &str) -> ParsedHeading {
    let trimmed = text.trim_end();
    let Some(inner) = trimmed.strip_suffix('}') else {
        return ParsedHeading {
            id: None,
            text: text.to_string(),
        };
    };
    let Some(open) = memmem::rfind(inner.as_bytes(), b"{#") else {
        return ParsedHeading {
            id: None,
            text: text.to_string(),
        };
    };

    let id = &inner[open + 2..];
    if id.is_empty() || id.contains('}') {
        return ParsedHeading {
            id: None,
            text: text.to_string(),
        };
    }

    ParsedHeading {
        id: Some(id.to_string()),
        text: trimmed[..open].trim_end().to_string(),
    }
}

/// Strip a recognized annotation from the heading's children.
///
/// The annotation is assumed to live in the heading's last text node. With a
/// single child the whole-heading stripped text replaces that child's value;
/// otherwise only the last child's own text is re-parsed and rewritten, or
/// the node removed when stripping leaves it empty. An annotation spanning
/// multiple inline nodes is unsupported and leaves the children untouched.
pub fn strip_annotation(heading: &mut Heading, stripped_text: &str) {
    if heading.children.len() > 1 {
        let Some(Node::Text(last)) = heading.children.last() else {
            return;
        };
        let parsed = parse_heading_id(&last.value);
        if parsed.id.is_none() {
            return;
        }
        if parsed.text.is_empty() {
            heading.children.pop();
        } else if let Some(Node::Text(last)) = heading.children.last_mut() {
            last.value = parsed.text;
        }
    } else if let Some(Node::Text(only)) = heading.children.first_mut() {
        only.value = stripped_text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::HeadingData;

    fn heading_of(children: Vec<Node>) -> Heading {
        Heading {
            depth: 2,
            children,
            data: HeadingData::default(),
        }
    }

    #[test]
    fn test_parse_trailing_annotation() {
        let parsed = parse_heading_id("Hello World {#custom-id}");
        assert_eq!(parsed.id.as_deref(), Some("custom-id"));
        assert_eq!(parsed.text, "Hello World");
    }

    #[test]
    fn test_parse_no_annotation() {
        let parsed = parse_heading_id("Hello World");
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.text, "Hello World");
    }

    #[test]
    fn test_parse_annotation_not_trailing() {
        let parsed = parse_heading_id("{#id} Hello World");
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.text, "{#id} Hello World");
    }

    #[test]
    fn test_parse_empty_identifier_rejected() {
        let parsed = parse_heading_id("Hello {#}");
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.text, "Hello {#}");
    }

    #[test]
    fn test_parse_brace_in_identifier_rejected() {
        let parsed = parse_heading_id("Hello {#a}}");
        assert_eq!(parsed.id, None);
    }

    #[test]
    fn test_parse_last_annotation_wins() {
        let parsed = parse_heading_id("Title {#first} {#second}");
        assert_eq!(parsed.id.as_deref(), Some("second"));
        assert_eq!(parsed.text, "Title {#first}");
    }

    #[test]
    fn test_parse_trailing_whitespace_tolerated() {
        let parsed = parse_heading_id("Title {#id}  ");
        assert_eq!(parsed.id.as_deref(), Some("id"));
        assert_eq!(parsed.text, "Title");
    }

    #[test]
    fn test_parse_annotation_only() {
        let parsed = parse_heading_id("{#bare}");
        assert_eq!(parsed.id.as_deref(), Some("bare"));
        assert_eq!(parsed.text, "");
    }

    #[test]
    fn test_parse_idempotent_on_stripped_text() {
        let parsed = parse_heading_id("Hello World {#custom-id}");
        let again = parse_heading_id(&parsed.text);
        assert_eq!(again.id, None);
        assert_eq!(again.text, parsed.text);
    }

    #[test]
    fn test_strip_single_child() {
        let mut heading = heading_of(vec![Node::text("Hello World {#custom-id}")]);
        let parsed = parse_heading_id("Hello World {#custom-id}");
        strip_annotation(&mut heading, &parsed.text);
        assert_eq!(heading.children, vec![Node::text("Hello World")]);
    }

    #[test]
    fn test_strip_multi_child_rewrites_last() {
        let mut heading = heading_of(vec![
            Node::emphasis(vec![Node::text("Hello")]),
            Node::text(" World {#custom-id}"),
        ]);
        strip_annotation(&mut heading, "Hello World");
        assert_eq!(heading.children.len(), 2);
        assert_eq!(heading.children[1], Node::text(" World"));
    }

    #[test]
    fn test_strip_multi_child_removes_emptied_last() {
        let mut heading = heading_of(vec![
            Node::emphasis(vec![Node::text("Hello")]),
            Node::text(" {#custom-id}"),
        ]);
        strip_annotation(&mut heading, "Hello");
        assert_eq!(heading.children.len(), 1);
    }

    #[test]
    fn test_strip_unsupported_multi_node_annotation() {
        // The annotation text came from a non-text trailing node; leave the
        // children alone rather than guessing a repair.
        let mut heading = heading_of(vec![
            Node::text("Hello "),
            Node::emphasis(vec![Node::text("World {#x}")]),
        ]);
        let before = heading.children.clone();
        strip_annotation(&mut heading, "Hello World");
        assert_eq!(heading.children, before);
    }
}
