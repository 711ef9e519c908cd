//! Identifier extraction from trailing heading comments.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Heading, Node};

/// Matches a markup comment: opening delimiter, free-form content, closing
/// delimiter. Surrounding whitespace is tolerated.
static MARKUP_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*<!--(.*?)-->\s*$").unwrap());

/// Extract an identifier from a trailing comment on `heading`.
///
/// Identifier comments are recognized exclusively in trailing position; a
/// comment elsewhere is not a candidate. On success the comment node is
/// removed and trailing whitespace on the new last text node is trimmed. A
/// comment whose first token does not start with `#` is not an identifier
/// and is left untouched.
pub fn extract_comment_id(heading: &mut Heading) -> Option<String> {
    let content = match heading.children.last()? {
        Node::Expression(expr) => expr.fragment.as_ref()?.sole_comment()?.to_string(),
        Node::Html(html) => MARKUP_COMMENT
            .captures(&html.value)?
            .get(1)?
            .as_str()
            .to_string(),
        _ => return None,
    };

    let id = comment_id(&content)?;

    heading.children.pop();
    if let Some(Node::Text(text)) = heading.children.last_mut() {
        text.value.truncate(text.value.trim_end().len());
    }

    Some(id)
}

/// Apply the comment content rule: only the first whitespace-delimited token
/// counts; it must start with the `#` marker; the identifier is the token
/// without the marker.
fn comment_id(content: &str) -> Option<String> {
    let token = content.split_whitespace().next()?;
    let id = token.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}
