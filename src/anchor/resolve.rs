//! Heading identifier resolution.

use serde::{Deserialize, Serialize};

use crate::ast::visit::{for_each_heading_mut, visit};
use crate::ast::{Heading, Node, to_text};
use crate::slug::Slugger;

use super::bracket::{parse_heading_id, strip_annotation};
use super::comment::extract_comment_id;

/// Configuration for anchor resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorOptions {
    /// Preserve source casing in text-derived slugs instead of lowercasing.
    pub maintain_case: bool,
}

/// One resolved heading anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Heading level (1-6).
    pub depth: u8,
    /// The resolved identifier.
    pub id: String,
    /// Visible heading text.
    pub text: String,
}

/// Compute the visible plain text of a heading.
///
/// Raw markup passthrough children (block markup, embedded components) are
/// excluded from flattening. A heading consisting only of such nodes falls
/// back to flattening all children, so it still yields something.
pub fn heading_text(heading: &Heading) -> String {
    let visible: Vec<&Node> = heading
        .children
        .iter()
        .filter(|child| !matches!(child, Node::Html(_) | Node::Component(_)))
        .collect();

    if visible.is_empty() {
        return heading.children.iter().map(to_text).collect();
    }
    visible.into_iter().map(to_text).collect()
}

/// Assign a unique identifier to every heading in `root`.
///
/// Headings are visited depth-first in document order; each heading's
/// extraction, mutation, and registry work completes before the next heading
/// is visited. The final identifier lands in both `data.id` and the
/// output-facing `data.properties["id"]`.
pub fn assign_heading_ids(root: &mut Node, options: &AnchorOptions) {
    let mut slugger = Slugger::new();
    for_each_heading_mut(root, &mut |heading| {
        resolve_heading(heading, &mut slugger, options);
    });
}

/// Resolve one heading through the priority chain.
///
/// Strategies that mutate children (comment removal, bracket stripping) run
/// before the slug fallback, so the fallback always sees cleaned content.
fn resolve_heading(heading: &mut Heading, slugger: &mut Slugger, options: &AnchorOptions) {
    let id = if let Some(existing) = heading.data.properties.get("id").cloned() {
        // An id set by an earlier pipeline stage keeps its casing; only
        // uniqueness is enforced.
        slugger.slug(&existing, true)
    } else if let Some(id) = extract_comment_id(heading) {
        id
    } else {
        let text = heading_text(heading);
        let parsed = parse_heading_id(&text);
        match parsed.id {
            Some(id) => {
                strip_annotation(heading, &parsed.text);
                id
            }
            None => slugger.slug(&parsed.text, options.maintain_case),
        }
    };

    heading.data.id = Some(id.clone());
    heading.data.properties.insert("id".to_string(), id);
}

/// Collect the anchor table for a processed document, in document order.
///
/// Headings without a resolved identifier are skipped.
pub fn collect_anchors(root: &Node) -> Vec<Anchor> {
    let mut anchors = Vec::new();
    visit(root, &mut |node| {
        if let Node::Heading(heading) = node
            && let Some(id) = &heading.data.id
        {
            anchors.push(Anchor {
                depth: heading.depth,
                id: id.clone(),
                text: heading_text(heading),
            });
        }
    });
    anchors
}
