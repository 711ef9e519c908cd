//! Heading anchor resolution.
//!
//! Assigns every heading in a document tree a stable, unique identifier. The
//! winning identifier comes from the first applicable source:
//!
//! 1. An `id` already present in the heading's output properties, set by an
//!    earlier pipeline stage (re-slugged case-preserving, so uniqueness
//!    still holds)
//! 2. A trailing comment carrying a `#id` token: an embedded-expression
//!    comment (`{/* #id */}`) or a markup comment (`<!-- #id -->`)
//! 3. A trailing `{#id}` annotation in the heading text
//! 4. A slug derived from the visible heading text
//!
//! Sources 2 and 3 strip their artifacts from the heading's children, so the
//! chain order is also the execution order: mutations happen before any
//! strategy that reads the cleaned content.

mod bracket;
mod comment;
mod resolve;

pub use bracket::{ParsedHeading, parse_heading_id};
pub use comment::extract_comment_id;
pub use resolve::{Anchor, AnchorOptions, assign_heading_ids, collect_anchors, heading_text};
