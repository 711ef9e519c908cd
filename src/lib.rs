//! # ankor
//!
//! A fast, lightweight library for assigning stable, unique anchor IDs to
//! headings in parsed document trees.
//!
//! ## Features
//!
//! - Explicit IDs via a trailing `{#custom-id}` annotation in heading text
//! - Explicit IDs via a trailing comment: an embedded-expression comment
//!   (`{/* #id */}`) or a markup comment (`<!-- #id -->`)
//! - Slugs derived from the visible heading text, unique per document
//!   (`overview`, `overview-1`, ...)
//! - In-place AST cleanup: identifier artifacts are stripped from the
//!   visible text
//!
//! ## Quick Start
//!
//! ```
//! use ankor::{AnchorOptions, Node, assign_heading_ids, collect_anchors};
//!
//! let mut doc = Node::root(vec![
//!     Node::heading(2, vec![Node::text("Hello World {#custom-id}")]),
//!     Node::heading(2, vec![Node::text("Overview")]),
//!     Node::heading(2, vec![Node::text("Overview")]),
//! ]);
//!
//! assign_heading_ids(&mut doc, &AnchorOptions::default());
//!
//! let anchors = collect_anchors(&doc);
//! assert_eq!(anchors[0].id, "custom-id");
//! assert_eq!(anchors[0].text, "Hello World");
//! assert_eq!(anchors[1].id, "overview");
//! assert_eq!(anchors[2].id, "overview-1");
//! ```
//!
//! ## Working with Trees
//!
//! The [`Node`] enum is the central data type, representing a parsed document
//! in a format-agnostic way. Trees come from a host parser or from JSON:
//!
//! ```
//! use ankor::{AnchorOptions, Node, assign_heading_ids};
//!
//! let json = r#"{
//!     "type": "root",
//!     "children": [
//!         {"type": "heading", "depth": 1, "children": [
//!             {"type": "text", "value": "Getting Started"}
//!         ]}
//!     ]
//! }"#;
//!
//! let mut doc = Node::from_json(json).unwrap();
//! assign_heading_ids(&mut doc, &AnchorOptions::default());
//! ```

pub mod anchor;
pub mod ast;
pub mod error;
pub mod slug;

pub use anchor::{Anchor, AnchorOptions, assign_heading_ids, collect_anchors, heading_text};
pub use ast::{
    Component, Expression, Fragment, Heading, HeadingData, Html, InlineCode, Node, Text, to_text,
};
pub use error::{Error, Result};
pub use slug::{Slugger, slugify};
