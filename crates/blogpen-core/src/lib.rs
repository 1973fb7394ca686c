//! blogpen-core - document model and HTML serialization
//!
//! This crate provides the core data structures and serialization for
//! blogpen. It is used by `blogpen-editor` (editor state and toggle logic)
//! and `blogpen-publish` (the save flow).
//!
//! # Architecture
//!
//! ```text
//! Editor operations ──▶ ┌───────────────┐
//!                       │               │
//!                       │ Document tree │ ──▶ HTML string
//! JSON document shape ─▶│               │
//!                       └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blogpen_core::{serialize_document, BlockType, Mark, Marks, Node, SerializeOptions};
//!
//! let document = vec![
//!     Node::element(
//!         BlockType::HeadingOne,
//!         vec![Node::marked_text("Hello World", Marks::only(Mark::Bold))],
//!     ),
//!     Node::element(BlockType::Paragraph, vec![Node::text("First post.")]),
//! ];
//!
//! let html = serialize_document(&document, &SerializeOptions::default());
//! assert_eq!(html, "<h1><strong>Hello World</strong></h1><p>First post.</p>");
//! ```

mod model;
mod options;
mod serialize;

pub use model::{initial_document, BlockType, Mark, Marks, Node};
pub use options::SerializeOptions;
pub use serialize::{serialize, serialize_document};
