//! # orgnote-core
//!
//! A Rust library for folding org-mode documents into flat note metadata for
//! a personal knowledge base.
//!
//! ## Overview
//!
//! orgnote-core walks a parsed document tree and accumulates a [`Note`]
//! record per document: title, tags, description, headings, internal and
//! external links, embedded images, and a unique identifier. The same
//! traversal threads an ordered chain of node-rewriting middleware through
//! every node, so side-effecting transformations (such as renaming referenced
//! image files to collision-proof names) can rewrite the tree while it is
//! being folded. The note carries the rewritten tree as its `content`.
//!
//! ### Key Features
//!
//! - **Single-pass folding**: one depth-first traversal produces both the
//!   metadata record and the rewritten tree
//! - **Open-ended node set**: unrecognized node kinds round-trip untouched
//!   and contribute no metadata
//! - **First-wins merge**: only the first `#+TITLE:`/`#+DESCRIPTION:` (and
//!   friends) in document order is honored; multi-valued fields concatenate
//!   in traversal order
//! - **Middleware chains**: ordered `OrgNode -> OrgNode` transforms applied
//!   ahead of every handler, composed left to right
//! - **Directory collection**: recursive walks that fold every `.org` file
//!   and can filter to identified notes
//!
//! ## Quick Start
//!
//! ```rust
//! use orgnote_core::{collect::collect_note, parser::parse_org};
//!
//! # fn main() -> Result<(), orgnote_core::OrgnoteError> {
//! let tree = parse_org("#+TITLE: Inbox\n#+FILETAGS: :org:notes:\n* Tasks\n");
//! let note = collect_note(tree, &[])?;
//!
//! assert_eq!(note.meta.title.as_deref(), Some("Inbox"));
//! assert_eq!(note.meta.tags, vec!["org".to_string(), "notes".to_string()]);
//! assert_eq!(note.meta.headings[0].text, "Tasks");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Guide
//!
//! Start with [`collect::collect_note`] for the fold itself, or
//! [`walk::collect_notes_from_dir`] to process a directory. See [`org`] for
//! the tree model and [`middleware`] for node rewriting.
//!
//! [`Note`]: collect::Note

pub mod collect;
pub mod config;
pub mod error;
pub mod middleware;
pub mod org;
pub mod parser;
#[cfg(test)]
mod tests;
pub mod tools;
pub mod walk;
pub mod writer;

pub use error::*;
