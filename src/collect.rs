//! Tree-to-metadata folding.
//!
//! ## Key Components
//!
//! - [`collect_note`] - Fold a parsed document tree into one [`Note`] while a
//!   middleware chain rewrites nodes in flight
//! - [`Fragment`] - A single node's metadata contribution
//! - [`Note`] / [`NoteMeta`] - The accumulated record plus the rewritten tree
//!
//! ## Dispatch
//!
//! Every visited node is first fed through the composed middleware chain, then
//! dispatched on its kind. Container kinds recurse into their children and are
//! rebuilt around the rewritten child sequence. Leaf kinds contribute at most
//! one fragment and never recurse: a link's display children are only used to
//! compute its display name. Kinds with no handler pass through verbatim and
//! contribute nothing, which is how plain prose, markup, tables, and code
//! blocks survive a traversal untouched.
//!
//! ## Merge policy
//!
//! Fragments fold into the note in traversal order. Multi-valued fields
//! concatenate without deduplication; single-valued fields keep the first
//! value ever supplied, so a second `#+TITLE:` in the same document is
//! ignored by design.

use serde::{Deserialize, Serialize};

use crate::{
    error::OrgnoteError,
    middleware::{MiddlewareChain, NodeMiddleware},
    org::{LinkType, OrgNode},
    tools::{is_image_path, is_true, split_filetags},
};

/// One heading encountered during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteHeading {
    pub text: String,
    pub level: u8,
}

/// A named link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLink {
    /// Display text of the link, empty when the source gave none.
    pub name: String,
    /// Raw link target exactly as written.
    pub url: String,
}

/// A single node's contribution to a [`Note`], produced by exactly one
/// handler invocation. Handlers return `None` rather than an all-empty
/// fragment when a node carries nothing of interest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub headings: Vec<NoteHeading>,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub external_links: Vec<NoteLink>,
    pub internal_links: Vec<NoteLink>,
    pub images: Vec<String>,
    pub id: Option<String>,
}

impl Fragment {
    /// True when no field is populated. An empty string or `false` still
    /// counts as populated; only absence does not.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
            && self.title.is_none()
            && self.tags.is_empty()
            && self.description.is_none()
            && self.category.is_none()
            && self.published.is_none()
            && self.external_links.is_empty()
            && self.internal_links.is_empty()
            && self.images.is_empty()
            && self.id.is_none()
    }
}

/// Accumulated metadata for one document.
///
/// Multi-valued fields are never null, only empty. Single-valued fields are
/// set at most once and never overwritten by a later fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub headings: Vec<NoteHeading>,
    pub tags: Vec<String>,
    pub external_links: Vec<NoteLink>,
    pub internal_links: Vec<NoteLink>,
    pub images: Vec<String>,
}

/// The final record for one document: identifier, metadata, and the
/// (possibly rewritten) tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<String>,
    pub meta: NoteMeta,
    pub content: OrgNode,
}

/// Fold `tree` into a [`Note`], applying `middleware` to every node ahead of
/// its handler.
///
/// The returned note owns the rewritten tree as `content`; the input tree is
/// consumed, never mutated in place.
pub fn collect_note(tree: OrgNode, middleware: &[NodeMiddleware]) -> Result<Note, OrgnoteError> {
    let chain = MiddlewareChain::new(middleware);
    let (fragments, content) = dispatch(tree, &chain)?;
    tracing::debug!("Folding {} fragments into note", fragments.len());

    let mut note = Note {
        id: None,
        meta: NoteMeta::default(),
        content,
    };
    for fragment in fragments.into_iter().filter(|f| !f.is_empty()) {
        let meta = &mut note.meta;
        meta.headings.extend(fragment.headings);
        meta.tags.extend(fragment.tags);
        meta.external_links.extend(fragment.external_links);
        meta.internal_links.extend(fragment.internal_links);
        meta.images.extend(fragment.images);
        meta.title = meta.title.take().or(fragment.title);
        meta.description = meta.description.take().or(fragment.description);
        meta.category = meta.category.take().or(fragment.category);
        meta.published = meta.published.take().or(fragment.published);
        note.id = note.id.take().or(fragment.id);
    }
    Ok(note)
}

/// Apply the middleware chain to `node`, then its kind-specific handler.
///
/// Returns the fragments contributed by the node (and, for containers, its
/// subtree) alongside the rewritten node.
fn dispatch(
    node: OrgNode,
    middleware: &MiddlewareChain<'_>,
) -> Result<(Vec<Fragment>, OrgNode), OrgnoteError> {
    let node = middleware.apply(node)?;
    match node {
        OrgNode::Document { children } => {
            let (fragments, children) = descend(children, middleware)?;
            Ok((fragments, OrgNode::Document { children }))
        }
        OrgNode::Section { children } => {
            let (fragments, children) = descend(children, middleware)?;
            Ok((fragments, OrgNode::Section { children }))
        }
        OrgNode::Paragraph { children } => {
            let (fragments, children) = descend(children, middleware)?;
            Ok((fragments, OrgNode::Paragraph { children }))
        }
        OrgNode::PropertyDrawer { children } => {
            let (fragments, children) = descend(children, middleware)?;
            Ok((fragments, OrgNode::PropertyDrawer { children }))
        }
        OrgNode::Headline { level, raw_value } => {
            let fragment = Fragment {
                headings: vec![NoteHeading {
                    text: raw_value.clone(),
                    level,
                }],
                ..Default::default()
            };
            Ok((vec![fragment], OrgNode::Headline { level, raw_value }))
        }
        OrgNode::Keyword { key, value } => {
            let fragments = keyword_fragment(&key, &value).into_iter().collect();
            Ok((fragments, OrgNode::Keyword { key, value }))
        }
        OrgNode::NodeProperty { key, value } => {
            let fragments = property_fragment(&key, &value).into_iter().collect();
            Ok((fragments, OrgNode::NodeProperty { key, value }))
        }
        OrgNode::Link {
            link_type,
            path,
            raw_link,
            children,
        } => {
            let fragments = link_fragment(&link_type, &path, &raw_link, &children)
                .into_iter()
                .collect();
            Ok((
                fragments,
                OrgNode::Link {
                    link_type,
                    path,
                    raw_link,
                    children,
                },
            ))
        }
        // No handler registered: preserved verbatim, contributes nothing.
        other => Ok((Vec::new(), other)),
    }
}

/// Recurse into a container's children, concatenating their fragments in
/// child order and collecting the rewritten child sequence.
fn descend(
    children: Vec<OrgNode>,
    middleware: &MiddlewareChain<'_>,
) -> Result<(Vec<Fragment>, Vec<OrgNode>), OrgnoteError> {
    let mut fragments = Vec::new();
    let mut rewritten = Vec::with_capacity(children.len());
    for child in children {
        let (mut child_fragments, child) = dispatch(child, middleware)?;
        fragments.append(&mut child_fragments);
        rewritten.push(child);
    }
    Ok((fragments, rewritten))
}

fn keyword_fragment(key: &str, value: &str) -> Option<Fragment> {
    match key.to_lowercase().as_str() {
        "title" => Some(Fragment {
            title: Some(value.to_string()),
            ..Default::default()
        }),
        "filetags" => Some(Fragment {
            tags: split_filetags(value),
            ..Default::default()
        }),
        "description" => Some(Fragment {
            description: Some(value.to_string()),
            ..Default::default()
        }),
        _ => None,
    }
}

// PUBLISHED is the canonical publication key; ACTIVE is accepted as an alias
// feeding the same field, first occurrence of either spelling wins.
fn property_fragment(key: &str, value: &str) -> Option<Fragment> {
    match key.to_lowercase().as_str() {
        "id" => Some(Fragment {
            id: Some(value.to_string()),
            ..Default::default()
        }),
        "published" | "active" => Some(Fragment {
            published: Some(is_true(value)),
            ..Default::default()
        }),
        "category" => Some(Fragment {
            category: Some(value.to_string()),
            ..Default::default()
        }),
        _ => None,
    }
}

fn link_fragment(
    link_type: &LinkType,
    path: &str,
    raw_link: &str,
    children: &[OrgNode],
) -> Option<Fragment> {
    match link_type {
        LinkType::File if is_image_path(path) => Some(Fragment {
            images: vec![path.to_string()],
            ..Default::default()
        }),
        LinkType::File => None,
        LinkType::Id => Some(Fragment {
            internal_links: vec![NoteLink {
                name: display_name(children),
                url: raw_link.to_string(),
            }],
            ..Default::default()
        }),
        LinkType::Http | LinkType::Https => Some(Fragment {
            external_links: vec![NoteLink {
                name: display_name(children),
                url: raw_link.to_string(),
            }],
            ..Default::default()
        }),
        LinkType::Other(_) => None,
    }
}

fn display_name(children: &[OrgNode]) -> String {
    children
        .iter()
        .fold(String::new(), |acc, child| acc + &child.plain_text())
}
