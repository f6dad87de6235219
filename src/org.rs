//! Document tree model for parsed org documents.
//!
//! [`OrgNode`] is a closed tagged union over the node kinds the metadata
//! reducer recognizes, plus [`OrgNode::Raw`] for source constructs it treats
//! as opaque. The tree is exclusively owned with no back references, so
//! rewriting a node during traversal means producing a replacement node that
//! owns a replacement child sequence.

use serde::{Deserialize, Serialize};

/// Discriminates a link by its target scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// `id:` target referencing another note.
    Id,
    Http,
    Https,
    /// `file:` target, a `./`-prefixed path, or a bare scheme-less path.
    File,
    /// Any scheme the reducer does not classify (`mailto:`, `elisp:`, ...).
    Other(String),
}

/// One node of a parsed org document.
///
/// Container kinds ([`Document`](OrgNode::Document), [`Section`](OrgNode::Section),
/// [`Paragraph`](OrgNode::Paragraph), [`PropertyDrawer`](OrgNode::PropertyDrawer))
/// own an ordered child sequence. Leaf kinds carry the fields the reducer
/// extracts metadata from. A [`Link`](OrgNode::Link)'s children are its display
/// text only and are never traversed for metadata on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OrgNode {
    /// Root of a parsed document.
    Document { children: Vec<OrgNode> },
    Section { children: Vec<OrgNode> },
    Paragraph { children: Vec<OrgNode> },
    PropertyDrawer { children: Vec<OrgNode> },
    /// `* Heading` line. `level` counts leading stars, 1 = top.
    Headline { level: u8, raw_value: String },
    /// `#+KEY: value` document directive.
    Keyword { key: String, value: String },
    /// `:KEY: value` entry inside a property drawer.
    NodeProperty { key: String, value: String },
    Link {
        link_type: LinkType,
        /// Target with the scheme prefix stripped.
        path: String,
        /// Target exactly as written in the source.
        raw_link: String,
        children: Vec<OrgNode>,
    },
    Text { value: String },
    /// A source line the parser does not model. Preserved verbatim.
    Raw { value: String },
}

impl OrgNode {
    /// The kind discriminator as it appears in serialized trees.
    pub fn kind(&self) -> &'static str {
        match self {
            OrgNode::Document { .. } => "document",
            OrgNode::Section { .. } => "section",
            OrgNode::Paragraph { .. } => "paragraph",
            OrgNode::PropertyDrawer { .. } => "property-drawer",
            OrgNode::Headline { .. } => "headline",
            OrgNode::Keyword { .. } => "keyword",
            OrgNode::NodeProperty { .. } => "node-property",
            OrgNode::Link { .. } => "link",
            OrgNode::Text { .. } => "text",
            OrgNode::Raw { .. } => "raw",
        }
    }

    /// Child nodes, empty for leaves. A link's children are its display text.
    pub fn children(&self) -> &[OrgNode] {
        match self {
            OrgNode::Document { children }
            | OrgNode::Section { children }
            | OrgNode::Paragraph { children }
            | OrgNode::PropertyDrawer { children }
            | OrgNode::Link { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenation of all plain-text descendant values, in order, with no
    /// separator.
    pub fn plain_text(&self) -> String {
        match self {
            OrgNode::Text { value } => value.clone(),
            _ => self
                .children()
                .iter()
                .fold(String::new(), |acc, child| acc + &child.plain_text()),
        }
    }
}
