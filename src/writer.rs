//! Document tree to org text.
//!
//! The serializer boundary: every node kind the parser or a rebuilt container
//! can produce is emitted back as org source. Whitespace is canonicalized
//! (one space after directive colons, one blank line after paragraphs), so
//! parse-write-parse is a fixpoint.

use crate::org::OrgNode;

/// Serialize a document tree back to org text.
pub fn write_org(node: &OrgNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &OrgNode, out: &mut String) {
    match node {
        OrgNode::Document { children } | OrgNode::Section { children } => {
            for child in children {
                write_node(child, out);
            }
        }
        OrgNode::Paragraph { children } => {
            for child in children {
                write_inline(child, out);
            }
            out.push_str("\n\n");
        }
        OrgNode::PropertyDrawer { children } => {
            out.push_str(":PROPERTIES:\n");
            for child in children {
                write_node(child, out);
            }
            out.push_str(":END:\n");
        }
        OrgNode::Headline { level, raw_value } => {
            for _ in 0..*level {
                out.push('*');
            }
            out.push(' ');
            out.push_str(raw_value);
            out.push('\n');
        }
        OrgNode::Keyword { key, value } => {
            out.push_str("#+");
            out.push_str(key);
            out.push(':');
            if !value.is_empty() {
                out.push(' ');
                out.push_str(value);
            }
            out.push('\n');
        }
        OrgNode::NodeProperty { key, value } => {
            out.push(':');
            out.push_str(key);
            out.push(':');
            if !value.is_empty() {
                out.push(' ');
                out.push_str(value);
            }
            out.push('\n');
        }
        OrgNode::Raw { value } => {
            out.push_str(value);
            out.push('\n');
        }
        // Inline nodes at block position, emitted on their own line.
        other => {
            write_inline(other, out);
            out.push('\n');
        }
    }
}

fn write_inline(node: &OrgNode, out: &mut String) {
    match node {
        OrgNode::Text { value } => out.push_str(value),
        OrgNode::Link {
            raw_link, children, ..
        } => {
            out.push_str("[[");
            out.push_str(raw_link);
            out.push(']');
            if !children.is_empty() {
                out.push('[');
                for child in children {
                    write_inline(child, out);
                }
                out.push(']');
            }
            out.push(']');
        }
        other => write_node(other, out),
    }
}
