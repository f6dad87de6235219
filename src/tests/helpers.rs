//! Shared test utilities for building document trees by hand.

use crate::org::{LinkType, OrgNode};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn document(children: Vec<OrgNode>) -> OrgNode {
    OrgNode::Document { children }
}

pub fn section(children: Vec<OrgNode>) -> OrgNode {
    OrgNode::Section { children }
}

pub fn paragraph(children: Vec<OrgNode>) -> OrgNode {
    OrgNode::Paragraph { children }
}

pub fn drawer(children: Vec<OrgNode>) -> OrgNode {
    OrgNode::PropertyDrawer { children }
}

pub fn headline(level: u8, raw_value: &str) -> OrgNode {
    OrgNode::Headline {
        level,
        raw_value: raw_value.to_string(),
    }
}

pub fn keyword(key: &str, value: &str) -> OrgNode {
    OrgNode::Keyword {
        key: key.to_string(),
        value: value.to_string(),
    }
}

pub fn property(key: &str, value: &str) -> OrgNode {
    OrgNode::NodeProperty {
        key: key.to_string(),
        value: value.to_string(),
    }
}

pub fn link(link_type: LinkType, path: &str, raw_link: &str, description: Option<&str>) -> OrgNode {
    OrgNode::Link {
        link_type,
        path: path.to_string(),
        raw_link: raw_link.to_string(),
        children: description.map(|d| vec![text(d)]).unwrap_or_default(),
    }
}

pub fn text(value: &str) -> OrgNode {
    OrgNode::Text {
        value: value.to_string(),
    }
}

pub fn raw(value: &str) -> OrgNode {
    OrgNode::Raw {
        value: value.to_string(),
    }
}
