//! Org text to document tree.
//!
//! A line-oriented reader for the org subset the reducer dispatches on:
//! headlines, `#+KEY: value` directives, `:PROPERTIES:` drawers, and
//! paragraphs with inline `[[target][description]]` links. Anything else is
//! preserved as opaque [`OrgNode::Raw`] content so a parsed tree always
//! serializes back without loss.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::org::{LinkType, OrgNode};

static HEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\*+)[ \t]+(.*)$").expect("static regex"));

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*#\+([A-Za-z0-9_]+):[ \t]*(.*?)[ \t]*$").expect("static regex"));

static DRAWER_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ \t]*:PROPERTIES:[ \t]*$").expect("static regex"));

static DRAWER_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ \t]*:END:[ \t]*$").expect("static regex"));

static NODE_PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*:([^:\s]+):(?:[ \t]+(.*?))?[ \t]*$").expect("static regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]\[]+)\](?:\[([^\]\[]+)\])?\]").expect("static regex"));

/// Parse org text into a document tree.
///
/// The document's children alternate between [`OrgNode::Section`] containers
/// and the [`OrgNode::Headline`] leaves that separate them.
pub fn parse_org(input: &str) -> OrgNode {
    let lines: Vec<&str> = input.lines().collect();
    let mut children = Vec::new();
    let mut section: Vec<OrgNode> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(caps) = HEADLINE_RE.captures(line) {
            flush_paragraph(&mut paragraph, &mut section);
            flush_section(&mut section, &mut children);
            children.push(OrgNode::Headline {
                level: caps[1].len() as u8,
                raw_value: caps[2].to_string(),
            });
            i += 1;
            continue;
        }

        if DRAWER_START_RE.is_match(line) {
            if let Some(end) = lines[i + 1..]
                .iter()
                .position(|l| DRAWER_END_RE.is_match(l))
            {
                flush_paragraph(&mut paragraph, &mut section);
                let entries = lines[i + 1..i + 1 + end]
                    .iter()
                    .map(|l| property_entry(l))
                    .collect();
                section.push(OrgNode::PropertyDrawer { children: entries });
                i += end + 2;
                continue;
            }
            // Unterminated drawer, treat the opening line as prose.
        }

        if let Some(caps) = KEYWORD_RE.captures(line) {
            flush_paragraph(&mut paragraph, &mut section);
            section.push(OrgNode::Keyword {
                key: caps[1].to_string(),
                value: caps[2].to_string(),
            });
            i += 1;
            continue;
        }

        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut section);
            i += 1;
            continue;
        }

        paragraph.push(line);
        i += 1;
    }
    flush_paragraph(&mut paragraph, &mut section);
    flush_section(&mut section, &mut children);
    OrgNode::Document { children }
}

fn flush_paragraph(paragraph: &mut Vec<&str>, section: &mut Vec<OrgNode>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join("\n");
    paragraph.clear();
    section.push(OrgNode::Paragraph {
        children: parse_inline(&text),
    });
}

fn flush_section(section: &mut Vec<OrgNode>, children: &mut Vec<OrgNode>) {
    if section.is_empty() {
        return;
    }
    children.push(OrgNode::Section {
        children: std::mem::take(section),
    });
}

fn property_entry(line: &str) -> OrgNode {
    match NODE_PROPERTY_RE.captures(line) {
        Some(caps) => OrgNode::NodeProperty {
            key: caps[1].to_string(),
            value: caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string(),
        },
        None => OrgNode::Raw {
            value: line.to_string(),
        },
    }
}

/// Split paragraph text into plain-text runs and link nodes.
fn parse_inline(text: &str) -> Vec<OrgNode> {
    let mut children = Vec::new();
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            children.push(OrgNode::Text {
                value: text[last..whole.start()].to_string(),
            });
        }
        children.push(link_node(&caps[1], caps.get(2).map(|m| m.as_str())));
        last = whole.end();
    }
    if last < text.len() {
        children.push(OrgNode::Text {
            value: text[last..].to_string(),
        });
    }
    children
}

fn link_node(target: &str, description: Option<&str>) -> OrgNode {
    let (link_type, path) = classify_target(target);
    OrgNode::Link {
        link_type,
        path,
        raw_link: target.to_string(),
        children: description
            .map(|d| {
                vec![OrgNode::Text {
                    value: d.to_string(),
                }]
            })
            .unwrap_or_default(),
    }
}

/// Classify a bracket-link target by scheme. Scheme-less targets are file
/// paths; unknown schemes are preserved but never contribute metadata.
fn classify_target(target: &str) -> (LinkType, String) {
    if let Some(rest) = target.strip_prefix("id:") {
        return (LinkType::Id, rest.to_string());
    }
    if target.starts_with("http://") {
        return (LinkType::Http, target.to_string());
    }
    if target.starts_with("https://") {
        return (LinkType::Https, target.to_string());
    }
    if let Some(rest) = target.strip_prefix("file:") {
        return (LinkType::File, rest.to_string());
    }
    match target.split_once(':') {
        Some((scheme, _)) if !scheme.is_empty() && !scheme.contains('/') => {
            (LinkType::Other(scheme.to_string()), target.to_string())
        }
        _ => (LinkType::File, target.to_string()),
    }
}
