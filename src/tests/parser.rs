//! Tests for the org reader and writer boundaries.

use super::helpers::*;
use crate::{
    org::{LinkType, OrgNode},
    parser::parse_org,
    writer::write_org,
};
use test_log::test;

#[test]
fn test_parse_headlines() {
    let tree = parse_org("* Top\n** Nested heading\n*** Deep\n");
    let expected = document(vec![
        headline(1, "Top"),
        headline(2, "Nested heading"),
        headline(3, "Deep"),
    ]);
    assert_eq!(tree, expected);
}

#[test]
fn test_bold_text_is_not_a_headline() {
    let tree = parse_org("*bold* opener\n");
    let expected = document(vec![section(vec![paragraph(vec![text("*bold* opener")])])]);
    assert_eq!(tree, expected);
}

#[test]
fn test_parse_keywords() {
    let tree = parse_org("#+TITLE: Hello world\n#+DESCRIPTION:\n#+filetags: :a:b:\n");
    let expected = document(vec![section(vec![
        keyword("TITLE", "Hello world"),
        keyword("DESCRIPTION", ""),
        keyword("filetags", ":a:b:"),
    ])]);
    assert_eq!(tree, expected);
}

#[test]
fn test_parse_property_drawer() {
    let input = ":PROPERTIES:\n:ID: some-id\n:FLAG:\n!!not a property\n:END:\n";
    let tree = parse_org(input);
    let expected = document(vec![section(vec![drawer(vec![
        property("ID", "some-id"),
        property("FLAG", ""),
        raw("!!not a property"),
    ])])]);
    assert_eq!(tree, expected);
}

#[test]
fn test_unterminated_drawer_is_prose() {
    let tree = parse_org(":PROPERTIES:\n:ID: lost\n");
    let expected = document(vec![section(vec![paragraph(vec![text(
        ":PROPERTIES:\n:ID: lost",
    )])])]);
    assert_eq!(tree, expected);
}

#[test]
fn test_parse_inline_links() {
    init_logging();
    let tree = parse_org("see [[id:elisp][Elisp]] and [[https://ya.ru][yandex]].\n");
    let expected = document(vec![section(vec![paragraph(vec![
        text("see "),
        link(LinkType::Id, "elisp", "id:elisp", Some("Elisp")),
        text(" and "),
        link(
            LinkType::Https,
            "https://ya.ru",
            "https://ya.ru",
            Some("yandex"),
        ),
        text("."),
    ])])]);
    assert_eq!(tree, expected);
}

#[test]
fn test_link_target_classification() {
    let classify = |target: &str| -> OrgNode {
        let tree = parse_org(&format!("[[{target}]]\n"));
        match tree {
            OrgNode::Document { children } => match children.into_iter().next() {
                Some(OrgNode::Section { mut children }) => match children.remove(0) {
                    OrgNode::Paragraph { mut children } => children.remove(0),
                    other => other,
                },
                other => panic!("unexpected node {other:?}"),
            },
            other => panic!("unexpected node {other:?}"),
        }
    };

    assert_eq!(
        classify("file:img.png"),
        link(LinkType::File, "img.png", "file:img.png", None)
    );
    assert_eq!(
        classify("./shots/img.png"),
        link(LinkType::File, "./shots/img.png", "./shots/img.png", None)
    );
    assert_eq!(
        classify("test.jpeg"),
        link(LinkType::File, "test.jpeg", "test.jpeg", None)
    );
    assert_eq!(
        classify("http://old.example.org"),
        link(
            LinkType::Http,
            "http://old.example.org",
            "http://old.example.org",
            None
        )
    );
    assert_eq!(
        classify("mailto:me@example.org"),
        link(
            LinkType::Other("mailto".to_string()),
            "mailto:me@example.org",
            "mailto:me@example.org",
            None
        )
    );
}

#[test]
fn test_blank_lines_separate_paragraphs() {
    let tree = parse_org("first paragraph\nstill first\n\nsecond paragraph\n");
    let expected = document(vec![section(vec![
        paragraph(vec![text("first paragraph\nstill first")]),
        paragraph(vec![text("second paragraph")]),
    ])]);
    assert_eq!(tree, expected);
}

#[test]
fn test_sections_split_on_headlines() {
    let input = "#+TITLE: Doc\n\n* One\nbody one\n* Two\nbody two\n";
    let tree = parse_org(input);
    let expected = document(vec![
        section(vec![keyword("TITLE", "Doc")]),
        headline(1, "One"),
        section(vec![paragraph(vec![text("body one")])]),
        headline(1, "Two"),
        section(vec![paragraph(vec![text("body two")])]),
    ]);
    assert_eq!(tree, expected);
}

#[test]
fn test_writer_emits_canonical_source() {
    let tree = document(vec![
        section(vec![
            keyword("TITLE", "Doc"),
            drawer(vec![property("ID", "doc-1"), property("FLAG", "")]),
        ]),
        headline(1, "One"),
        section(vec![paragraph(vec![
            text("see "),
            link(LinkType::Id, "elisp", "id:elisp", Some("Elisp")),
        ])]),
    ]);
    let expected = "#+TITLE: Doc\n\
                    :PROPERTIES:\n\
                    :ID: doc-1\n\
                    :FLAG:\n\
                    :END:\n\
                    * One\n\
                    see [[id:elisp][Elisp]]\n\n";
    assert_eq!(write_org(&tree), expected);
}

#[test]
fn test_parse_write_parse_is_a_fixpoint() {
    let input = "#+TITLE: Round trip\n\
                 #+FILETAGS: :a:b:\n\
                 :PROPERTIES:\n\
                 :ID: rt-1\n\
                 :PUBLISHED: yes\n\
                 :END:\n\
                 \n\
                 Intro prose with [[https://ya.ru][yandex]] inline.\n\
                 \n\
                 * First\n\
                 [[file:img.png]]\n\
                 \n\
                 ** Second\n\
                 tail prose\n";
    let once = parse_org(input);
    let twice = parse_org(&write_org(&once));
    assert_eq!(once, twice);
}

#[test]
fn test_raw_nodes_round_trip() {
    let tree = document(vec![section(vec![drawer(vec![raw("!!opaque line")])])]);
    let rewritten = parse_org(&write_org(&tree));
    assert_eq!(rewritten, tree);
}
