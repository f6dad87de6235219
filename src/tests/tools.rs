//! Tests for value normalization and filename helpers.

use crate::tools::{
    file_name_contains_uuid, is_image_path, is_org_file, is_true, normalize_org_value,
    normalize_string_value, split_filetags, uniquify_file_name, OrgValue,
};
use test_log::test;
use uuid::Uuid;

#[test]
fn test_normalize_string_value() {
    assert_eq!(normalize_string_value("  TrUe  "), "true");
    assert_eq!(normalize_string_value("\tYes\n"), "yes");
    assert_eq!(normalize_string_value(""), "");
}

#[test]
fn test_is_true() {
    assert!(is_true("yes"));
    assert!(is_true("true"));
    assert!(is_true("  true  "));
    assert!(is_true("YES"));
    assert!(!is_true("yes some text"));
    assert!(!is_true(""));
    assert!(!is_true("1"));
    assert!(!is_true("no"));
}

#[test]
fn test_normalize_org_value() {
    assert_eq!(normalize_org_value(" True "), OrgValue::Bool(true));
    assert_eq!(normalize_org_value("false"), OrgValue::Bool(false));
    assert_eq!(normalize_org_value("42"), OrgValue::Number(42.0));
    assert_eq!(normalize_org_value(" -1.5 "), OrgValue::Number(-1.5));
    assert_eq!(
        normalize_org_value("yes"),
        OrgValue::Text("yes".to_string())
    );
    assert_eq!(normalize_org_value(""), OrgValue::Text("".to_string()));
}

#[test]
fn test_split_filetags() {
    assert_eq!(split_filetags(":tag1:tag2:"), vec!["tag1", "tag2"]);
    assert_eq!(
        split_filetags(":tag 1:tag 2 and spaces:tag 3:"),
        vec!["tag 1", "tag 2 and spaces", "tag 3"]
    );
    assert_eq!(split_filetags("a::b"), vec!["a", "b"]);
    assert!(split_filetags("::").is_empty());
    assert!(split_filetags("").is_empty());
}

#[test]
fn test_is_image_path() {
    for path in [
        "a.gif", "a.svg", "a.jpg", "b.jpeg", "a.tif", "a.tiff", "a.png", "a.webp", "a.bmp",
        "shots/a.PNG", "a.JpEg",
    ] {
        assert!(is_image_path(path), "{path} should be an image");
    }
    for path in ["a.pdf", "a.org", "png", "a.png.txt", ""] {
        assert!(!is_image_path(path), "{path} should not be an image");
    }
}

#[test]
fn test_uniquify_file_name() {
    assert_eq!(uniquify_file_name("img.png", "u-1"), "img-u-1.png");
    assert_eq!(
        uniquify_file_name("img.old.png", "u-1"),
        "img.old-u-1.png"
    );
    assert_eq!(uniquify_file_name("Makefile", "u-1"), "Makefile-u-1");
}

#[test]
fn test_file_name_contains_uuid_recognizes_generated_names() {
    let unique = Uuid::new_v4().to_string();
    let renamed = uniquify_file_name("img.png", &unique);
    assert!(file_name_contains_uuid(&renamed));
    assert!(file_name_contains_uuid(&format!("shots/{renamed}")));
}

#[test]
fn test_file_name_contains_uuid_negatives() {
    assert!(!file_name_contains_uuid("img.png"));
    assert!(!file_name_contains_uuid("deadbeef.png"));
    // The UUID must sit in the final path component.
    let unique = Uuid::new_v4().to_string();
    assert!(!file_name_contains_uuid(&format!("{unique}/img.png")));
}

#[test]
fn test_is_org_file() {
    assert!(is_org_file("notes.org"));
    assert!(is_org_file("dir/notes.org"));
    assert!(!is_org_file("notes.org.bak"));
    assert!(!is_org_file("notes.md"));
}
