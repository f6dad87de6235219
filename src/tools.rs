//! Value normalization and filename helpers shared by the reducer, the
//! middleware, and the directory walk.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static IMAGE_EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(gif|svg|jpe?g|tiff?|png|webp|bmp)$").expect("static regex"));

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("static regex")
});

/// Strip surrounding whitespace and lower-case the value.
pub fn normalize_string_value(val: &str) -> String {
    val.trim().to_lowercase()
}

/// Whether the org value reads as an affirmative.
///
/// Only the exact (normalized) literals `true` and `yes` qualify. Anything
/// else, including `1` and strings merely containing "true", is false.
pub fn is_true(val: &str) -> bool {
    matches!(normalize_string_value(val).as_str(), "true" | "yes")
}

/// A raw org value coerced to its most specific type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrgValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Coerce a raw org value: boolean literals first, then numbers, otherwise
/// the original string untouched.
pub fn normalize_org_value(val: &str) -> OrgValue {
    match normalize_string_value(val).as_str() {
        "true" => return OrgValue::Bool(true),
        "false" => return OrgValue::Bool(false),
        _ => {}
    }
    let trimmed = val.trim();
    if !trimmed.is_empty() {
        if let Ok(num) = trimmed.parse::<f64>() {
            return OrgValue::Number(num);
        }
    }
    OrgValue::Text(val.to_string())
}

/// Split a `#+FILETAGS:` value on `:`, dropping empty segments so leading,
/// trailing, and doubled colons do not produce empty tags. Interior spaces in
/// tag names are preserved.
pub fn split_filetags(value: &str) -> Vec<String> {
    value
        .split(':')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether the path ends in a recognized image extension.
pub fn is_image_path(path: &str) -> bool {
    IMAGE_EXTENSION_RE.is_match(path)
}

/// Insert `unique_id` into the file name, before the extension when there is
/// one, suffixed otherwise.
pub fn uniquify_file_name(path: &str, unique_id: &str) -> String {
    match path.rsplit_once('.') {
        Some((stem, extension)) => format!("{stem}-{unique_id}.{extension}"),
        None => format!("{path}-{unique_id}"),
    }
}

/// Whether the final path component already carries a UUID-shaped substring.
///
/// Recognizes the suffixes produced by [`uniquify_file_name`] so renaming is
/// idempotent.
pub fn file_name_contains_uuid(file_name: &str) -> bool {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    UUID_RE.is_match(base)
}

/// Whether the file name carries the org document suffix.
pub fn is_org_file(file_name: &str) -> bool {
    file_name.ends_with(".org")
}
