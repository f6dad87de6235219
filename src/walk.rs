//! Directory walk entry points.
//!
//! Enumerates `.org` documents under a root, folds each into a
//! [`Note`](crate::collect::Note), and conventionally binds an image-rename
//! middleware to each file's containing directory. Renames touch the
//! filesystem, so two concurrent walks over the same directory can race on a
//! shared unrenamed image; serializing such walks is the caller's
//! responsibility.

use std::{fs, io, path::Path};

use walkdir::WalkDir;

use crate::{
    collect::{collect_note, Note},
    error::OrgnoteError,
    middleware::{image_rename_middleware, NodeMiddleware},
    parser::parse_org,
    tools::is_org_file,
};

/// Read, parse, and fold a single document.
///
/// Returns `Ok(None)` when the file vanished between enumeration and read;
/// any other read failure propagates.
pub fn collect_note_from_file(
    path: impl AsRef<Path>,
    middleware: &[NodeMiddleware],
) -> Result<Option<Note>, OrgnoteError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("Skipping vanished file {:?}", path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!("Collecting note from {:?}", path);
    let tree = parse_org(&content);
    Ok(Some(collect_note(tree, middleware)?))
}

/// Collect a note from every `.org` file under `dir`, renaming referenced
/// images as they are encountered.
pub fn collect_notes_from_dir(dir: impl AsRef<Path>) -> Result<Vec<Note>, OrgnoteError> {
    collect_notes_from_dir_with(dir, true)
}

/// [`collect_notes_from_dir`] with the image rename step made optional.
pub fn collect_notes_from_dir_with(
    dir: impl AsRef<Path>,
    rename_images: bool,
) -> Result<Vec<Note>, OrgnoteError> {
    let mut notes = Vec::new();
    for entry in WalkDir::new(dir.as_ref()).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_org_file(&entry.path().to_string_lossy()) {
            continue;
        }
        let mut middleware: Vec<NodeMiddleware> = Vec::new();
        if rename_images {
            if let Some(parent) = entry.path().parent() {
                middleware.push(image_rename_middleware(parent));
            }
        }
        if let Some(note) = collect_note_from_file(entry.path(), &middleware)? {
            notes.push(note);
        }
    }
    Ok(notes)
}

/// Like [`collect_notes_from_dir`], keeping only notes that carry an
/// identifier property.
pub fn collect_org_notes_from_dir(dir: impl AsRef<Path>) -> Result<Vec<Note>, OrgnoteError> {
    Ok(collect_notes_from_dir(dir)?
        .into_iter()
        .filter(|note| note.id.is_some())
        .collect())
}
