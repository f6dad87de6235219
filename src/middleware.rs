//! Node-rewriting middleware.
//!
//! A middleware is applied to every visited node before its kind-specific
//! handler runs, and must hand back a node for the rewritten tree: either the
//! input unchanged or a replacement. Chains compose left to right into a
//! single effective transform; the empty chain is the identity.
//!
//! The one middleware shipped here, [`image_rename_middleware`], gives
//! referenced image files collision-proof names on disk while the containing
//! document is being collected, rewriting the link node to match.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use uuid::Uuid;

use crate::{
    error::OrgnoteError,
    org::{LinkType, OrgNode},
    tools::{file_name_contains_uuid, is_image_path, uniquify_file_name},
};

/// A node transform applied ahead of handler dispatch.
///
/// Middleware that only cares about some node kinds must pass every other
/// kind through unchanged. Infallible transforms simply wrap their result in
/// `Ok`; errors abort the traversal and surface from
/// [`collect_note`](crate::collect::collect_note).
pub type NodeMiddleware = Box<dyn Fn(OrgNode) -> Result<OrgNode, OrgnoteError> + Send + Sync>;

/// Source of unique filename suffixes, injected so renames are deterministic
/// under test.
pub type UniqueIdSource = Arc<dyn Fn() -> String + Send + Sync>;

/// An ordered middleware chain composed into one transform.
pub(crate) struct MiddlewareChain<'a>(&'a [NodeMiddleware]);

impl<'a> MiddlewareChain<'a> {
    pub(crate) fn new(chain: &'a [NodeMiddleware]) -> Self {
        MiddlewareChain(chain)
    }

    /// Feed the node through each middleware in order, threading each
    /// returned node into the next.
    pub(crate) fn apply(&self, node: OrgNode) -> Result<OrgNode, OrgnoteError> {
        self.0
            .iter()
            .try_fold(node, |node, middleware| middleware(node))
    }
}

/// Fresh random v4 UUIDs, the production id source.
pub fn uuid_source() -> UniqueIdSource {
    Arc::new(|| Uuid::new_v4().to_string())
}

/// Rename referenced images under `dir` to unique names while collecting.
pub fn image_rename_middleware(dir: impl AsRef<Path>) -> NodeMiddleware {
    image_rename_middleware_with(dir, uuid_source())
}

/// [`image_rename_middleware`] with an explicit id source.
///
/// No-ops for anything that is not a file link to an image, for names that
/// already carry a UUID-shaped substring, and for targets missing under
/// `dir`. Otherwise renames the file on disk and rewrites the node's `path`
/// and `raw_link` to the new name. A rename that loses the race against the
/// existence check is swallowed; any other filesystem failure propagates.
pub fn image_rename_middleware_with(dir: impl AsRef<Path>, ids: UniqueIdSource) -> NodeMiddleware {
    let dir: PathBuf = dir.as_ref().to_path_buf();
    Box::new(move |node| match node {
        OrgNode::Link {
            link_type: LinkType::File,
            path,
            raw_link,
            children,
        } if is_image_path(&path) && !file_name_contains_uuid(&path) => {
            let source = dir.join(&path);
            if !source.exists() {
                return Ok(OrgNode::Link {
                    link_type: LinkType::File,
                    path,
                    raw_link,
                    children,
                });
            }
            let renamed = uniquify_file_name(&path, &ids());
            match fs::rename(&source, dir.join(&renamed)) {
                Ok(()) => {
                    tracing::debug!("Renamed image {:?} -> {}", source, renamed);
                    Ok(OrgNode::Link {
                        link_type: LinkType::File,
                        path: renamed.clone(),
                        raw_link: renamed,
                        children,
                    })
                }
                // The existence check above races against other writers. A
                // source that vanished in between is the same no-op as one
                // that was never there.
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(OrgNode::Link {
                    link_type: LinkType::File,
                    path,
                    raw_link,
                    children,
                }),
                Err(e) => Err(e.into()),
            }
        }
        other => Ok(other),
    })
}
