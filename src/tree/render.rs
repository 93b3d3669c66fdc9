//! Connector glyphs and line assembly.

use std::path::Path;

use crate::error::TreeError;
use crate::types::{ExclusionSet, TreeEntry};

use super::walk::{walk, TreeWalker};

/// Connector for a sibling with more siblings after it.
pub const TEE: &str = "├── ";
/// Connector for the final sibling of its directory.
pub const LAST: &str = "└── ";
/// Prefix filler below an entry drawn with [`TEE`]: the vertical bar keeps
/// the parent's branch line running past the subtree.
pub const BRANCH: &str = "│   ";
/// Prefix filler below an entry drawn with [`LAST`]: four plain spaces.
pub const SPACE: &str = "    ";

/// Render the tree under `root` as a lazy sequence of display lines.
///
/// Line production tracks the walk one to one, so printing can start before
/// the filesystem has been fully read. Errors below the root surface inline
/// on the affected entry's line; only an unusable root fails the call.
pub fn render(root: impl AsRef<Path>, excluded: ExclusionSet) -> Result<Lines, TreeError> {
    Ok(Lines {
        inner: walk(root, excluded)?,
    })
}

/// Lazy line iterator returned by [`render`].
#[derive(Debug)]
pub struct Lines {
    inner: TreeWalker,
}

impl Iterator for Lines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|entry| line(&entry))
    }
}

/// Assemble one display line: prefix, connector, name, and the error flag
/// when the entry's subtree could not be listed.
pub fn line(entry: &TreeEntry) -> String {
    let connector = if entry.is_last { LAST } else { TEE };
    match &entry.error {
        Some(what) => format!("{}{}{} [error: {}]", entry.prefix, connector, entry.name, what),
        None => format!("{}{}{}", entry.prefix, connector, entry.name),
    }
}
