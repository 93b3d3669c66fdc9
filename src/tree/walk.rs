//! Explicit-stack directory traversal.
//!
//! The walker keeps one [`Frame`] per directory currently being listed, so
//! traversal depth costs heap instead of native stack and a pathological
//! nesting depth cannot overflow. Entries come out lazily: nothing below a
//! directory is read until the walker reaches it, and a dropped walker does
//! no further filesystem work.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::TreeError;
use crate::types::{EntryKind, ExclusionSet, TreeEntry};

use super::render::{BRANCH, SPACE};

/// Start a lazy pre-order walk of the contents of `root`.
///
/// The root directory itself is not yielded; the first entry is its first
/// child. Listing the root eagerly means an unusable root (missing, a plain
/// file, unreadable) fails here rather than on the first `next()` call.
pub fn walk(root: impl AsRef<Path>, excluded: ExclusionSet) -> Result<TreeWalker, TreeError> {
    let root = root.as_ref();
    let children = list_children(root).map_err(|e| TreeError::from_io(root, e))?;
    Ok(TreeWalker {
        stack: vec![Frame::new(children, String::new())],
        excluded,
    })
}

/// Lazy pre-order iterator over [`TreeEntry`] values.
///
/// Built by [`walk`]. Each `next()` call yields the next entry in display
/// order; directories that fail to list mid-walk come back flagged via
/// [`TreeEntry::error`] and their subtree is skipped, so one unreadable
/// branch never aborts the walk.
#[derive(Debug)]
pub struct TreeWalker {
    stack: Vec<Frame>,
    excluded: ExclusionSet,
}

/// One directory in progress: its sorted children, a cursor into them, and
/// the prefix every line at this depth starts with.
#[derive(Debug)]
struct Frame {
    children: Vec<Child>,
    next: usize,
    prefix: String,
}

impl Frame {
    fn new(children: Vec<Child>, prefix: String) -> Self {
        Self {
            children,
            next: 0,
            prefix,
        }
    }
}

/// A listed child that has not been yielded yet.
#[derive(Debug, Clone)]
struct Child {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    error: Option<String>,
}

impl Iterator for TreeWalker {
    type Item = TreeEntry;

    fn next(&mut self) -> Option<TreeEntry> {
        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;
            if frame.next == frame.children.len() {
                self.stack.pop();
                continue;
            }

            let child = frame.children[frame.next].clone();
            frame.next += 1;
            let is_last = frame.next == frame.children.len();
            let prefix = frame.prefix.clone();

            let mut error = child.error;
            let mut descend = None;
            if child.kind.is_dir() && !self.excluded.excludes(&child.name) {
                match list_children(&child.path) {
                    Ok(children) => {
                        let filler = if is_last { SPACE } else { BRANCH };
                        descend = Some(Frame::new(children, format!("{prefix}{filler}")));
                    }
                    // Flag the branch and keep walking its siblings.
                    Err(e) => error = Some(flag_label(&e).to_string()),
                }
            }
            if let Some(frame) = descend {
                self.stack.push(frame);
            }

            return Some(TreeEntry {
                name: child.name,
                path: child.path,
                kind: child.kind,
                depth,
                is_last,
                prefix,
                error,
            });
        }
    }
}

/// List a directory's immediate children, sorted by display name.
///
/// `read_dir` order is platform-dependent; sorting keeps repeated walks of
/// an unchanged tree identical. Symlinks are not followed, so a link to a
/// directory counts as a file and is never descended into.
fn list_children(dir: &Path) -> io::Result<Vec<Child>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        let (kind, error) = match entry.file_type() {
            Ok(kind) if kind.is_dir() => (EntryKind::Dir, None),
            Ok(_) => (EntryKind::File, None),
            Err(e) => (EntryKind::File, Some(flag_label(&e).to_string())),
        };
        children.push(Child {
            name,
            path,
            kind,
            error,
        });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

/// Short label attached to an entry whose subtree could not be listed.
fn flag_label(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "not found",
        io::ErrorKind::PermissionDenied => "permission denied",
        _ => "unreadable",
    }
}
