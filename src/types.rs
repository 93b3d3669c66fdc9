//! Core types for drudge's tree traversal.
//!
//! Key design decisions:
//! - Entries are transient: produced per traversal, never cached or mutated
//! - Display names are lossy UTF-8 of the final path segment (what gets
//!   printed and what exclusion matches against)
//! - The prefix is carried on the entry itself, so a line can be assembled
//!   without re-walking ancestors

use std::collections::HashSet;
use std::path::PathBuf;

/// What kind of filesystem object an entry is.
///
/// Symlinks are deliberately not a third kind: the walker never follows
/// them, so they behave as leaves and classify as `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Dir)
    }
}

/// One filesystem entry encountered during a tree walk.
///
/// Everything needed to draw the entry's line is on the entry: the
/// accumulated prefix for its depth, whether it is the last sibling (which
/// selects the connector glyph), and an error flag when the entry is a
/// directory whose contents could not be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Display name (final path segment only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// File or directory.
    pub kind: EntryKind,
    /// Nesting depth (1 = direct child of the walk root).
    pub depth: usize,
    /// Whether this entry is the last sibling in its parent's listing.
    pub is_last: bool,
    /// Accumulated branch/blank filler for this depth.
    pub prefix: String,
    /// Why this subtree could not be read, if it could not be.
    /// The entry itself is still listed; nothing is emitted beneath it.
    pub error: Option<String>,
}

/// Directory names whose subtrees are pruned from the walk.
///
/// Matching is by exact display name, not path, so a name listed here is
/// excluded at every depth where it occurs. A matched directory still gets
/// its own line; the walker just never descends into it. The set is fixed
/// for the duration of one walk.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a display name is excluded.
    pub fn excludes(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
