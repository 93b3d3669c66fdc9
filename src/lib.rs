//! drudge - small automations for boring filesystem chores
//!
//! Three chores, one crate: draw a directory tree with subtrees you do not
//! care about pruned, compare two text files into an HTML report, and pull
//! email addresses out of CSV exports.
//!
//! # Architecture
//!
//! ```text
//! Config → Tree Walk → Line Rendering
//!    ↓         ↓             ↓
//!  toml    explicit       connector
//!  file     stack          glyphs
//! ```
//!
//! The tree walk is the structural heart: lazy, pre-order, one heap frame
//! per open directory, exclusions applied by display name at every depth.

pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod tree;
pub mod types;

// Re-export core types
pub use error::TreeError;
pub use tree::{line, render, walk, Lines, TreeWalker, BRANCH, LAST, SPACE, TEE};
pub use types::{EntryKind, ExclusionSet, TreeEntry};
