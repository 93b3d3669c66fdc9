//! Directory tree traversal and rendering.
//!
//! `walk` yields entries lazily in pre-order; `render` maps them to
//! prefix-decorated display lines. Exclusion prunes subtrees without
//! hiding the pruned directory's own line.

mod render;
mod walk;

pub use render::{line, render, Lines, BRANCH, LAST, SPACE, TEE};
pub use walk::{walk, TreeWalker};
