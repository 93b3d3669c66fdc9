//! Demo of the tree walker on the current directory.

use drudge::{walk, ExclusionSet};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cwd = Path::new(".");

    println!("🌳 Walking the current directory...\n");

    let excluded: ExclusionSet = [".git", "target"].into_iter().collect();
    let entries: Vec<_> = walk(cwd, excluded.clone())?.collect();

    println!("✓ Walked {} entries\n", entries.len());

    println!("First 15 lines:");
    for entry in entries.iter().take(15) {
        println!("  {}", drudge::line(entry));
    }
    if entries.len() > 15 {
        println!("  ... and {} more", entries.len() - 15);
    }

    // Verify pruning is working
    println!("\n🔒 Exclusion verification:");
    let deepest = entries.iter().map(|e| e.depth).max().unwrap_or(0);
    let pruned = entries
        .iter()
        .filter(|e| e.kind.is_dir() && excluded.excludes(&e.name))
        .count();
    println!("  Deepest level: {}", deepest);
    println!("  Subtrees pruned: {}", pruned);
    println!("  Nothing under a pruned directory: {}", verify_pruned(&entries, &excluded));

    Ok(())
}

/// No entry's path may pass through an excluded directory name.
fn verify_pruned(entries: &[drudge::TreeEntry], excluded: &ExclusionSet) -> bool {
    entries.iter().all(|entry| {
        entry
            .path
            .components()
            .take(entry.path.components().count().saturating_sub(1))
            .all(|part| !excluded.excludes(&part.as_os_str().to_string_lossy()))
    })
}
