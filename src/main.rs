//! drudge CLI - directory trees with the boring parts pruned
//!
//! This is the command-line entry point for drudge's flagship chore:
//! listing a directory as an ASCII tree. The flow is short:
//!
//! 1. Config: merge drudge.toml exclusions with -x flags
//! 2. Walk: lazy pre-order traversal on an explicit stack
//! 3. Print: one line per entry, streamed as the walk yields it
//!
//! Design philosophy:
//! - Stream, never buffer (huge trees start printing immediately)
//! - A broken root fails loudly; a broken branch gets flagged inline
//! - Make defaults sane (--color=true, .git pruned out of the box)
//! - Verbose mode goes to stderr so stdout stays pipeable

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// List a directory as an ASCII tree with pruned subtrees
///
/// drudge walks a directory lazily and prints one line per entry, using
/// the familiar tee and elbow connectors. Excluded names (.git and
/// .Rproj.user by default, more via drudge.toml or -x) stay visible as
/// a single line while everything under them is skipped.
///
/// Examples:
///   drudge                        # Tree of the current directory
///   drudge ~/projects/site        # Tree of a specific directory
///   drudge -x target -x dist      # Prune build output too
///   drudge --stats --no-color     # Plain output with a summary footer
#[derive(Parser, Debug)]
#[command(name = "drudge")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Directory to list
    ///
    /// The tree shows this directory's contents; the root itself gets
    /// no line. Defaults to the current directory.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Exclude entries by exact name (can be repeated)
    ///
    /// An excluded directory still appears in the listing but nothing
    /// under it does. Matching is by display name at every depth, so
    /// -x .git prunes every .git in the tree. Examples:
    ///   -x target
    ///   -x node_modules -x dist
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Enable colored output
    ///
    /// Directory names are tinted so structure stands out at a glance.
    /// Disable with --no-color for piping to files.
    #[arg(long, default_value = "true")]
    pub color: bool,

    /// Disable colored output
    ///
    /// Equivalent to --color=false. Useful for piping to files or
    /// diffing two listings.
    #[arg(long)]
    pub no_color: bool,

    /// Show statistics
    ///
    /// Prints a footer after the tree:
    ///   - Directories and files listed
    ///   - Subtrees pruned by exclusion
    ///   - Branches flagged unreadable
    ///   - Time taken
    #[arg(long)]
    pub stats: bool,

    /// Verbose output
    ///
    /// Shows progress messages on stderr:
    ///   "Listing: /path/to/root"
    ///   "Excluding: .git, .Rproj.user"
    ///
    /// stdout still carries only the tree itself.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

/// Execute the tree listing.
///
/// Lines go to stdout one at a time as the walker yields them, so output
/// starts before large trees finish reading. Only a root that cannot be
/// listed at all turns into an error here; trouble below the root rides
/// along inline on the affected entry's line.
fn run(cli: &Cli) -> Result<()> {
    use drudge::config::Config;
    use std::time::Instant;

    let start = Instant::now();

    // --no-color overrides --color
    let use_color = cli.color && !cli.no_color;

    let config = Config::load(&cli.root);
    let excluded = config.exclusion_set(&cli.exclude);

    if cli.verbose {
        eprintln!("🌳 drudge v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Listing: {}", cli.root.display());
        eprintln!("{}", config.display_summary());
    }

    let mut tally = RunStats::default();
    for entry in drudge::walk(&cli.root, excluded.clone())? {
        tally.record(&entry, &excluded);
        if use_color {
            println!("{}", colored_line(&entry));
        } else {
            println!("{}", drudge::line(&entry));
        }
    }

    if cli.verbose {
        eprintln!(
            "✓ Listed {} entries ({:.2?})",
            tally.directories + tally.files,
            start.elapsed()
        );
        if tally.flagged > 0 {
            eprintln!("⚠️  {} branch(es) could not be read", tally.flagged);
        }
    }

    if cli.stats {
        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("## Statistics");
        println!("Directories: {}", tally.directories);
        println!("Files: {}", tally.files);
        println!("Subtrees pruned: {}", tally.pruned);
        println!("Branches flagged: {}", tally.flagged);
        println!("Total time: {:.2?}", start.elapsed());
    }

    Ok(())
}

/// Counters for the --stats footer.
#[derive(Debug, Default)]
struct RunStats {
    directories: usize,
    files: usize,
    pruned: usize,
    flagged: usize,
}

impl RunStats {
    fn record(&mut self, entry: &drudge::TreeEntry, excluded: &drudge::ExclusionSet) {
        match entry.kind {
            drudge::EntryKind::Dir => {
                self.directories += 1;
                if excluded.excludes(&entry.name) {
                    self.pruned += 1;
                }
            }
            drudge::EntryKind::File => self.files += 1,
        }
        if entry.error.is_some() {
            self.flagged += 1;
        }
    }
}

/// Assemble a line with the directory-name accent applied. Files and the
/// error flag stay uncolored so the tint marks structure only.
fn colored_line(entry: &drudge::TreeEntry) -> String {
    use owo_colors::OwoColorize;

    if !entry.kind.is_dir() {
        return drudge::line(entry);
    }
    let connector = if entry.is_last {
        drudge::LAST
    } else {
        drudge::TEE
    };
    let name = entry.name.bright_blue().bold().to_string();
    match &entry.error {
        Some(what) => format!("{}{}{} [error: {}]", entry.prefix, connector, name, what),
        None => format!("{}{}{}", entry.prefix, connector, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drudge::{EntryKind, ExclusionSet, TreeEntry};
    use std::fs;

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::parse_from(["drudge"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.exclude.is_empty());
        assert!(cli.color);
        assert!(!cli.no_color);
        assert!(!cli.stats);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_root_positional() {
        let cli = Cli::parse_from(["drudge", "/tmp/somewhere"]);
        assert_eq!(cli.root, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn test_cli_parse_repeated_excludes() {
        let cli = Cli::parse_from(["drudge", "-x", "target", "--exclude", "dist"]);
        assert_eq!(cli.exclude, vec!["target", "dist"]);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["drudge", "--stats", "--verbose", "--no-color"]);
        assert!(cli.stats);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    fn entry(name: &str, kind: EntryKind, error: Option<&str>) -> TreeEntry {
        TreeEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            kind,
            depth: 1,
            is_last: true,
            prefix: String::new(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_run_stats_counts_kinds_and_flags() {
        let excluded: ExclusionSet = [".git"].into_iter().collect();
        let mut tally = RunStats::default();
        tally.record(&entry("src", EntryKind::Dir, None), &excluded);
        tally.record(&entry(".git", EntryKind::Dir, None), &excluded);
        tally.record(&entry("a.txt", EntryKind::File, None), &excluded);
        tally.record(&entry("locked", EntryKind::Dir, Some("permission denied")), &excluded);

        assert_eq!(tally.directories, 3);
        assert_eq!(tally.files, 1);
        assert_eq!(tally.pruned, 1);
        assert_eq!(tally.flagged, 1);
    }

    #[test]
    fn test_colored_line_leaves_files_plain() {
        let plain = entry("a.txt", EntryKind::File, None);
        assert_eq!(colored_line(&plain), drudge::line(&plain));
    }

    #[test]
    fn test_colored_line_keeps_connector_and_flag() {
        let dir = entry("locked", EntryKind::Dir, Some("permission denied"));
        let line = colored_line(&dir);
        assert!(line.starts_with("└── "));
        assert!(line.contains("locked"));
        assert!(line.ends_with("[error: permission denied]"));
    }

    #[test]
    fn test_run_on_small_fixture() -> Result<()> {
        let root = std::env::temp_dir().join("drudge_test_cli_run");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("x"))?;
        fs::write(root.join("x").join("y.txt"), b"")?;
        fs::write(root.join("z.txt"), b"")?;

        let cli = Cli {
            root: root.clone(),
            exclude: vec![],
            color: true,
            no_color: true,
            stats: true,
            verbose: false,
        };
        run(&cli)?;

        fs::remove_dir_all(&root)?;
        Ok(())
    }

    #[test]
    fn test_run_fails_on_missing_root() {
        let root = std::env::temp_dir().join("drudge_test_cli_missing_root");
        let _ = fs::remove_dir_all(&root);

        let cli = Cli {
            root,
            exclude: vec![],
            color: false,
            no_color: true,
            stats: false,
            verbose: false,
        };
        assert!(run(&cli).is_err());
    }
}
