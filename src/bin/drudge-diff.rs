//! drudge-diff: compare two text files into an HTML report
//!
//! ## Usage
//!
//! ```bash
//! # Report lands beside the first file as report_draft_diff.html
//! drudge-diff data/report.txt data/draft.txt
//!
//! # Pick the output location yourself
//! drudge-diff old.csv new.csv -o /tmp/changes.html
//! ```
//!
//! The report is a single self-contained file: a side-by-side table with
//! changed rows highlighted, ready to open in any browser or attach to an
//! email.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "drudge-diff")]
#[command(version)]
#[command(about = "Compare two text files into a side-by-side HTML report")]
struct Args {
    /// File on the left side of the report
    from: PathBuf,

    /// File on the right side of the report
    to: PathBuf,

    /// Where to write the report
    ///
    /// Defaults to `<from-stem>_<to-stem>_diff.html` next to FROM.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        eprintln!(
            "🔍 Comparing {} against {}",
            args.from.display(),
            args.to.display()
        );
    }

    let report = drudge::diff::write_report(&args.from, &args.to, args.output.as_deref())?;

    if args.verbose {
        eprintln!("✓ Report written");
    }
    println!("{}", report.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_two_files() {
        let args = Args::parse_from(["drudge-diff", "a.txt", "b.txt"]);
        assert_eq!(args.from, PathBuf::from("a.txt"));
        assert_eq!(args.to, PathBuf::from("b.txt"));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_args_parse_output_override() {
        let args = Args::parse_from(["drudge-diff", "a.txt", "b.txt", "-o", "out.html"]);
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
    }
}
