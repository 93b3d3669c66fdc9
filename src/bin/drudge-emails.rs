//! drudge-emails: pull email addresses out of a CSV export
//!
//! ## Usage
//!
//! ```bash
//! # Every address anywhere in the file, one per line
//! drudge-emails contacts.csv
//!
//! # Only school addresses, wherever the column ended up this week
//! drudge-emails contacts.csv -d hackney.sch.uk -d camden.sch.uk
//!
//! # Bring your own pattern
//! drudge-emails log.csv --pattern '[0-9]{11}'
//! ```
//!
//! Matches print in file order with duplicates kept, so `sort | uniq -c`
//! gives occurrence counts for free. No matches is a clean empty run,
//! not an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;

use drudge::extract;

#[derive(Parser)]
#[command(name = "drudge-emails")]
#[command(version)]
#[command(about = "Extract email addresses from a CSV file")]
struct Args {
    /// CSV file to scan
    ///
    /// Every field of every row is searched; no column layout or header
    /// row is assumed.
    file: PathBuf,

    /// Keep only addresses under this domain (can be repeated)
    ///
    /// Matches the domain itself and its subdomains, case-insensitively.
    /// Examples:
    ///   -d camden.sch.uk
    ///   -d hackney.sch.uk -d camden.sch.uk
    #[arg(short = 'd', long = "domain", value_name = "SUFFIX")]
    domains: Vec<String>,

    /// Override the address pattern with a custom regex
    ///
    /// The domain filter still applies afterwards, so only use both when
    /// the custom pattern also matches user@domain shapes.
    #[arg(long, value_name = "REGEX")]
    pattern: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let pattern = match &args.pattern {
        Some(source) => {
            Regex::new(source).with_context(|| format!("invalid pattern {source:?}"))?
        }
        None => extract::email_pattern().clone(),
    };

    if args.verbose {
        eprintln!("📄 Scanning: {}", args.file.display());
        if !args.domains.is_empty() {
            eprintln!("🔎 Domains: {}", args.domains.join(", "));
        }
    }

    let matches = extract::extract_from_csv(&args.file, &pattern, &args.domains)?;

    if args.verbose {
        eprintln!("✓ Found {} match(es)", matches.len());
    }
    for found in &matches {
        println!("{found}");
    }

    Ok(())
}
