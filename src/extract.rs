//! Email address extraction from plain text and CSV files.
//!
//! Extraction is two stage: a general address pattern finds candidates,
//! then an optional domain-suffix filter narrows them. Keeping the filter
//! out of the regex makes the suffix list user-configurable without
//! anyone hand-editing an alternation.

use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// General address shape. Cached as static to avoid recompilation.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("Invalid email regex")
});

/// The default address pattern, for callers that want to reuse it.
pub fn email_pattern() -> &'static Regex {
    &EMAIL
}

/// Every match of `pattern` in `text`, in order of appearance. Duplicates
/// are kept so occurrence counts stay meaningful.
pub fn find_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every address-shaped match in `text`.
pub fn find_emails(text: &str) -> Vec<String> {
    find_matches(email_pattern(), text)
}

/// Keep only addresses whose domain equals one of `suffixes` or sits under
/// it as a subdomain. Comparison is case-insensitive and a leading dot on a
/// suffix is accepted. An empty suffix list keeps everything.
pub fn filter_by_domain(addresses: Vec<String>, suffixes: &[String]) -> Vec<String> {
    if suffixes.is_empty() {
        return addresses;
    }
    addresses
        .into_iter()
        .filter(|addr| match addr.split_once('@') {
            Some((_, domain)) => suffixes.iter().any(|s| domain_matches(domain, s)),
            None => false,
        })
        .collect()
}

/// Suffix match on whole labels, so `camden.sch.uk` accepts
/// `mail.camden.sch.uk` but not `notcamden.sch.uk`.
fn domain_matches(domain: &str, suffix: &str) -> bool {
    let domain = domain.to_ascii_lowercase();
    let suffix = suffix.trim_start_matches('.').to_ascii_lowercase();
    domain == suffix || domain.ends_with(&format!(".{suffix}"))
}

/// Scan a CSV file for addresses matching `pattern`, filtered by domain.
///
/// Rows are rejoined with commas and scanned whole, so no column layout is
/// assumed. The reader is flexible about ragged rows and treats the first
/// row as data, not headers. Finding nothing is an empty result, not an
/// error.
pub fn extract_from_csv(path: &Path, pattern: &Regex, suffixes: &[String]) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut found = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to read a row of {}", path.display()))?;
        let row = record.iter().collect::<Vec<_>>().join(",");
        found.extend(find_matches(pattern, &row));
    }
    Ok(filter_by_domain(found, suffixes))
}
