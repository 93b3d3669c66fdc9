//! Side-by-side file comparison rendered as a standalone HTML report.
//!
//! The alignment uses the classic longest-common-subsequence approach:
//! lines in the LCS are unchanged, gaps between matches pair off as
//! replacements, and leftovers on either side become deletions or
//! insertions. The report is a single self-contained HTML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// How one aligned row differs between the two files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Unchanged,
    Replaced,
    Inserted,
    Deleted,
}

/// One row of the side-by-side table. A missing side means the row exists
/// only in the other file. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub kind: RowKind,
    pub left: Option<(usize, String)>,
    pub right: Option<(usize, String)>,
}

/// Align two texts line by line into display rows.
pub fn diff_rows(from: &str, to: &str) -> Vec<DiffRow> {
    let from_lines: Vec<&str> = from.lines().collect();
    let to_lines: Vec<&str> = to.lines().collect();

    let lcs = longest_common_subsequence(&from_lines, &to_lines);

    let mut rows = Vec::new();
    let mut i = 0;
    let mut j = 0;
    for m in &lcs {
        push_changed(&mut rows, &from_lines, &to_lines, i..m.from_idx, j..m.to_idx);
        rows.push(DiffRow {
            kind: RowKind::Unchanged,
            left: Some((m.from_idx + 1, from_lines[m.from_idx].to_string())),
            right: Some((m.to_idx + 1, to_lines[m.to_idx].to_string())),
        });
        i = m.from_idx + 1;
        j = m.to_idx + 1;
    }
    push_changed(
        &mut rows,
        &from_lines,
        &to_lines,
        i..from_lines.len(),
        j..to_lines.len(),
    );
    rows
}

/// A match between line indices in the two files.
#[derive(Debug, Clone, Copy)]
struct LineMatch {
    from_idx: usize,
    to_idx: usize,
}

/// Standard LCS dynamic program over whole lines, backtracked into the
/// actual sequence of matches.
fn longest_common_subsequence(from: &[&str], to: &[&str]) -> Vec<LineMatch> {
    let n = from.len();
    let m = to.len();
    if n == 0 || m == 0 {
        return vec![];
    }

    // dp[i][j] = LCS length of from[0..i] and to[0..j]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            if from[i - 1] == to[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    let mut matches = Vec::new();
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if from[i - 1] == to[j - 1] {
            matches.push(LineMatch {
                from_idx: i - 1,
                to_idx: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    matches.reverse();
    matches
}

/// Emit rows for one gap between LCS matches. Unmatched lines pair off as
/// replacements while both sides have some; the longer side's tail becomes
/// pure deletions or insertions.
fn push_changed(
    rows: &mut Vec<DiffRow>,
    from_lines: &[&str],
    to_lines: &[&str],
    from_range: std::ops::Range<usize>,
    to_range: std::ops::Range<usize>,
) {
    let mut i = from_range.start;
    let mut j = to_range.start;
    while i < from_range.end && j < to_range.end {
        rows.push(DiffRow {
            kind: RowKind::Replaced,
            left: Some((i + 1, from_lines[i].to_string())),
            right: Some((j + 1, to_lines[j].to_string())),
        });
        i += 1;
        j += 1;
    }
    while i < from_range.end {
        rows.push(DiffRow {
            kind: RowKind::Deleted,
            left: Some((i + 1, from_lines[i].to_string())),
            right: None,
        });
        i += 1;
    }
    while j < to_range.end {
        rows.push(DiffRow {
            kind: RowKind::Inserted,
            left: None,
            right: Some((j + 1, to_lines[j].to_string())),
        });
        j += 1;
    }
}

/// Render the comparison of two texts as a complete HTML document.
///
/// Row highlight colors follow the scheme most diff viewers settled on:
/// green for added, yellow for changed, red for removed.
pub fn html_report(from_label: &str, to_label: &str, from_text: &str, to_text: &str) -> String {
    let rows = diff_rows(from_text, to_text);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} vs {}</title>\n",
        escape(from_label),
        escape(to_label)
    ));
    html.push_str(concat!(
        "<style>\n",
        "body {font-family:Consolas,'Courier New',monospace;font-size:13px;margin:16px;}\n",
        "table.diff {border-collapse:collapse;width:100%;}\n",
        "table.diff td {padding:1px 6px;white-space:pre-wrap;vertical-align:top;}\n",
        "td.diff_num {color:#888;text-align:right;border-right:1px solid #ddd;width:3em;}\n",
        "td.diff_add {background-color:#aaffaa;}\n",
        "td.diff_chg {background-color:#ffff77;}\n",
        "td.diff_sub {background-color:#ffaaaa;}\n",
        "th {background-color:#e0e0e0;padding:4px 6px;text-align:left;}\n",
        "</style>\n",
    ));
    html.push_str("</head>\n<body>\n<table class=\"diff\">\n");
    html.push_str(&format!(
        "<tr><th colspan=\"2\">{}</th><th colspan=\"2\">{}</th></tr>\n",
        escape(from_label),
        escape(to_label)
    ));

    for row in &rows {
        let (left_class, right_class) = match row.kind {
            RowKind::Unchanged => ("", ""),
            RowKind::Replaced => (" class=\"diff_chg\"", " class=\"diff_chg\""),
            RowKind::Inserted => ("", " class=\"diff_add\""),
            RowKind::Deleted => (" class=\"diff_sub\"", ""),
        };
        html.push_str("<tr>");
        html.push_str(&side_cells(&row.left, left_class));
        html.push_str(&side_cells(&row.right, right_class));
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Line-number cell plus text cell for one side of a row.
fn side_cells(side: &Option<(usize, String)>, class: &str) -> String {
    match side {
        Some((number, text)) => format!(
            "<td class=\"diff_num\">{number}</td><td{class}>{}</td>",
            escape(text)
        ),
        None => format!("<td class=\"diff_num\"></td><td{class}></td>"),
    }
}

/// Escape HTML special characters character by character.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Default report location: next to the first file, named after both stems.
/// Comparing `data/before.txt` to `data/after.txt` writes
/// `data/before_after_diff.html`.
pub fn report_path(from: &Path, to: &Path) -> PathBuf {
    let stem = |p: &Path| {
        p.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string())
    };
    let name = format!("{}_{}_diff.html", stem(from), stem(to));
    match from.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

/// Compare two files on disk and write the HTML report, returning its path.
/// `output` overrides the default location.
pub fn write_report(from: &Path, to: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let from_text = fs::read_to_string(from)
        .with_context(|| format!("failed to read {}", from.display()))?;
    let to_text =
        fs::read_to_string(to).with_context(|| format!("failed to read {}", to.display()))?;

    let html = html_report(
        &from.display().to_string(),
        &to.display().to_string(),
        &from_text,
        &to_text,
    );
    let path = output.map(Path::to_path_buf).unwrap_or_else(|| report_path(from, to));
    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
