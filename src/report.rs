use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::classify::{self, Issue};
use crate::sanitize::sanitize_name;

pub const REPORT_FILENAME: &str = "weird_names_report.csv";
const PREVIEW_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

impl EntryKind {
    fn as_str(self) -> &'static str {
        match self {
            EntryKind::Dir => "dir",
            EntryKind::File => "file",
        }
    }
}

// One problematic entry, immutable once collected.
#[derive(Debug)]
pub struct Finding {
    pub kind: EntryKind,
    pub rel_path: PathBuf,
    pub issues: Vec<Issue>,
    pub bad_chars: String,
    pub suggested: String,
}

impl Finding {
    fn issue_labels(&self) -> String {
        self.issues
            .iter()
            .map(|i| i.label())
            .collect::<Vec<_>>()
            .join(";")
    }
}

// Visit every entry below root exactly once and collect the flagged ones.
// The root's own name is not analyzed. Traversal never mutates anything.
pub fn scan(root: &Path) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk: {}", root.display()))?;
        let name = entry.file_name().to_string_lossy();
        let issues = classify::analyze(&name);
        if issues.is_empty() {
            continue;
        }
        let rel_path = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("Failed to compute relative path: {}", entry.path().display()))?
            .to_path_buf();
        let kind = if entry.file_type().is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        let bad_chars = classify::bad_chars(&name);
        let suggested = sanitize_name(&name);
        findings.push(Finding {
            kind,
            rel_path,
            issues,
            bad_chars,
            suggested,
        });
    }
    Ok(findings)
}

// Quote a CSV field only when it needs it; embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_csv(findings: &[Finding]) -> String {
    let mut out = String::from("type,path,issues,bad_chars,suggested_safe_name\n");
    for f in findings {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            f.kind.as_str(),
            csv_field(&f.rel_path.to_string_lossy()),
            csv_field(&f.issue_labels()),
            csv_field(&f.bad_chars),
            csv_field(&f.suggested),
        );
    }
    out
}

// Write the CSV into the current working directory (overwriting any previous
// run) and print the summary plus a bounded preview.
pub fn emit(findings: &[Finding]) -> Result<()> {
    if findings.is_empty() {
        println!("No problematic names detected. You're good to archive/zip.");
        return Ok(());
    }

    let csv_path = std::env::current_dir()
        .context("Failed to resolve current directory")?
        .join(REPORT_FILENAME);
    std::fs::write(&csv_path, render_csv(findings))
        .with_context(|| format!("Failed to write report: {}", csv_path.display()))?;

    println!();
    println!("Found {} problematic items.", findings.len());
    println!("CSV report written to: {}", csv_path.display());
    println!();
    println!("Preview of first {} items:", PREVIEW_LIMIT);
    for f in findings.iter().take(PREVIEW_LIMIT) {
        println!(
            "- [{}] {} | issues={} | bad={} | suggestion={}",
            f.kind.as_str(),
            f.rel_path.display(),
            f.issue_labels(),
            f.bad_chars,
            f.suggested,
        );
    }
    println!();
    println!("Note: nothing was renamed. Review the CSV before acting on it.");
    Ok(())
}
