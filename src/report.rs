use crate::analyzer::Reconciliation;
use crate::models::Record;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The two rendered reports as ordered line sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reports {
    pub both_lines: Vec<String>,
    pub one_day_lines: Vec<String>,
}

/// Renders the reconciliation into the two report line sequences.
///
/// IINs are sorted ascending as strings before rendering, so the output
/// does not depend on map iteration order. No I/O happens here.
pub fn build_reports(
    day1: &HashMap<String, Record>,
    day2: &HashMap<String, Record>,
    recon: &Reconciliation,
) -> Reports {
    let mut reports = Reports::default();

    let mut both: Vec<&String> = recon.both.iter().collect();
    both.sort();
    for iin in both {
        let (Some(rec1), Some(rec2)) = (day1.get(iin), day2.get(iin)) else {
            continue;
        };
        reports.both_lines.push(format!("=== IIN {} ===", iin));
        reports.both_lines.push(format!("DAY1: {}", rec1.raw_line));
        reports.both_lines.push(format!("DAY2: {}", rec2.raw_line));
        reports.both_lines.push(String::new());
    }

    let mut one_day: Vec<&String> = recon.one_day.iter().collect();
    one_day.sort();
    for iin in one_day {
        if let Some(record) = day1.get(iin) {
            reports
                .one_day_lines
                .push(format!("DAY1_ONLY: {}", record.raw_line));
        } else if let Some(record) = day2.get(iin) {
            reports
                .one_day_lines
                .push(format!("DAY2_ONLY: {}", record.raw_line));
        }
    }

    reports
}

/// Joins report lines into final text form: every line gets exactly one
/// trailing `\n`, and no lines means an empty string.
pub fn render_text(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.trim_end_matches('\n'));
        text.push('\n');
    }
    text
}

/// Writes one report to disk as UTF-8 with `\n` line endings.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, render_text(lines))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Writes the report pair, staging each file to a `.tmp` sibling first.
///
/// A failure while staging leaves any existing report pair untouched; the
/// staged files are cleaned up on every error path.
pub fn write_reports(both_path: &Path, one_day_path: &Path, reports: &Reports) -> Result<()> {
    let both_tmp = staging_path(both_path);
    let one_day_tmp = staging_path(one_day_path);

    let result = stage_and_swap(&both_tmp, &one_day_tmp, both_path, one_day_path, reports);
    if result.is_err() {
        let _ = fs::remove_file(&both_tmp);
        let _ = fs::remove_file(&one_day_tmp);
    }
    result
}

fn stage_and_swap(
    both_tmp: &Path,
    one_day_tmp: &Path,
    both_path: &Path,
    one_day_path: &Path,
    reports: &Reports,
) -> Result<()> {
    write_lines(both_tmp, &reports.both_lines)?;
    write_lines(one_day_tmp, &reports.one_day_lines)?;
    fs::rename(both_tmp, both_path)
        .with_context(|| format!("Failed to replace file: {}", both_path.display()))?;
    fs::rename(one_day_tmp, one_day_path)
        .with_context(|| format!("Failed to replace file: {}", one_day_path.display()))?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(".tmp");
    path.with_file_name(name)
}
