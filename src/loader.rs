use crate::models::{LoadedDay, SkipRef};
use crate::parser;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads one day file from disk.
///
/// Invalid byte sequences are decoded to U+FFFD instead of failing the
/// whole file; the affected lines then simply fail to parse. Skipped lines
/// are labelled with the file name, not the full path.
pub fn load_records(path: &Path) -> Result<LoadedDay> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(load_records_from_bytes(&source_name, &bytes))
}

/// Loads one day file from an in-memory buffer, e.g. an upload.
pub fn load_records_from_bytes(source_name: &str, bytes: &[u8]) -> LoadedDay {
    let text = String::from_utf8_lossy(bytes);
    load_records_from_text(source_name, &text)
}

/// Walks the lines of one day file already decoded to text.
///
/// Line numbers in skip references are 1-based. A later valid line with an
/// IIN already seen replaces the earlier record.
pub fn load_records_from_text(source_name: &str, text: &str) -> LoadedDay {
    let mut day = LoadedDay::default();
    for (idx, line) in text.lines().enumerate() {
        match parser::parse_line(line) {
            Some(record) => {
                day.records.insert(record.iin.clone(), record);
            }
            None => day.skipped.push(SkipRef {
                source: source_name.to_string(),
                line: idx + 1,
            }),
        }
    }
    day
}
