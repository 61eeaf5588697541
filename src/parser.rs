use crate::models::Record;
use regex::Regex;
use std::sync::OnceLock;

/// Class digits (third digit of the variant code) that pass the filter.
pub const ALLOWED_CLASSES: [char; 3] = ['7', '8', '9'];

/// Anchored record layout: the literal "056" marker, a 12-digit IIN, then
/// a 4-digit variant code. Everything past position 19 is free-form payload.
fn record_pattern() -> &'static Regex {
    static RECORD_PATTERN: OnceLock<Regex> = OnceLock::new();
    RECORD_PATTERN.get_or_init(|| Regex::new(r"^056([0-9]{12})([0-9]{4})").unwrap())
}

/// Parses one raw line into a [`Record`].
///
/// Returns `None` for every rejected line: shorter than 19 characters,
/// wrong marker, non-digit IIN or variant, or a class digit outside
/// [`ALLOWED_CLASSES`]. A single trailing line terminator (`\n` or `\r\n`)
/// is stripped before matching; all other whitespace is kept as-is.
pub fn parse_line(line: &str) -> Option<Record> {
    let text = line.strip_suffix('\n').unwrap_or(line);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let caps = record_pattern().captures(text)?;
    let variant = caps.get(2)?.as_str();
    let class_digit = variant.chars().nth(2)?;
    if !ALLOWED_CLASSES.contains(&class_digit) {
        return None;
    }

    Some(Record {
        iin: caps.get(1)?.as_str().to_string(),
        variant: variant.to_string(),
        raw_line: text.to_string(),
    })
}
