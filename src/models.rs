use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub day1: String,
    pub day2: String,
    pub both_out: String,
    pub one_day_out: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day1: "БТС1.txt".to_string(),
            day2: "БТС2.txt".to_string(),
            both_out: "eki_kunde_katyskandar.txt".to_string(),
            one_day_out: "bir_kun_katyskandar.txt".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, file_path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(file_path, content)?;
        Ok(())
    }
}

/// One accepted attendance record from a day file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub iin: String,
    pub variant: String,
    /// Full source line with the trailing line terminator stripped.
    pub raw_line: String,
}

/// Points at an input line that was rejected by parsing or filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRef {
    pub source: String,
    /// 1-based line number within `source`.
    pub line: usize,
}

impl fmt::Display for SkipRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// Everything loaded from one day file: accepted records keyed by IIN
/// (a later line with the same IIN replaces an earlier one) plus the
/// skipped line references in encounter order.
#[derive(Debug, Clone, Default)]
pub struct LoadedDay {
    pub records: HashMap<String, Record>,
    pub skipped: Vec<SkipRef>,
}

/// In-memory result of a full comparison, for callers that work on
/// buffers instead of files (previews, downloads).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOutcome {
    pub both_report: String,
    pub one_day_report: String,
    pub both_count: usize,
    pub one_day_count: usize,
    pub skipped_count: usize,
}
