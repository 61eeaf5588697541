//! Compares two fixed-width BTS attendance day files keyed by IIN.
//!
//! A record line starts with the `056` marker, carries a 12-digit IIN and
//! a 4-digit variant code, and is kept only when the variant's class digit
//! is 7, 8 or 9. The pipeline loads both day files, reconciles the IIN
//! sets and renders two reports: students present on both days and
//! students present on exactly one day.
//!
//! The library is the whole pipeline; the CLI binary and any GUI or web
//! shell are thin callers around it.
//!
//! ```
//! use bts_compare::compare_buffers;
//!
//! let day1 = "0569401153501230871 Аружан\n".as_bytes();
//! let day2 = "0569401153501230872 Аружан\n".as_bytes();
//! let outcome = compare_buffers("day1.txt", day1, "day2.txt", day2);
//!
//! assert_eq!(outcome.both_count, 1);
//! assert!(outcome.both_report.starts_with("=== IIN 940115350123 ==="));
//! ```

pub mod analyzer;
pub mod loader;
pub mod models;
pub mod parser;
pub mod report;

pub use models::{CompareOutcome, Config, LoadedDay, Record, SkipRef};

/// Runs the full comparison on two in-memory day buffers.
///
/// The buffer names label skip references. Decoding is best-effort and
/// parse failures only add to the skip count, so this never fails.
pub fn compare_buffers(
    day1_name: &str,
    day1_bytes: &[u8],
    day2_name: &str,
    day2_bytes: &[u8],
) -> CompareOutcome {
    let day1 = loader::load_records_from_bytes(day1_name, day1_bytes);
    let day2 = loader::load_records_from_bytes(day2_name, day2_bytes);

    let recon = analyzer::reconcile(&day1.records, &day2.records);
    let reports = report::build_reports(&day1.records, &day2.records, &recon);

    CompareOutcome {
        both_report: report::render_text(&reports.both_lines),
        one_day_report: report::render_text(&reports.one_day_lines),
        both_count: recon.both.len(),
        one_day_count: recon.one_day.len(),
        skipped_count: day1.skipped.len() + day2.skipped.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DAY1: &[u8] = "0561111111111117777 Айбек\n\
                         оқушылар тізімі\n\
                         0562222222222221284 Дана\n"
        .as_bytes();
    const DAY2: &[u8] = "0562222222222221285 Дана\n\
                         0563333333333339999 Мирас\n"
        .as_bytes();

    #[test]
    fn buffers_produce_reports_and_counts() {
        let outcome = compare_buffers("day1.txt", DAY1, "day2.txt", DAY2);

        assert_eq!(outcome.both_count, 1);
        assert_eq!(outcome.one_day_count, 2);
        assert_eq!(outcome.skipped_count, 1);
        assert_eq!(
            outcome.both_report,
            "=== IIN 222222222222 ===\n\
             DAY1: 0562222222222221284 Дана\n\
             DAY2: 0562222222222221285 Дана\n\
             \n"
        );
        assert_eq!(
            outcome.one_day_report,
            "DAY1_ONLY: 0561111111111117777 Айбек\n\
             DAY2_ONLY: 0563333333333339999 Мирас\n"
        );
    }

    #[test]
    fn same_inputs_give_identical_outcomes() {
        let first = compare_buffers("a", DAY1, "b", DAY2);
        let second = compare_buffers("a", DAY1, "b", DAY2);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_day_leaves_both_report_empty() {
        let outcome = compare_buffers("day1.txt", b"", "day2.txt", DAY2);

        assert_eq!(outcome.both_count, 0);
        assert_eq!(outcome.both_report, "");
        assert_eq!(outcome.one_day_count, 2);
        assert!(outcome.one_day_report.contains("DAY2_ONLY: 0562222222222221285"));
    }
}
