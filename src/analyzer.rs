use crate::models::Record;
use std::collections::{HashMap, HashSet};

/// Key-set comparison of the two day mappings.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// IINs with a valid record in both days.
    pub both: HashSet<String>,
    /// IINs with a valid record in exactly one day.
    pub one_day: HashSet<String>,
}

/// Splits the IINs seen across the two days into "both days" and
/// "one day only".
///
/// The two sets never overlap and together cover every IIN present in
/// either mapping. Ordering is left to the report builder.
pub fn reconcile(
    day1: &HashMap<String, Record>,
    day2: &HashMap<String, Record>,
) -> Reconciliation {
    let day1_iins: HashSet<String> = day1.keys().cloned().collect();
    let day2_iins: HashSet<String> = day2.keys().cloned().collect();

    Reconciliation {
        both: day1_iins.intersection(&day2_iins).cloned().collect(),
        one_day: day1_iins
            .symmetric_difference(&day2_iins)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(iins: &[&str]) -> HashMap<String, Record> {
        iins.iter()
            .map(|iin| {
                let record = Record {
                    iin: iin.to_string(),
                    variant: "1284".to_string(),
                    raw_line: format!("056{iin}1284"),
                };
                (iin.to_string(), record)
            })
            .collect()
    }

    #[test]
    fn splits_shared_and_exclusive_iins() {
        let day1 = day(&["111111111111", "222222222222", "333333333333"]);
        let day2 = day(&["222222222222", "444444444444"]);

        let recon = reconcile(&day1, &day2);
        assert_eq!(
            recon.both,
            HashSet::from(["222222222222".to_string()])
        );
        assert_eq!(
            recon.one_day,
            HashSet::from([
                "111111111111".to_string(),
                "333333333333".to_string(),
                "444444444444".to_string(),
            ])
        );
    }

    #[test]
    fn sets_are_disjoint_and_cover_all_iins() {
        let day1 = day(&["111111111111", "222222222222", "555555555555"]);
        let day2 = day(&["222222222222", "555555555555", "666666666666"]);

        let recon = reconcile(&day1, &day2);
        assert!(recon.both.is_disjoint(&recon.one_day));

        let all: HashSet<String> = day1.keys().chain(day2.keys()).cloned().collect();
        let covered: HashSet<String> = recon.both.union(&recon.one_day).cloned().collect();
        assert_eq!(covered, all);
    }

    #[test]
    fn one_empty_day_puts_everything_in_one_day() {
        let day1 = day(&[]);
        let day2 = day(&["111111111111", "222222222222"]);

        let recon = reconcile(&day1, &day2);
        assert!(recon.both.is_empty());
        assert_eq!(recon.one_day.len(), 2);
    }

    #[test]
    fn two_empty_days_yield_empty_sets() {
        let recon = reconcile(&day(&[]), &day(&[]));
        assert!(recon.both.is_empty());
        assert!(recon.one_day.is_empty());
    }
}
