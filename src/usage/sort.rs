//! Table sorting
//!
//! Comparators for the two sortable columns and the three-state toggle that drives them.

use super::record::UsageRecord;
use std::cmp::Ordering;

/// Columns the table can be sorted by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum SortField {
    #[strum(to_string = "Report Name")]
    ReportName,
    #[strum(to_string = "Credits Used")]
    CreditsUsed,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, clap::ValueEnum)]
pub enum SortDirection {
    #[strum(to_string = "ascending")]
    Asc,
    #[strum(to_string = "descending")]
    Desc,
}

impl SortDirection {
    /// Header glyph for an active sort.
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Advance one step through unsorted -> ascending -> descending -> unsorted.
pub fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// Compare two records by `field` in `direction`.
///
/// Records without a report name order after named ones in both directions.
pub fn compare(
    a: &UsageRecord,
    b: &UsageRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    match field {
        SortField::CreditsUsed => {
            let ordering = a.credits_used.total_cmp(&b.credits_used);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        SortField::ReportName => match (a.report_name(), b.report_name()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => match direction {
                SortDirection::Asc => compare_names(a, b),
                SortDirection::Desc => compare_names(b, a),
            },
        },
    }
}

/// Case-insensitive first, so "apple" sits next to "Apple" rather than after "Zeta".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Stable in-place sort.
pub fn sort_records(records: &mut [UsageRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| compare(a, b, field, direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::record::MessageId;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn record(id: i64, report_name: Option<&str>, credits_used: f64) -> UsageRecord {
        UsageRecord {
            message_id: MessageId::Number(id),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            report_name: report_name.map(str::to_string),
            credits_used,
        }
    }

    fn ids(records: &[UsageRecord]) -> Vec<String> {
        records.iter().map(|r| r.message_id.to_string()).collect()
    }

    #[test]
    fn direction_cycles_through_three_states() {
        assert_eq!(next_direction(None), Some(SortDirection::Asc));
        assert_eq!(next_direction(Some(SortDirection::Asc)), Some(SortDirection::Desc));
        assert_eq!(next_direction(Some(SortDirection::Desc)), None);
    }

    #[test]
    fn sorts_by_report_name() {
        let mut records = vec![record(1, Some("B"), 5.0), record(2, Some("A"), 3.0)];
        sort_records(&mut records, SortField::ReportName, SortDirection::Asc);
        assert_eq!(ids(&records), vec!["2", "1"]);
        sort_records(&mut records, SortField::ReportName, SortDirection::Desc);
        assert_eq!(ids(&records), vec!["1", "2"]);
    }

    #[test]
    fn report_names_ignore_case_first() {
        let mut records = vec![
            record(1, Some("banana"), 1.0),
            record(2, Some("Apple"), 1.0),
            record(3, Some("apple report"), 1.0),
            record(4, Some("Zeta"), 1.0),
            record(5, Some("apple"), 1.0),
        ];
        sort_records(&mut records, SortField::ReportName, SortDirection::Asc);
        assert_eq!(ids(&records), vec!["2", "5", "3", "1", "4"]);
        sort_records(&mut records, SortField::ReportName, SortDirection::Desc);
        assert_eq!(ids(&records), vec!["4", "1", "3", "5", "2"]);
    }

    #[test]
    fn sorts_by_credits() {
        let mut records = vec![
            record(1, Some("B"), 5.0),
            record(2, Some("A"), 3.0),
            record(3, None, 4.5),
        ];
        sort_records(&mut records, SortField::CreditsUsed, SortDirection::Desc);
        assert_eq!(ids(&records), vec!["1", "3", "2"]);
        sort_records(&mut records, SortField::CreditsUsed, SortDirection::Asc);
        assert_eq!(ids(&records), vec!["2", "3", "1"]);
    }

    #[test]
    fn unnamed_reports_sort_last_in_both_directions() {
        let mut records = vec![
            record(1, None, 1.0),
            record(2, Some("Z"), 1.0),
            record(3, Some(""), 1.0),
            record(4, Some("A"), 1.0),
        ];
        sort_records(&mut records, SortField::ReportName, SortDirection::Asc);
        assert_eq!(ids(&records), vec!["4", "2", "1", "3"]);
        sort_records(&mut records, SortField::ReportName, SortDirection::Desc);
        assert_eq!(ids(&records), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn sorting_empty_list_is_noop() {
        let mut records: Vec<UsageRecord> = Vec::new();
        sort_records(&mut records, SortField::CreditsUsed, SortDirection::Asc);
        assert!(records.is_empty());
    }

    fn arb_record() -> impl Strategy<Value = UsageRecord> {
        (
            any::<i64>(),
            proptest::option::of("[a-e]{0,3}"),
            0.0f64..1_000_000.0,
        )
            .prop_map(|(id, name, credits)| UsageRecord {
                message_id: MessageId::Number(id),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                report_name: name,
                credits_used: credits,
            })
    }

    proptest! {
        #[test]
        fn ascending_reversed_equals_descending(records in proptest::collection::vec(arb_record(), 0..40)) {
            let mut ascending = records.clone();
            sort_records(&mut ascending, SortField::CreditsUsed, SortDirection::Asc);
            ascending.reverse();

            let mut descending = records;
            sort_records(&mut descending, SortField::CreditsUsed, SortDirection::Desc);

            let asc_credits: Vec<f64> = ascending.iter().map(|r| r.credits_used).collect();
            let desc_credits: Vec<f64> = descending.iter().map(|r| r.credits_used).collect();
            prop_assert_eq!(asc_credits, desc_credits);
        }

        #[test]
        fn unnamed_after_named(
            records in proptest::collection::vec(arb_record(), 0..40),
            descending in any::<bool>(),
        ) {
            let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
            let mut sorted = records;
            sort_records(&mut sorted, SortField::ReportName, direction);

            let first_unnamed = sorted.iter().position(|r| r.report_name().is_none());
            if let Some(index) = first_unnamed {
                prop_assert!(sorted[index..].iter().all(|r| r.report_name().is_none()));
            }
        }
    }
}
