// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Green score: average daily carbon saved, scaled into `[0, 100]`.
//!
//! More carbon saved per tracked day yields a higher score.

use crate::models::stats::sum_carbon;
use crate::models::ActivityRecord;
use crate::time_utils::MS_PER_DAY;
use chrono::{DateTime, Utc};

/// Score points awarded per kg CO2 saved per day.
const POINTS_PER_KG_PER_DAY: f64 = 10.0;
const MAX_SCORE: f64 = 100.0;

/// Compute the green score of a set of records as of `now`.
pub fn green_score(records: &[ActivityRecord], now: DateTime<Utc>) -> u8 {
    if records.is_empty() {
        return 0;
    }

    let total_carbon = sum_carbon(records.iter().map(|r| r.carbon_saved));
    let avg_per_day = total_carbon / days_tracked(records, now) as f64;
    let score = (avg_per_day * POINTS_PER_KG_PER_DAY).clamp(0.0, MAX_SCORE);

    score.round() as u8
}

/// Whole days between the earliest record and `now`, at least 1.
///
/// Scans every record for the minimum timestamp; input order is irrelevant.
/// Records without a timestamp do not take part.
pub fn days_tracked(records: &[ActivityRecord], now: DateTime<Utc>) -> u64 {
    let Some(earliest) = records.iter().filter_map(|r| r.created_at).min() else {
        return 1;
    };

    let elapsed_days = (now - earliest).num_milliseconds() as f64 / MS_PER_DAY;
    elapsed_days.ceil().max(1.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(carbon: f64, created_at: Option<DateTime<Utc>>) -> ActivityRecord {
        ActivityRecord {
            id: String::new(),
            activity_type: "Cycling".to_string(),
            category: "Transport".to_string(),
            quantity: 0.0,
            unit: "km".to_string(),
            carbon_saved: carbon,
            created_at,
            notes: None,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(green_score(&[], now()), 0);
    }

    #[test]
    fn test_single_record_now() {
        let records = vec![record(5.0, Some(now()))];
        assert_eq!(days_tracked(&records, now()), 1);
        assert_eq!(green_score(&records, now()), 50);
    }

    #[test]
    fn test_all_zero_carbon() {
        let records = vec![
            record(0.0, Some(now() - Duration::days(3))),
            record(0.0, Some(now())),
        ];
        assert_eq!(green_score(&records, now()), 0);
    }

    #[test]
    fn test_clamped_to_100() {
        let records = vec![record(1_000_000.0, Some(now()))];
        assert_eq!(green_score(&records, now()), 100);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let records = vec![record(10.0, Some(now() - Duration::hours(36)))];
        assert_eq!(days_tracked(&records, now()), 2);
        assert_eq!(green_score(&records, now()), 50);
    }

    #[test]
    fn test_earliest_found_regardless_of_order() {
        // Newest first, as an API listing would return them
        let records = vec![
            record(2.0, Some(now())),
            record(2.0, Some(now() - Duration::days(1))),
            record(2.0, Some(now() - Duration::days(4))),
        ];
        assert_eq!(days_tracked(&records, now()), 4);
        // 6 kg over 4 days = 1.5/day -> 15
        assert_eq!(green_score(&records, now()), 15);
    }

    #[test]
    fn test_future_timestamp_counts_as_one_day() {
        let records = vec![record(3.0, Some(now() + Duration::days(2)))];
        assert_eq!(days_tracked(&records, now()), 1);
        assert_eq!(green_score(&records, now()), 30);
    }

    #[test]
    fn test_untimed_records_still_contribute_carbon() {
        let records = vec![record(2.0, None), record(3.0, Some(now()))];
        assert_eq!(days_tracked(&records, now()), 1);
        assert_eq!(green_score(&records, now()), 50);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.25 kg/day -> 2.5 -> 3
        let records = vec![record(0.5, Some(now() - Duration::days(2)))];
        assert_eq!(green_score(&records, now()), 3);
    }

    #[test]
    fn test_adding_carbon_never_decreases_score() {
        let base = vec![
            record(1.0, Some(now() - Duration::days(5))),
            record(0.5, Some(now() - Duration::days(2))),
        ];
        let mut extended = base.clone();
        extended.push(record(0.7, Some(now() - Duration::days(1))));

        assert!(green_score(&extended, now()) >= green_score(&base, now()));
    }

    #[test]
    fn test_longer_window_never_increases_score() {
        let short = vec![record(20.0, Some(now() - Duration::days(3)))];
        let long = vec![record(20.0, Some(now() - Duration::days(30)))];
        assert!(green_score(&long, now()) <= green_score(&short, now()));
    }
}
