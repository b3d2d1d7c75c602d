// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-weekday statistics over the trailing seven days.

use crate::models::stats::{add_carbon, round_to};
use crate::models::{ActivityRecord, WeeklyStats};
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

pub const WEEKLY_WINDOW_DAYS: i64 = 7;
pub const WEEKLY_PERIOD: &str = "last_7_days";

/// Aggregate records created within seven days before `now`, bucketed by
/// UTC weekday. Records without a timestamp are skipped.
pub fn weekly_stats(records: &[ActivityRecord], now: DateTime<Utc>) -> WeeklyStats {
    let window_start = now - Duration::days(WEEKLY_WINDOW_DAYS);
    let mut stats = WeeklyStats {
        period: WEEKLY_PERIOD.to_string(),
        ..WeeklyStats::default()
    };
    let mut total_carbon = 0.0;

    for record in records {
        let Some(created_at) = record.created_at.filter(|t| *t >= window_start) else {
            continue;
        };

        stats
            .daily_stats
            .entry(weekday_name(created_at.weekday()).to_string())
            .or_default()
            .add(record.carbon_saved);
        stats.total_activities += 1;
        total_carbon = add_carbon(total_carbon, record.carbon_saved);
    }

    stats.total_carbon_saved = round_to(total_carbon, 2);
    stats
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_utils::parse_timestamp;

    fn record(carbon: f64, created_at: &str) -> ActivityRecord {
        ActivityRecord {
            id: String::new(),
            activity_type: "Cycling".to_string(),
            category: "Transport".to_string(),
            quantity: 1.0,
            unit: "km".to_string(),
            carbon_saved: carbon,
            created_at: parse_timestamp(created_at),
            notes: None,
        }
    }

    // Saturday
    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-06-15T12:00:00Z").unwrap()
    }

    #[test]
    fn test_empty_input() {
        let stats = weekly_stats(&[], now());
        assert_eq!(stats.total_activities, 0);
        assert_eq!(stats.total_carbon_saved, 0.0);
        assert!(stats.daily_stats.is_empty());
        assert_eq!(stats.period, "last_7_days");
    }

    #[test]
    fn test_same_weekday_merged() {
        let records = vec![
            record(1.5, "2024-06-13T08:00:00Z"),
            record(2.0, "2024-06-13T18:30:00Z"),
        ];
        let stats = weekly_stats(&records, now());

        let thursday = stats.daily_stats.get("Thursday").unwrap();
        assert_eq!(thursday.count, 2);
        assert_eq!(thursday.total_carbon, 3.5);
        assert_eq!(stats.daily_stats.len(), 1);
    }

    #[test]
    fn test_records_outside_window_excluded() {
        let records = vec![
            record(4.0, "2024-06-14T09:00:00Z"),
            record(100.0, "2024-06-01T09:00:00Z"),
            record(100.0, "not a date"),
        ];
        let stats = weekly_stats(&records, now());

        assert_eq!(stats.total_activities, 1);
        assert_eq!(stats.total_carbon_saved, 4.0);
        assert!(stats.daily_stats.contains_key("Friday"));
    }

    #[test]
    fn test_window_boundary_inclusive() {
        let records = vec![record(1.0, "2024-06-08T12:00:00Z")];
        let stats = weekly_stats(&records, now());
        assert_eq!(stats.total_activities, 1);
        assert!(stats.daily_stats.contains_key("Saturday"));
    }

    #[test]
    fn test_weekday_is_utc() {
        // 23:30 at -05:00 is Monday 04:30 UTC
        let records = vec![record(1.0, "2024-06-09T23:30:00-05:00")];
        let stats = weekly_stats(&records, now());
        assert!(stats.daily_stats.contains_key("Monday"));
        assert!(!stats.daily_stats.contains_key("Sunday"));
    }

    #[test]
    fn test_total_rounded_to_two_decimals() {
        let records = vec![
            record(0.333, "2024-06-14T09:00:00Z"),
            record(0.333, "2024-06-12T09:00:00Z"),
        ];
        let stats = weekly_stats(&records, now());
        assert_eq!(stats.total_carbon_saved, 0.67);
    }
}
