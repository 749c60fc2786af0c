//! Dashboard totals and tier-window filters over the trip log

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{DealRating, TripRecord};

/// Totals across a set of logged trips
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub trip_count: usize,
    pub total_gross: f64,
    pub total_net: f64,
    /// Gross minus net
    pub total_expenses: f64,
    pub average_net_per_trip: f64,
    pub round_trip_miles: f64,
    pub excellent_count: usize,
    pub good_count: usize,
    pub shit_count: usize,
    pub unrated_count: usize,
}

impl EarningsSummary {
    pub fn from_records(records: &[TripRecord]) -> Self {
        let mut summary = EarningsSummary {
            trip_count: records.len(),
            ..Default::default()
        };

        for record in records {
            summary.total_gross += record.gross();
            summary.total_net += record.net();
            summary.round_trip_miles += record.round_trip_miles();
            match record.rating {
                Some(DealRating::Excellent) => summary.excellent_count += 1,
                Some(DealRating::Good) => summary.good_count += 1,
                Some(DealRating::Shit) => summary.shit_count += 1,
                None => summary.unrated_count += 1,
            }
        }

        summary.total_expenses = summary.total_gross - summary.total_net;
        summary.average_net_per_trip = if summary.trip_count == 0 {
            0.0
        } else {
            summary.total_net / summary.trip_count as f64
        };
        summary
    }
}

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Trips driven in the same ISO week as `date`
pub fn trips_in_week(records: &[TripRecord], date: NaiveDate) -> usize {
    let start = week_start(date);
    let end = start + Duration::days(7);
    records
        .iter()
        .filter(|r| r.date >= start && r.date < end)
        .count()
}

/// Keep trips from the last `days` days up to `today`; `None` keeps everything
pub fn within_retention(
    records: Vec<TripRecord>,
    days: Option<i64>,
    today: NaiveDate,
) -> Vec<TripRecord> {
    match days {
        Some(days) => {
            let cutoff = today - Duration::days(days);
            records.into_iter().filter(|r| r.date > cutoff).collect()
        }
        None => records,
    }
}
