//! Dashboard time series: mood and anxiety over a rolling window of daily
//! responses, with missing dates filled in so the chart is continuous.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use sqlx::FromRow;

/// The slice of a daily response the chart needs.
#[derive(Debug, Clone, FromRow)]
pub struct MoodRow {
    pub response_date: NaiveDate,
    pub mood: Option<i32>,
    pub anxiety: Option<i32>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub mood: Option<i32>,
    pub anxiety: Option<i32>,
}

/// Builds the series for the closed interval ending at `window_end`,
/// `window_days` long. Always returns exactly `window_days` points in
/// ascending date order; dates without a stored row get null mood/anxiety.
pub fn fill_series(rows: &[MoodRow], window_end: NaiveDate, window_days: i64) -> Vec<SeriesPoint> {
    let by_date: std::collections::HashMap<NaiveDate, &MoodRow> =
        rows.iter().map(|r| (r.response_date, r)).collect();

    let start = window_end - Duration::days(window_days - 1);
    (0..window_days)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let row = by_date.get(&date);
            SeriesPoint {
                date,
                mood: row.and_then(|r| r.mood),
                anxiety: row.and_then(|r| r.anxiety),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_input_yields_full_null_window() {
        let series = fill_series(&[], d(2025, 6, 30), 30);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, d(2025, 6, 1));
        assert_eq!(series[29].date, d(2025, 6, 30));
        assert!(series.iter().all(|p| p.mood.is_none() && p.anxiety.is_none()));
    }

    #[test]
    fn stored_rows_land_on_their_dates() {
        let rows = vec![
            MoodRow {
                response_date: d(2025, 6, 28),
                mood: Some(7),
                anxiety: Some(3),
            },
            MoodRow {
                response_date: d(2025, 6, 30),
                mood: None,
                anxiety: Some(5),
            },
        ];
        let series = fill_series(&rows, d(2025, 6, 30), 30);
        assert_eq!(series.len(), 30);
        assert_eq!(series[27].mood, Some(7));
        assert_eq!(series[27].anxiety, Some(3));
        // A stored row can itself have null fields
        assert_eq!(series[29].mood, None);
        assert_eq!(series[29].anxiety, Some(5));
        assert_eq!(series[28].mood, None);
    }

    #[test]
    fn ascending_order_across_month_boundary() {
        let series = fill_series(&[], d(2025, 3, 5), 10);
        assert_eq!(series[0].date, d(2025, 2, 24));
        for pair in series.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn window_length_is_exact_for_any_row_count() {
        let rows: Vec<MoodRow> = (1..=7)
            .map(|day| MoodRow {
                response_date: d(2025, 6, day),
                mood: Some(day as i32),
                anxiety: None,
            })
            .collect();
        assert_eq!(fill_series(&rows, d(2025, 6, 7), 7).len(), 7);
        assert_eq!(fill_series(&rows, d(2025, 6, 7), 30).len(), 30);
    }
}
