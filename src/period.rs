//! Period bucketing and navigation.
//!
//! Every questionnaire record is keyed by the canonical start date of its
//! bucket: the day itself, the Sunday starting its week, the first of its
//! month, or the first day of its quarter. All date arithmetic is
//! calendar-correct (variable month lengths, year rollover).

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
}

impl Granularity {
    /// Canonical bucket start for the bucket containing `date`.
    pub fn anchor(self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => {
                // Weeks start on Sunday
                date - Duration::days(date.weekday().num_days_from_sunday() as i64)
            }
            Granularity::Month => date.with_day(1).expect("day 1 is always valid"),
            Granularity::Quarter => {
                let quarter_month = (date.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), quarter_month, 1)
                    .expect("quarter start is always valid")
            }
        }
    }

    /// Start of the bucket after `anchor`. `anchor` must be canonical.
    pub fn next(self, anchor: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => anchor + Duration::days(1),
            Granularity::Week => anchor + Duration::days(7),
            Granularity::Month => anchor
                .checked_add_months(Months::new(1))
                .expect("date out of range"),
            Granularity::Quarter => anchor
                .checked_add_months(Months::new(3))
                .expect("date out of range"),
        }
    }

    /// Start of the bucket before `anchor`. `anchor` must be canonical.
    pub fn previous(self, anchor: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => anchor - Duration::days(1),
            Granularity::Week => anchor - Duration::days(7),
            Granularity::Month => anchor
                .checked_sub_months(Months::new(1))
                .expect("date out of range"),
            Granularity::Quarter => anchor
                .checked_sub_months(Months::new(3))
                .expect("date out of range"),
        }
    }

    /// Response envelope for the period GET endpoints: the canonical anchor
    /// for `date`, its neighbors, and the record if one exists.
    pub fn envelope<T>(self, date: NaiveDate, record: Option<T>) -> PeriodEnvelope<T> {
        let anchor = self.anchor(date);
        PeriodEnvelope {
            anchor,
            previous: self.previous(anchor),
            next: self.next(anchor),
            record,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PeriodEnvelope<T> {
    pub anchor: NaiveDate,
    pub previous: NaiveDate,
    pub next: NaiveDate,
    pub record: Option<T>,
}

/// Handle for an in-flight fetch issued by a [`PeriodNavigator`].
///
/// Completed fetches must be checked with [`PeriodNavigator::is_current`]
/// before their result is displayed; a ticket issued before a later
/// transition no longer matches and its result must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub anchor: NaiveDate,
    generation: u64,
}

/// Client-side state holder for the "current period" of one screen.
///
/// Each transition bumps a generation counter and yields a [`FetchTicket`],
/// so overlapping asynchronous fetches can be ordered: only the result whose
/// ticket still matches the navigator at completion time may be rendered.
#[derive(Debug)]
pub struct PeriodNavigator {
    granularity: Granularity,
    anchor: NaiveDate,
    generation: u64,
}

impl PeriodNavigator {
    pub fn new(granularity: Granularity, date: NaiveDate) -> Self {
        Self {
            granularity,
            anchor: granularity.anchor(date),
            generation: 0,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Ticket for the current anchor without transitioning.
    pub fn current(&self) -> FetchTicket {
        FetchTicket {
            anchor: self.anchor,
            generation: self.generation,
        }
    }

    pub fn next(&mut self) -> FetchTicket {
        self.anchor = self.granularity.next(self.anchor);
        self.bump()
    }

    pub fn previous(&mut self) -> FetchTicket {
        self.anchor = self.granularity.previous(self.anchor);
        self.bump()
    }

    /// Moves to the bucket containing `date`.
    pub fn jump_to(&mut self, date: NaiveDate) -> FetchTicket {
        self.anchor = self.granularity.anchor(date);
        self.bump()
    }

    /// Whether a fetch issued with `ticket` is still the one to display.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    fn bump(&mut self) -> FetchTicket {
        self.generation += 1;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_anchor_is_identity() {
        assert_eq!(Granularity::Day.anchor(d(2024, 2, 29)), d(2024, 2, 29));
    }

    #[test]
    fn week_anchor_rolls_back_to_sunday() {
        // 2025-06-18 is a Wednesday; the week started Sunday 2025-06-15
        assert_eq!(Granularity::Week.anchor(d(2025, 6, 18)), d(2025, 6, 15));
        // A Sunday anchors to itself
        assert_eq!(Granularity::Week.anchor(d(2025, 6, 15)), d(2025, 6, 15));
        // Week anchoring can cross a month boundary
        assert_eq!(Granularity::Week.anchor(d(2025, 7, 1)), d(2025, 6, 29));
    }

    #[test]
    fn month_and_quarter_anchors() {
        assert_eq!(Granularity::Month.anchor(d(2025, 6, 18)), d(2025, 6, 1));
        assert_eq!(Granularity::Quarter.anchor(d(2025, 2, 14)), d(2025, 1, 1));
        assert_eq!(Granularity::Quarter.anchor(d(2025, 6, 30)), d(2025, 4, 1));
        assert_eq!(Granularity::Quarter.anchor(d(2025, 12, 31)), d(2025, 10, 1));
    }

    #[test]
    fn next_then_previous_round_trips() {
        let cases = [
            (Granularity::Day, d(2024, 2, 28)),
            (Granularity::Day, d(2025, 12, 31)),
            (Granularity::Week, d(2025, 6, 15)),
            (Granularity::Week, d(2025, 12, 28)),
            (Granularity::Month, d(2025, 1, 1)),
            (Granularity::Month, d(2025, 12, 1)),
            (Granularity::Quarter, d(2025, 10, 1)),
        ];
        for (g, anchor) in cases {
            assert_eq!(g.previous(g.next(anchor)), anchor, "{g:?} from {anchor}");
        }
    }

    #[test]
    fn month_next_crosses_year_boundary() {
        assert_eq!(Granularity::Month.next(d(2025, 12, 1)), d(2026, 1, 1));
        assert_eq!(Granularity::Quarter.next(d(2025, 10, 1)), d(2026, 1, 1));
        assert_eq!(Granularity::Quarter.previous(d(2026, 1, 1)), d(2025, 10, 1));
    }

    #[test]
    fn navigator_transitions_and_normalizes() {
        let mut nav = PeriodNavigator::new(Granularity::Week, d(2025, 6, 18));
        assert_eq!(nav.anchor(), d(2025, 6, 15));

        nav.next();
        assert_eq!(nav.anchor(), d(2025, 6, 22));
        nav.previous();
        assert_eq!(nav.anchor(), d(2025, 6, 15));

        nav.jump_to(d(2025, 12, 31));
        assert_eq!(nav.anchor(), d(2025, 12, 28));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut nav = PeriodNavigator::new(Granularity::Month, d(2025, 6, 10));
        let first = nav.next();
        assert!(nav.is_current(&first));

        // A second transition lands before the first fetch completes
        let second = nav.next();
        assert!(!nav.is_current(&first));
        assert!(nav.is_current(&second));
    }

    #[test]
    fn envelope_carries_neighbor_anchors() {
        let env = Granularity::Quarter.envelope::<()>(d(2025, 11, 20), None);
        assert_eq!(env.anchor, d(2025, 10, 1));
        assert_eq!(env.previous, d(2025, 7, 1));
        assert_eq!(env.next, d(2026, 1, 1));
        assert!(env.record.is_none());
    }
}
