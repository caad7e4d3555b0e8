//! [Epoch] extensions
use hifitime::Epoch;

use crate::{
    calendar::{self, decompose, recompose},
    interval::Interval,
    unit::CalendarUnit,
};

/// Calendar oriented [Epoch] extensions.
///
/// Truncations operate on the UTC civil calendar, the resulting [Epoch]
/// is expressed in the same [hifitime::TimeScale] as `self`.
/// ```
/// use timeframe::prelude::*;
///
/// let t = Epoch::from_gregorian_utc(2024, 3, 14, 15, 9, 26, 535_000_000);
/// assert_eq!(t.start_of_month(), Epoch::from_gregorian_utc_at_midnight(2024, 3, 1));
/// assert_eq!(t.start_of_week(), Epoch::from_gregorian_utc_at_midnight(2024, 3, 11));
/// assert_eq!(t.start_of_hour(), Epoch::from_gregorian_utc_hms(2024, 3, 14, 15, 0, 0));
/// ```
pub trait EpochExt: Sized {
    /// January 1st, midnight, of the year containing self
    fn start_of_year(&self) -> Self;
    /// First day of the month containing self, at midnight
    fn start_of_month(&self) -> Self;
    /// Monday of the week containing self, at midnight
    fn start_of_week(&self) -> Self;
    /// Self at midnight
    fn start_of_day(&self) -> Self;
    fn start_of_hour(&self) -> Self;
    fn start_of_minute(&self) -> Self;
    fn start_of_second(&self) -> Self;
    /// Self moved one `unit` forward
    fn next_by(&self, unit: CalendarUnit) -> Self;
    /// Self moved one `unit` backwards
    fn previous_by(&self, unit: CalendarUnit) -> Self;
    /// Same time of day, one civil day later
    fn tomorrow(&self) -> Self {
        self.next_by(CalendarUnit::Day)
    }
    /// Same time of day, one civil day earlier
    fn yesterday(&self) -> Self {
        self.previous_by(CalendarUnit::Day)
    }
    /// [Interval] spanning the civil day containing self
    fn day_interval(&self) -> Interval;
    /// [Interval] spanning the civil month containing self
    fn month_interval(&self) -> Interval;
    /// Builds the [Interval] ranging from self to `end`
    fn until(&self, end: Self) -> Interval;
}

impl EpochExt for Epoch {
    fn start_of_year(&self) -> Self {
        let (y, _, _, _, _, _, _) = decompose(*self);
        recompose((y, 1, 1, 0, 0, 0, 0), self.time_scale)
    }
    fn start_of_month(&self) -> Self {
        let (y, m, _, _, _, _, _) = decompose(*self);
        recompose((y, m, 1, 0, 0, 0, 0), self.time_scale)
    }
    fn start_of_week(&self) -> Self {
        // Monday = 0
        let since_monday = u8::from(calendar::weekday(*self));
        calendar::add_days(self.start_of_day(), -i64::from(since_monday))
    }
    fn start_of_day(&self) -> Self {
        let (y, m, d, _, _, _, _) = decompose(*self);
        recompose((y, m, d, 0, 0, 0, 0), self.time_scale)
    }
    fn start_of_hour(&self) -> Self {
        let (y, m, d, hh, _, _, _) = decompose(*self);
        recompose((y, m, d, hh, 0, 0, 0), self.time_scale)
    }
    fn start_of_minute(&self) -> Self {
        let (y, m, d, hh, mm, _, _) = decompose(*self);
        recompose((y, m, d, hh, mm, 0, 0), self.time_scale)
    }
    fn start_of_second(&self) -> Self {
        let (y, m, d, hh, mm, ss, _) = decompose(*self);
        recompose((y, m, d, hh, mm, ss, 0), self.time_scale)
    }
    fn next_by(&self, unit: CalendarUnit) -> Self {
        unit.advance(*self)
    }
    fn previous_by(&self, unit: CalendarUnit) -> Self {
        unit.retreat(*self)
    }
    fn day_interval(&self) -> Interval {
        let start = self.start_of_day();
        Interval::new(start, start.next_by(CalendarUnit::Day))
    }
    fn month_interval(&self) -> Interval {
        let start = self.start_of_month();
        Interval::new(start, start.next_by(CalendarUnit::Month))
    }
    fn until(&self, end: Self) -> Interval {
        Interval::new(*self, end)
    }
}
