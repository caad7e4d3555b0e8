//! Time intervals
use std::fmt;

use hifitime::{Duration, Epoch};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    chunk::{chunk, Chunks, PeriodSteps, Steps},
    error::Error,
    period::Period,
    unit::CalendarUnit,
};

/// [Interval] is a time range ranging from `start` to `end`.
///
/// Enumerations ([Interval::walk], [Interval::chunk]..) generate points
/// strictly before `end`, while [Interval::contains] is inclusive on both ends,
/// so every generated point is contained in the [Interval].
///
/// [Interval]s are not validated: a reversed interval (`end` < `start`)
/// is empty and generates nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    start: Epoch,
    end: Epoch,
}

impl Interval {
    /// Builds a new [Interval]
    pub fn new(start: Epoch, end: Epoch) -> Self {
        Self { start, end }
    }
    /// Lower bound
    pub fn start(&self) -> Epoch {
        self.start
    }
    /// Upper bound
    pub fn end(&self) -> Epoch {
        self.end
    }
    /// Returns true if walking self does not generate any point
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
    /// Returns true if `start` <= `t` <= `end`
    pub fn contains(&self, t: Epoch) -> bool {
        self.start <= t && t <= self.end
    }
    /// Returns true if both bounds of `rhs` are contained in self
    pub fn contains_interval(&self, rhs: &Self) -> bool {
        self.contains(rhs.start) && self.contains(rhs.end)
    }
    /// Returns `end` - `start`
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
    /// Walks self from `start`, one `unit` at a time
    /// ```
    /// use timeframe::prelude::*;
    ///
    /// let t0 = Epoch::from_gregorian_utc_at_midnight(2024, 1, 31);
    /// let months = t0
    ///     .until(t0 + 3.month_period())
    ///     .walk(CalendarUnit::Month)
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(
    ///     months,
    ///     vec![
    ///         Epoch::from_gregorian_utc_at_midnight(2024, 1, 31),
    ///         Epoch::from_gregorian_utc_at_midnight(2024, 2, 29),
    ///         Epoch::from_gregorian_utc_at_midnight(2024, 3, 29),
    ///         Epoch::from_gregorian_utc_at_midnight(2024, 4, 29),
    ///     ]
    /// );
    /// ```
    pub fn walk(&self, unit: CalendarUnit) -> Steps {
        Steps::new(self.start, self.end, unit)
    }
    /// Walks self by `period`, from `start` + `period` up to `end` (included)
    pub fn step(&self, period: Period) -> PeriodSteps {
        PeriodSteps::new(self.start, self.end, period)
    }
    /// Partitions self into chunks of up to `size` consecutive `unit` steps.
    /// See [chunk] for more information.
    pub fn chunk(&self, unit: CalendarUnit, size: i64) -> Result<Chunks, Error> {
        chunk(self, unit, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Year]
    pub fn chunk_year(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Year, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Month]
    pub fn chunk_month(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Month, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Week]
    pub fn chunk_week(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Week, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Day]
    pub fn chunk_day(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Day, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Hour]
    pub fn chunk_hour(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Hour, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Minute]
    pub fn chunk_minute(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Minute, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Second]
    pub fn chunk_second(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Second, size)
    }
    /// [Interval::chunk] by [CalendarUnit::Millisecond]
    pub fn chunk_milli(&self, size: i64) -> Result<Chunks, Error> {
        self.chunk(CalendarUnit::Millisecond, size)
    }
}

impl From<(Epoch, Epoch)> for Interval {
    fn from(bounds: (Epoch, Epoch)) -> Self {
        Self::new(bounds.0, bounds.1)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
