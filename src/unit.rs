//! Calendar units used to walk through intervals
use std::{fmt, str::FromStr};

use hifitime::{Epoch, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{calendar, error::Error, period::Period};

/// [CalendarUnit] defines the step used to walk through an
/// [Interval](crate::interval::Interval).
///
/// Year, Month, Week and Day are calendar-aware steps, applied on the
/// UTC civil calendar. Hour, Minute, Second and Millisecond are exact
/// [Unit] durations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl CalendarUnit {
    /// All units, from largest to smallest
    pub const ALL: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Returns true if self does not have a fixed duration
    /// (subject to calendar rules).
    pub fn is_calendar(&self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Week | Self::Day)
    }

    /// Moves `epoch` by `n` units (backwards when `n` is negative)
    pub(crate) fn shift(&self, epoch: Epoch, n: i64) -> Epoch {
        match self {
            Self::Year => calendar::add_months(epoch, 12 * n),
            Self::Month => calendar::add_months(epoch, n),
            Self::Week => calendar::add_days(epoch, 7 * n),
            Self::Day => calendar::add_days(epoch, n),
            Self::Hour => epoch + Unit::Hour * n,
            Self::Minute => epoch + Unit::Minute * n,
            Self::Second => epoch + Unit::Second * n,
            Self::Millisecond => epoch + Unit::Millisecond * n,
        }
    }

    /// Returns `epoch` moved one unit forward.
    /// The returned [Epoch] is always strictly later.
    pub fn advance(&self, epoch: Epoch) -> Epoch {
        self.shift(epoch, 1)
    }

    /// Returns `epoch` moved one unit backwards.
    /// The returned [Epoch] is always strictly earlier.
    pub fn retreat(&self, epoch: Epoch) -> Epoch {
        self.shift(epoch, -1)
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Week => write!(f, "week"),
            Self::Day => write!(f, "day"),
            Self::Hour => write!(f, "hour"),
            Self::Minute => write!(f, "minute"),
            Self::Second => write!(f, "second"),
            Self::Millisecond => write!(f, "millisecond"),
        }
    }
}

impl FromStr for CalendarUnit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        match trimmed.as_str() {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "millisecond" | "milliseconds" | "ms" => Ok(Self::Millisecond),
            _ => Err(Error::UnknownCalendarUnit(s.to_string())),
        }
    }
}

impl From<CalendarUnit> for Period {
    fn from(unit: CalendarUnit) -> Self {
        match unit {
            CalendarUnit::Year => Period::years(1),
            CalendarUnit::Month => Period::months(1),
            CalendarUnit::Week => Period::weeks(1),
            CalendarUnit::Day => Period::days(1),
            CalendarUnit::Hour => Period::hours(1),
            CalendarUnit::Minute => Period::minutes(1),
            CalendarUnit::Second => Period::seconds(1),
            CalendarUnit::Millisecond => Period::millis(1),
        }
    }
}
