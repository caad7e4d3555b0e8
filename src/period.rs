//! Calendar-aware amounts of time
use std::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use hifitime::{Duration, Epoch, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar;

/// [Period] is an amount of time expressed in calendar fields.
/// Unlike [Duration], a [Period] does not have a fixed length:
/// one month spans 28 to 31 days depending on where it is applied.
///
/// Applying a [Period] to an [Epoch] applies years and months first
/// (clamping the day of month), then weeks and days (preserving
/// the time of day), then the exact fields.
///
/// [Period] arithmetic saturates at the `i64` bounds, field by field.
/// ```
/// use timeframe::prelude::*;
///
/// let t0 = Epoch::from_gregorian_utc_at_midnight(2024, 1, 31);
/// assert_eq!(t0 + 1.month_period(), Epoch::from_gregorian_utc_at_midnight(2024, 2, 29));
/// assert_eq!(t0 + 1.day_period() * 3, Epoch::from_gregorian_utc_at_midnight(2024, 2, 3));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
}

impl Period {
    /// Empty [Period]
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        millis: 0,
    };
    /// Builds a [Period] of `n` years
    pub fn years(n: i64) -> Self {
        Self {
            years: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` months
    pub fn months(n: i64) -> Self {
        Self {
            months: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` weeks
    pub fn weeks(n: i64) -> Self {
        Self {
            weeks: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` days
    pub fn days(n: i64) -> Self {
        Self {
            days: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` hours
    pub fn hours(n: i64) -> Self {
        Self {
            hours: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` minutes
    pub fn minutes(n: i64) -> Self {
        Self {
            minutes: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` seconds
    pub fn seconds(n: i64) -> Self {
        Self {
            seconds: n,
            ..Self::ZERO
        }
    }
    /// Builds a [Period] of `n` milliseconds
    pub fn millis(n: i64) -> Self {
        Self {
            millis: n,
            ..Self::ZERO
        }
    }
    /// Returns true if applying self does not move time
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
    /// Returns exact part of self, as a [Duration]
    fn exact_duration(&self) -> Duration {
        Unit::Hour * self.hours
            + Unit::Minute * self.minutes
            + Unit::Second * self.seconds
            + Unit::Millisecond * self.millis
    }
    /// Converts self to an exact [Duration], counting weeks as 7 days
    /// and days as 24 hours. Returns None when self holds years or months,
    /// which do not have a standard length.
    pub fn to_standard_duration(&self) -> Option<Duration> {
        if self.years != 0 || self.months != 0 {
            None
        } else {
            Some(Unit::Week * self.weeks + Unit::Day * self.days + self.exact_duration())
        }
    }
    /// Returns `epoch` shifted by self
    pub fn after(&self, epoch: Epoch) -> Epoch {
        epoch + *self
    }
    /// Returns `epoch` shifted backwards by self
    pub fn before(&self, epoch: Epoch) -> Epoch {
        epoch - *self
    }
}

impl Add for Period {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            years: self.years.saturating_add(rhs.years),
            months: self.months.saturating_add(rhs.months),
            weeks: self.weeks.saturating_add(rhs.weeks),
            days: self.days.saturating_add(rhs.days),
            hours: self.hours.saturating_add(rhs.hours),
            minutes: self.minutes.saturating_add(rhs.minutes),
            seconds: self.seconds.saturating_add(rhs.seconds),
            millis: self.millis.saturating_add(rhs.millis),
        }
    }
}

impl Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1
    }
}

impl Sub for Period {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul<i64> for Period {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Self {
            years: self.years.saturating_mul(rhs),
            months: self.months.saturating_mul(rhs),
            weeks: self.weeks.saturating_mul(rhs),
            days: self.days.saturating_mul(rhs),
            hours: self.hours.saturating_mul(rhs),
            minutes: self.minutes.saturating_mul(rhs),
            seconds: self.seconds.saturating_mul(rhs),
            millis: self.millis.saturating_mul(rhs),
        }
    }
}

impl Mul<Period> for i64 {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl Add<Period> for Epoch {
    type Output = Epoch;
    fn add(self, rhs: Period) -> Epoch {
        let months = rhs.years.saturating_mul(12).saturating_add(rhs.months);
        let days = rhs.weeks.saturating_mul(7).saturating_add(rhs.days);
        let t = calendar::add_months(self, months);
        let t = calendar::add_days(t, days);
        let dt = rhs.exact_duration();
        if dt == Duration::ZERO {
            t
        } else {
            t + dt
        }
    }
}

impl Sub<Period> for Epoch {
    type Output = Epoch;
    fn sub(self, rhs: Period) -> Epoch {
        self + (-rhs)
    }
}

impl AddAssign<Period> for Epoch {
    fn add_assign(&mut self, rhs: Period) {
        *self = *self + rhs;
    }
}

impl SubAssign<Period> for Epoch {
    fn sub_assign(&mut self, rhs: Period) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Period {
    /// Formats self in ISO-8601 period notation, like `P1Y2M` or `PT1.5S`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        write!(f, "P")?;
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{}{}", value, designator)?;
            }
        }
        let total_millis = self.seconds.saturating_mul(1000).saturating_add(self.millis);
        if self.hours == 0 && self.minutes == 0 && total_millis == 0 {
            return Ok(());
        }
        write!(f, "T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if total_millis != 0 {
            let sign = if total_millis < 0 { "-" } else { "" };
            let abs = total_millis.unsigned_abs();
            let (secs, frac) = (abs / 1000, abs % 1000);
            if frac == 0 {
                write!(f, "{}{}S", sign, secs)?;
            } else {
                write!(f, "{}{}.{:03}S", sign, secs, frac)?;
            }
        }
        Ok(())
    }
}

/// Builds calendar [Period]s from integers, like `5.year_period()`.
///
/// Exact amounts are better described by [Duration]: use
/// [hifitime::TimeUnits] for those (`5.hours()`).
pub trait PeriodUnits: Copy {
    /// Self as a number of years
    fn year_period(self) -> Period;
    /// Self as a number of months
    fn month_period(self) -> Period;
    /// Self as a number of weeks
    fn week_period(self) -> Period;
    /// Self as a number of days
    fn day_period(self) -> Period;
    /// Self as a number of hours
    fn hour_period(self) -> Period;
    /// Self as a number of minutes
    fn minute_period(self) -> Period;
    /// Self as a number of seconds
    fn second_period(self) -> Period;
    /// Self as a number of milliseconds
    fn milli_period(self) -> Period;
}

impl PeriodUnits for i64 {
    fn year_period(self) -> Period {
        Period::years(self)
    }
    fn month_period(self) -> Period {
        Period::months(self)
    }
    fn week_period(self) -> Period {
        Period::weeks(self)
    }
    fn day_period(self) -> Period {
        Period::days(self)
    }
    fn hour_period(self) -> Period {
        Period::hours(self)
    }
    fn minute_period(self) -> Period {
        Period::minutes(self)
    }
    fn second_period(self) -> Period {
        Period::seconds(self)
    }
    fn milli_period(self) -> Period {
        Period::millis(self)
    }
}
