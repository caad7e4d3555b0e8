//! Proleptic gregorian calendar helpers.
//!
//! Calendar-aware shifts operate on the UTC civil calendar: the epoch is
//! decomposed in UTC, shifted, rebuilt and expressed back in its own
//! [TimeScale].
//!
//! Shifts saturate: a target date that [Epoch] can't represent
//! resolves to [Duration::MIN] or [Duration::MAX] in the input [TimeScale].
use hifitime::{is_gregorian_valid, Duration, Epoch, TimeScale, Unit, Weekday};

/// Returns number of days in given month (1..=12) of given year,
/// 0 when `month` is not valid.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    (28..=31)
        .rev()
        .find(|day| is_gregorian_valid(year, month, *day, 0, 0, 0, 0))
        .unwrap_or(0)
}

/// [Weekday] of the UTC civil day containing `epoch`
pub fn weekday(epoch: Epoch) -> Weekday {
    let (y, m, d, _, _, _, _) = decompose(epoch);
    // noon is far from any leap second and day boundary
    Epoch::from_gregorian_utc_at_noon(y, m, d).weekday_utc()
}

/// UTC civil decomposition (y, m, d, hh, mm, ss, ns) of given [Epoch],
/// whatever its [TimeScale].
pub(crate) fn decompose(epoch: Epoch) -> (i32, u8, u8, u8, u8, u8, u32) {
    epoch.to_gregorian_utc()
}

/// Rebuilds an [Epoch] from UTC civil fields, expressed in `ts`.
pub(crate) fn recompose(
    (y, m, d, hh, mm, ss, ns): (i32, u8, u8, u8, u8, u8, u32),
    ts: TimeScale,
) -> Epoch {
    match Epoch::maybe_from_gregorian_utc(y, m, d, hh, mm, ss, ns) {
        Ok(epoch) => epoch.to_time_scale(ts),
        Err(_) => {
            let bound = if y < 1900 {
                Duration::MIN
            } else {
                Duration::MAX
            };
            Epoch::from_duration(bound, ts)
        },
    }
}

/// Shifts `epoch` by `n` calendar months (negative `n` goes backwards).
/// The day of month is clamped to the last day of the target month,
/// time of day is preserved.
pub fn add_months(epoch: Epoch, n: i64) -> Epoch {
    if n == 0 {
        return epoch;
    }
    let (y, m, d, hh, mm, ss, ns) = decompose(epoch);
    let total = i64::from(y)
        .saturating_mul(12)
        .saturating_add(i64::from(m) - 1)
        .saturating_add(n);
    let year = total
        .div_euclid(12)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let month = (total.rem_euclid(12) + 1) as u8;
    let day = d.min(days_in_month(year, month));
    recompose((year, month, day, hh, mm, ss, ns), epoch.time_scale)
}

/// Shifts `epoch` by `n` civil days (negative `n` goes backwards),
/// preserving the time of day.
pub fn add_days(epoch: Epoch, n: i64) -> Epoch {
    if n == 0 {
        return epoch;
    }
    let (y, m, d, hh, mm, ss, ns) = decompose(epoch);
    // moving from noon, leap seconds can't push us into another day
    let noon = Epoch::from_gregorian_utc_at_noon(y, m, d) + Unit::Day * n;
    let (year, month, day, _, _, _, _) = decompose(noon);
    recompose((year, month, day, hh, mm, ss, ns), epoch.time_scale)
}
