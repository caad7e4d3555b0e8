#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::{reference_now, utc};

    #[test]
    fn truncations() {
        let now = reference_now();
        assert_eq!(now.start_of_year(), utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(now.start_of_month(), utc(2024, 7, 1, 0, 0, 0));
        // 2024-07-18 is a thursday
        assert_eq!(now.start_of_week(), utc(2024, 7, 15, 0, 0, 0));
        assert_eq!(now.start_of_day(), utc(2024, 7, 18, 0, 0, 0));
        assert_eq!(now.start_of_hour(), utc(2024, 7, 18, 13, 0, 0));
        assert_eq!(now.start_of_minute(), utc(2024, 7, 18, 13, 47, 0));
        assert_eq!(now.start_of_second(), utc(2024, 7, 18, 13, 47, 21));
    }

    #[test]
    fn start_of_week() {
        // monday remains monday
        let monday = utc(2024, 7, 15, 8, 0, 0);
        assert_eq!(monday.start_of_week(), utc(2024, 7, 15, 0, 0, 0));
        // sunday goes back to previous monday, across month and year
        let sunday = utc(2023, 12, 31, 23, 59, 59);
        assert_eq!(sunday.start_of_week(), utc(2023, 12, 25, 0, 0, 0));
        let tuesday = utc(2024, 1, 2, 0, 0, 1);
        assert_eq!(tuesday.start_of_week(), utc(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn start_of_week_uses_utc_days() {
        // already monday in TAI, still sunday in UTC
        let sunday = utc(2024, 7, 14, 23, 59, 50);
        assert_eq!(sunday.start_of_week(), utc(2024, 7, 8, 0, 0, 0));
        let gpst = sunday.to_time_scale(TimeScale::GPST);
        assert_eq!(gpst.start_of_week(), utc(2024, 7, 8, 0, 0, 0));
        assert_eq!(gpst.start_of_week().time_scale, TimeScale::GPST);
        // across the 2016-12-31 leap second
        let t = utc(2017, 1, 1, 0, 0, 0);
        assert_eq!(t.start_of_week(), utc(2016, 12, 26, 0, 0, 0));
    }

    #[test]
    fn truncations_preserve_timescale() {
        let t = Epoch::from_gregorian_utc_at_noon(2024, 5, 5).to_time_scale(TimeScale::GST);
        let truncated = t.start_of_day();
        assert_eq!(truncated.time_scale, TimeScale::GST);
        assert_eq!(truncated, utc(2024, 5, 5, 0, 0, 0));
    }

    #[test]
    fn next_and_previous() {
        let t = utc(2024, 3, 31, 10, 30, 0);
        assert_eq!(t.next_by(CalendarUnit::Year), utc(2025, 3, 31, 10, 30, 0));
        assert_eq!(t.next_by(CalendarUnit::Month), utc(2024, 4, 30, 10, 30, 0));
        assert_eq!(t.previous_by(CalendarUnit::Month), utc(2024, 2, 29, 10, 30, 0));
        assert_eq!(t.next_by(CalendarUnit::Week), utc(2024, 4, 7, 10, 30, 0));
        assert_eq!(t.next_by(CalendarUnit::Minute), utc(2024, 3, 31, 10, 31, 0));
        assert_eq!(t.previous_by(CalendarUnit::Second), utc(2024, 3, 31, 10, 29, 59));
        assert_eq!(t.tomorrow(), utc(2024, 4, 1, 10, 30, 0));
        assert_eq!(t.yesterday(), utc(2024, 3, 30, 10, 30, 0));
    }

    #[test]
    fn day_and_month_intervals() {
        let t = utc(2024, 2, 10, 17, 0, 0);

        let day = t.day_interval();
        assert_eq!(day.start(), utc(2024, 2, 10, 0, 0, 0));
        assert_eq!(day.end(), utc(2024, 2, 11, 0, 0, 0));
        assert!(day.contains(t));

        let month = t.month_interval();
        assert_eq!(month.start(), utc(2024, 2, 1, 0, 0, 0));
        assert_eq!(month.end(), utc(2024, 3, 1, 0, 0, 0));
        assert_eq!(month.walk(CalendarUnit::Day).count(), 29);
    }
}
