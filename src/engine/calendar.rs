//! Day index calculation
//!
//! The daily puzzle is seeded by the number of calendar days since a fixed
//! epoch. Only the calendar date matters, never the time of day.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};

/// First day of the puzzle (day number 0)
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 6) {
    Some(date) => date,
    None => panic!("epoch is a valid date"),
};

/// Number of calendar days between [`EPOCH`] and `date`
///
/// Negative for dates before the epoch.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use piramit::engine::calendar::day_number;
///
/// assert_eq!(day_number(NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()), 0);
/// assert_eq!(day_number(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()), 23);
/// ```
#[must_use]
pub fn day_number(date: NaiveDate) -> i32 {
    // Range of NaiveDate keeps this well inside i32
    date.signed_duration_since(EPOCH).num_days() as i32
}

/// Day number of the local calendar date of a timestamp
#[must_use]
pub fn day_number_at<Tz: TimeZone>(moment: &DateTime<Tz>) -> i32 {
    day_number(moment.date_naive())
}

/// Today's local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar date before `date`
#[must_use]
pub fn yesterday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// Storage key for a calendar date, `YYYY-MM-DD`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use piramit::engine::calendar::date_key;
///
/// assert_eq!(date_key(NaiveDate::from_ymd_opt(2026, 9, 4).unwrap()), "2026-09-04");
/// ```
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a `YYYY-MM-DD` key back into a date
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(day_number(EPOCH), 0);
    }

    #[test]
    fn days_after_epoch() {
        assert_eq!(day_number(date(2026, 2, 7)), 1);
        assert_eq!(day_number(date(2026, 10, 14)), 250);
        assert_eq!(day_number(date(2027, 2, 6)), 365);
    }

    #[test]
    fn days_before_epoch_are_negative() {
        assert_eq!(day_number(date(2026, 2, 5)), -1);
        assert_eq!(day_number(date(2025, 2, 6)), -365);
    }

    #[test]
    fn time_of_day_is_ignored() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let morning = offset
            .from_local_datetime(
                &date(2026, 5, 1).and_time(NaiveTime::from_hms_opt(0, 0, 1).unwrap()),
            )
            .unwrap();
        let night = offset
            .from_local_datetime(
                &date(2026, 5, 1).and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()),
            )
            .unwrap();
        assert_eq!(day_number_at(&morning), day_number_at(&night));
    }

    #[test]
    fn local_date_decides_not_utc() {
        // 22:30 UTC on May 1 is already May 2 at UTC+3
        let utc = Utc.from_utc_datetime(
            &date(2026, 5, 1).and_time(NaiveTime::from_hms_opt(22, 30, 0).unwrap()),
        );
        let istanbul = utc.with_timezone(&FixedOffset::east_opt(3 * 3600).unwrap());
        assert_eq!(day_number_at(&istanbul), day_number_at(&utc) + 1);
    }

    #[test]
    fn day_number_is_monotonic() {
        let mut previous = day_number(date(2025, 12, 25));
        let mut current = date(2025, 12, 26);
        for _ in 0..800 {
            let n = day_number(current);
            assert_eq!(n, previous + 1);
            previous = n;
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn date_key_pads_fields() {
        assert_eq!(date_key(date(2026, 2, 6)), "2026-02-06");
        assert_eq!(date_key(date(2026, 12, 31)), "2026-12-31");
    }

    #[test]
    fn date_key_parses_back() {
        let d = date(2027, 1, 9);
        assert_eq!(parse_date_key(&date_key(d)), Some(d));
        assert_eq!(parse_date_key("not-a-date"), None);
    }

    #[test]
    fn yesterday_crosses_month_boundary() {
        assert_eq!(yesterday_of(date(2026, 3, 1)), date(2026, 2, 28));
    }
}
