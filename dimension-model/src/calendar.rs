use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Start of `date` in UTC.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Days elapsed from the start of `start` to `at`, including the fraction of a day.
pub fn fractional_days_since(start: NaiveDate, at: DateTime<Utc>) -> f64 {
    (at - midnight(start)).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Calendar day `offset` days after `start`, saturating at the end of chrono's range.
pub fn day_after(start: NaiveDate, offset: u32) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole days from `start` to `date`, negative when `date` is earlier.
pub fn day_offset(start: NaiveDate, date: NaiveDate) -> i64 {
    (date - start).num_days()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the current month in UTC.
pub fn current_month_start() -> NaiveDate {
    first_of_month(Utc::now().date_naive())
}

/// Short label used on the day strip and day ticks, e.g. `Jun 05`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Detail panel timestamp, e.g. `Jun 05, 2024 14:30`.
pub fn timestamp_label(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn fractional_days_counts_partial_days() {
        let at = Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap();
        assert_eq!(fractional_days_since(june(1), at), 4.5);
    }

    #[test]
    fn fractional_days_is_zero_at_start() {
        assert_eq!(fractional_days_since(june(1), midnight(june(1))), 0.0);
    }

    #[test]
    fn day_after_and_offset_agree() {
        let day = day_after(june(1), 29);
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(day_offset(june(1), day), 29);
        assert_eq!(day_offset(june(10), june(1)), -9);
    }

    #[test]
    fn day_after_crosses_month_boundary() {
        assert_eq!(
            day_after(june(30), 1),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
    }

    #[test]
    fn first_of_month_truncates() {
        assert_eq!(first_of_month(june(17)), june(1));
    }

    #[test]
    fn labels_use_short_month() {
        assert_eq!(day_label(june(5)), "Jun 05");
        let at = midnight(june(5)) + Duration::hours(14) + Duration::minutes(30);
        assert_eq!(timestamp_label(at), "Jun 05, 2024 14:30");
    }
}
