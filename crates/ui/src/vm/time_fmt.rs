use chrono::{DateTime, NaiveDate, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Long form used on detail pages, e.g. "March 25, 2025".
#[must_use]
pub fn format_long_date(value: NaiveDate) -> String {
    value.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    #[test]
    fn formats_minutes_in_utc() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13 UTC");
    }

    #[test]
    fn formats_dates_short_and_long() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date(date), "2025-03-05");
        assert_eq!(format_long_date(date), "March 5, 2025");
    }
}
