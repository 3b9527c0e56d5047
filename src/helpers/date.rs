//! Date display helpers

use chrono::NaiveDate;

/// Format a post date in long form, like "January 15, 2024".
pub fn full_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a post date relative to `today`. Recent dates read as elapsed
/// time; anything more than ten days old falls back to the long form.
pub fn relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();

    if days < 0 {
        return full_date(date);
    }

    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=7 => format!("{} days ago", days),
        8..=10 => {
            let remaining = days - 7;
            if remaining == 1 {
                "1 week, 1 day ago".to_string()
            } else {
                format!("1 week, {} days ago", remaining)
            }
        }
        _ => full_date(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_date_recent() {
        let today = day(2024, 1, 15);
        assert_eq!(relative_date(day(2024, 1, 15), today), "Today");
        assert_eq!(relative_date(day(2024, 1, 14), today), "1 day ago");
        assert_eq!(relative_date(day(2024, 1, 12), today), "3 days ago");
        assert_eq!(relative_date(day(2024, 1, 8), today), "7 days ago");
        assert_eq!(relative_date(day(2024, 1, 7), today), "1 week, 1 day ago");
        assert_eq!(relative_date(day(2024, 1, 6), today), "1 week, 2 days ago");
    }

    #[test]
    fn test_relative_date_falls_back_to_long_form() {
        let today = day(2024, 1, 15);
        assert_eq!(relative_date(day(2024, 1, 1), today), "January 1, 2024");
        // Future dates also show the plain date
        assert_eq!(relative_date(day(2024, 2, 1), today), "February 1, 2024");
    }

    #[test]
    fn test_full_date_no_zero_padding() {
        assert_eq!(full_date(day(2023, 6, 5)), "June 5, 2023");
    }
}
