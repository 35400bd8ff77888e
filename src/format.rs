use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NO_DUE_DATE: &str = "No due date";

const LONG_DATE: &str = "%B %-d, %Y";
const LONG_DATE_TIME: &str = "%B %d, %Y at %I:%M %p";

enum Parsed {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

fn parse(input: &str) -> Option<Parsed> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        // Keep the wall-clock time in the offset it was written with.
        return Some(Parsed::DateTime(dt.naive_local()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(Parsed::DateTime(dt));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(Parsed::Date)
}

/// Long-form date such as "April 5, 2024".
///
/// Empty input and the backend's "No due date" marker both render as
/// "No due date"; anything unparsable is returned as given.
pub fn format_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == NO_DUE_DATE {
        return NO_DUE_DATE.to_string();
    }
    match parse(trimmed) {
        Some(Parsed::DateTime(dt)) => dt.format(LONG_DATE).to_string(),
        Some(Parsed::Date(d)) => d.format(LONG_DATE).to_string(),
        None => input.to_string(),
    }
}

/// Long-form date with time of day, "April 05, 2024 at 03:30 PM".
pub fn format_due_time(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == NO_DUE_DATE {
        return NO_DUE_DATE.to_string();
    }
    match parse(trimmed) {
        Some(Parsed::DateTime(dt)) => dt.format(LONG_DATE_TIME).to_string(),
        Some(Parsed::Date(d)) => d.format(LONG_DATE).to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_timestamp_renders_long_date() {
        let formatted = format_date("2024-04-05T00:00:00Z");
        assert!(formatted.contains("April"));
        assert!(formatted.contains('5'));
        assert!(formatted.contains("2024"));
        assert_eq!(formatted, "April 5, 2024");
    }

    #[test]
    fn offset_timestamp_keeps_written_date() {
        assert_eq!(format_date("2024-12-31T23:59:00-05:00"), "December 31, 2024");
    }

    #[test]
    fn naive_and_date_only_inputs() {
        assert_eq!(format_date("2024-01-01T10:00:00"), "January 1, 2024");
        assert_eq!(format_date("2024-02-02"), "February 2, 2024");
    }

    #[test]
    fn missing_and_garbage_inputs() {
        assert_eq!(format_date(""), NO_DUE_DATE);
        assert_eq!(format_date("No due date"), NO_DUE_DATE);
        assert_eq!(format_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn due_time_includes_clock() {
        assert_eq!(
            format_due_time("2024-04-05T15:30:00Z"),
            "April 05, 2024 at 03:30 PM"
        );
        assert_eq!(format_due_time("2024-04-05"), "April 5, 2024");
    }
}
