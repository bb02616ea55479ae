use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parses the submitted `date` (`%Y-%m-%d`) and `time` (`%H:%M`) into the
/// scheduled start. An empty time means the start of the day.
pub fn parse_schedule(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = if time.trim().is_empty() {
        NaiveTime::MIN
    } else {
        NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?
    };
    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_date_and_time() {
        let parsed = parse_schedule("2024-04-15", "09:00").expect("Failed to parse schedule");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 4, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_empty_time_means_start_of_day() {
        let parsed = parse_schedule("2024-04-15", "  ").expect("Failed to parse schedule");
        assert_eq!(parsed.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_schedule("April 15, 2024", "09:00").is_none());
        assert!(parse_schedule("2024-04-15", "9 AM").is_none());
        assert!(parse_schedule("", "").is_none());
    }
}
