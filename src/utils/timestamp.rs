use chrono::{DateTime, Local, TimeZone};

const SUBMISSION_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Local wall-clock time as stored in the `date` column of submissions.
pub fn submission_date() -> String {
    format_submission_date(&Local::now())
}

pub fn format_submission_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(SUBMISSION_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn renders_microseconds() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(8, 5, 7, 42)
            .unwrap()
            .and_utc();

        assert_eq!(format_submission_date(&at), "2024-03-09 08:05:07.000042");
    }

    #[test]
    fn current_date_parses_back() {
        let now = submission_date();
        assert!(NaiveDateTime::parse_from_str(&now, SUBMISSION_FORMAT).is_ok());
    }
}
