use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

/// Display format used throughout the history views.
pub const HISTORY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Backend timestamps arrive either as RFC 3339 strings or bare dates.
pub fn parse_backend_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(instant.naive_local());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `DD/MM/YYYY` for history entries; unparsable input is shown as-is.
pub fn format_history_date(raw: &str) -> String {
    parse_backend_date(raw)
        .map(|dt| dt.format(HISTORY_DATE_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `DD/MM/YY à HH:mm` for the admin daily roster.
pub fn format_roster_time(raw: &str) -> String {
    parse_backend_date(raw)
        .map(|dt| dt.format("%d/%m/%y à %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_detection_matches_calendar() {
        // 2024-12-14 is a Saturday, 2024-12-15 a Sunday, 2024-12-16 a Monday.
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 12, 14).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 12, 16).unwrap()));
    }

    #[test]
    fn history_date_formats_rfc3339_timestamps() {
        assert_eq!(
            format_history_date("2024-12-12T08:30:00.000Z"),
            "12/12/2024"
        );
        assert_eq!(format_history_date("2024-12-12"), "12/12/2024");
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(format_history_date("pas-une-date"), "pas-une-date");
    }

    #[test]
    fn roster_time_includes_hour_and_minute() {
        assert_eq!(
            format_roster_time("2024-12-12T08:30:00.000Z"),
            "12/12/24 à 08:30"
        );
    }
}
