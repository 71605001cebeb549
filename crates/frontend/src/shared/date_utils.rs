//! Date helpers shared by lists, filters and forms.

use chrono::NaiveDate;

pub const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// "2024-03-15" -> "15.03.2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn format_opt_date(date: Option<&NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Value for `<input type="date">`.
pub fn to_iso(date: &NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Accepts `yyyy-mm-dd` (what date inputs emit); blank yields `None`.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&d(2024, 3, 15)), "15.03.2024");
        assert_eq!(format_opt_date(None), "");
        assert_eq!(format_opt_date(Some(&d(2024, 12, 31))), "31.12.2024");
    }

    #[test]
    fn test_iso_round_trip() {
        assert_eq!(to_iso(&d(2024, 1, 5)), "2024-01-05");
        assert_eq!(parse_iso(" 2024-01-05 "), Some(d(2024, 1, 5)));
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("15.03.2024"), None);
    }
}
