use crate::core::strip_whitespace;
use crate::domain::model::{TimeFormat, TimeOfDay};
use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Renders `when` with a strftime-compatible format, e.g. `07:05` for the default.
pub fn format_time(when: &TimeOfDay, format: &TimeFormat) -> String {
    let mut rendered = String::new();
    // TimeFormat 建立時已驗證過，這裡不應失敗
    if write!(rendered, "{}", when.on_placeholder_date().format(format.as_str())).is_err() {
        tracing::warn!("Time format '{}' could not be rendered", format);
        rendered.clear();
    }
    rendered
}

/// Parses a string of the given strptime-compatible format into a [`TimeOfDay`].
///
/// All whitespace is removed before parsing. Date fields the format may contain
/// must form a real calendar date but are otherwise discarded, and time fields
/// it lacks default to zero. Returns `None` when the text does not match the
/// format.
pub fn parse_time_string(text: &str, format: &TimeFormat) -> Option<TimeOfDay> {
    let compact = strip_whitespace(text);

    let mut parsed = Parsed::new();
    if let Err(e) = parse(&mut parsed, &compact, StrftimeItems::new(format.as_str())) {
        tracing::debug!("'{}' does not match time format '{}': {}", compact, format, e);
        return None;
    }

    if !has_valid_date(&parsed) {
        tracing::debug!("'{}' names a date that does not exist", compact);
        return None;
    }

    // 未出現的欄位補 0；已解析的欄位不會被覆寫
    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);

    match parsed.to_naive_time() {
        Ok(time) => Some(TimeOfDay::from(time)),
        Err(e) => {
            tracing::debug!("'{}' is not a valid time of day: {}", compact, e);
            None
        }
    }
}

/// Checks the parsed year, month and day against the calendar, filling the
/// missing ones the way strptime does (1900-01-01, or 1904 for a bare Feb 29).
fn has_valid_date(parsed: &Parsed) -> bool {
    let (month, day) = (parsed.month(), parsed.day());
    if parsed.year().is_none() && parsed.year_mod_100().is_none() && month.is_none() && day.is_none() {
        return true;
    }

    let year = match (parsed.year(), parsed.year_mod_100()) {
        (Some(year), _) => year,
        // %y: 69-99 是 19xx，00-68 是 20xx
        (None, Some(yy)) if yy >= 69 => 1900 + yy,
        (None, Some(yy)) => 2000 + yy,
        (None, None) if month == Some(2) && day == Some(29) => 1904,
        (None, None) => 1900,
    };

    NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, s).unwrap()
    }

    fn fmt(pattern: &str) -> TimeFormat {
        TimeFormat::new(pattern).unwrap()
    }

    #[test]
    fn test_format_default() {
        assert_eq!(format_time(&hms(7, 5, 0), &TimeFormat::default()), "07:05");
        assert_eq!(format_time(&hms(23, 59, 59), &TimeFormat::default()), "23:59");
    }

    #[test]
    fn test_format_custom() {
        assert_eq!(format_time(&hms(7, 5, 9), &fmt("%H:%M:%S")), "07:05:09");
        assert_eq!(format_time(&hms(19, 30, 0), &fmt("%I:%M %p")), "07:30 PM");
        assert_eq!(format_time(&hms(6, 0, 0), &fmt("%Hh%M")), "06h00");
    }

    #[test]
    fn test_format_date_fields_use_placeholder_date() {
        assert_eq!(format_time(&hms(1, 2, 3), &fmt("%Y-%m-%d %H")), "1900-01-01 01");
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(parse_time_string("07:05", &TimeFormat::default()), Some(hms(7, 5, 0)));
        assert_eq!(parse_time_string("23:59", &TimeFormat::default()), Some(hms(23, 59, 0)));
    }

    #[test]
    fn test_parse_strips_all_whitespace() {
        assert_eq!(parse_time_string(" 0 7 : 0 5 \n", &TimeFormat::default()), Some(hms(7, 5, 0)));
    }

    #[test]
    fn test_parse_accepts_single_digit_fields() {
        assert_eq!(parse_time_string("7:5", &TimeFormat::default()), Some(hms(7, 5, 0)));
    }

    #[test]
    fn test_parse_mismatch_returns_none() {
        let default = TimeFormat::default();
        assert_eq!(parse_time_string("garbage", &default), None);
        assert_eq!(parse_time_string("", &default), None);
        assert_eq!(parse_time_string("24:00", &default), None);
        assert_eq!(parse_time_string("12:60", &default), None);
        assert_eq!(parse_time_string("12:30:15", &default), None);
        assert_eq!(parse_time_string("12-30", &default), None);
    }

    #[test]
    fn test_parse_with_seconds() {
        assert_eq!(parse_time_string("13:45:30", &fmt("%H:%M:%S")), Some(hms(13, 45, 30)));
    }

    #[test]
    fn test_parse_discards_date_fields() {
        assert_eq!(
            parse_time_string("2024-01-02T13:45", &fmt("%Y-%m-%dT%H:%M")),
            Some(hms(13, 45, 0))
        );
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        let format = fmt("%Y-%m-%dT%H:%M");
        assert_eq!(parse_time_string("2024-02-30T10:00", &format), None);
        assert_eq!(parse_time_string("2023-02-29T10:00", &format), None);
        assert_eq!(parse_time_string("2024-02-29T10:00", &format), Some(hms(10, 0, 0)));
    }

    #[test]
    fn test_parse_date_without_year_uses_strptime_defaults() {
        let format = fmt("%m-%dT%H:%M");
        assert_eq!(parse_time_string("02-29T06:00", &format), Some(hms(6, 0, 0)));
        assert_eq!(parse_time_string("04-31T06:00", &format), None);
        assert_eq!(parse_time_string("24-02-29T06:00", &fmt("%y-%m-%dT%H:%M")), Some(hms(6, 0, 0)));
        assert_eq!(parse_time_string("23-02-29T06:00", &fmt("%y-%m-%dT%H:%M")), None);
    }

    #[test]
    fn test_parse_space_in_format_matches_stripped_text() {
        // 輸入的空白已被移除，格式中的空白可以對應零個字元
        assert_eq!(parse_time_string("07:30 PM", &fmt("%I:%M %p")), Some(hms(19, 30, 0)));
        assert_eq!(parse_time_string("07:30PM", &fmt("%I:%M %p")), Some(hms(19, 30, 0)));
    }

    #[test]
    fn test_parse_strips_separator_controls() {
        assert_eq!(parse_time_string("07:\x1f05", &TimeFormat::default()), Some(hms(7, 5, 0)));
    }

    #[test]
    fn test_parse_missing_fields_default_to_zero() {
        assert_eq!(parse_time_string("30", &fmt("%M")), Some(hms(0, 30, 0)));
        assert_eq!(parse_time_string("9", &fmt("%H")), Some(hms(9, 0, 0)));
    }

    #[test]
    fn test_parse_twelve_hour_clock() {
        assert_eq!(parse_time_string("07:30PM", &fmt("%I:%M%p")), Some(hms(19, 30, 0)));
        assert_eq!(parse_time_string("12:15 AM", &fmt("%I:%M%p")), Some(hms(0, 15, 0)));
    }

    #[test]
    fn test_format_then_parse_preserves_time() {
        let format = fmt("%H:%M:%S");
        let t = hms(4, 3, 2);
        assert_eq!(parse_time_string(&format_time(&t, &format), &format), Some(t));
    }
}
