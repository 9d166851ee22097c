use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Returned when the input cannot be read as a date
pub const NO_DATE: &str = "날짜 없음";

/// Relative Korean description of `target` measured from the current time.
pub fn format_relative_time(target: &str) -> String {
    format_relative_time_at(target, Utc::now())
}

/// Same as [`format_relative_time`] with an explicit `now`.
///
/// Buckets are elapsed durations truncated toward zero, not calendar
/// boundaries: 23 hours ago is still "23시간 전" even across midnight.
/// Truncation, unlike flooring, keeps future times symmetric with past
/// ones: 30 seconds ahead is "곧" and 30 hours ahead is "내일" (flooring
/// would give "내일" and "모레").
pub fn format_relative_time_at(target: &str, now: DateTime<Utc>) -> String {
    let Some(target) = parse_timestamp(target) else {
        return NO_DATE.to_string();
    };

    let diff = (now - target).num_milliseconds();
    let future = diff < 0;
    let minutes = diff / MINUTE_MS;
    let hours = diff / HOUR_MS;
    let days = diff / DAY_MS;

    match days {
        0 if hours == 0 => match (minutes.abs(), future) {
            (0, true) => "곧".to_string(),
            (0, false) => "방금 전".to_string(),
            (n, true) => format!("{n}분 후"),
            (n, false) => format!("{n}분 전"),
        },
        0 if future => format!("{}시간 후", hours.abs()),
        0 => format!("{}시간 전", hours.abs()),
        1 => "어제".to_string(),
        2 => "그저께".to_string(),
        -1 => "내일".to_string(),
        -2 => "모레".to_string(),
        n if n < 0 => format!("{}일 후", n.abs()),
        n => format!("{n}일 전"),
    }
}

/// Accepts RFC 3339, offset-less date-times (read as local time) and bare
/// dates (read as UTC midnight).
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
