use chrono::prelude::*;

/// Parses a timestamp the way the persistence layer stores them.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2025-01-01T10:00:00Z`, `2025-01-01T12:00:00+02:00`)
/// - naive date time read as UTC (`2025-01-01T10:00`, `2025-01-01 10:00:00`)
/// - bare date at midnight UTC (`2025-01-01`)
/// - unix timestamp in millis (`1735725600000`)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Some(date) = parse_date(raw) {
        return date.and_hms_opt(0, 0, 0).map(|d| Utc.from_utc_datetime(&d));
    }

    raw.parse::<i64>().ok().and_then(from_millis)
}

/// Parses a bare `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parses a time of day, `HH:MM` or `HH:MM:SS`
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Combines a bare date with an optional time of day. A missing or
/// malformed time falls back to midnight UTC.
pub fn combine_date_time(date: &str, time: Option<&str>) -> Option<DateTime<Utc>> {
    let date = match parse_date(date) {
        Some(date) => date,
        // Some clients store a full timestamp in the date field
        None => return parse_timestamp(date),
    };
    let time = time
        .and_then(parse_time)
        .or_else(|| NaiveTime::from_hms_opt(0, 0, 0))?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

pub fn to_millis(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}
