//! One way iCalendar (RFC 5545) export of a single `Event`.
//!
//! Export is user facing, so `encode` never fails: missing dates fall back
//! to "now" and a formatting failure yields a minimal generic calendar.

use crate::event::Event;
use chrono::{DateTime, Utc};
use std::fmt::{self, Write};

pub const PRODUCT_ID: &str = "-//JobTrail//Job Search Calendar//EN";
pub const MIME_TYPE: &str = "text/calendar";
/// Trigger of the alarm baked into exported files. This is independent of
/// the lead time the user configured for in-app reminders.
pub const ALARM_TRIGGER: &str = "-PT30M";

const UID_DOMAIN: &str = "jobtrail";
const MAX_LINE_OCTETS: usize = 75;
const CRLF: &str = "\r\n";

/// Escapes a TEXT value. Backslashes go first so the escapes added for
/// the other characters are not escaped again.
pub fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace(['\n', '\r'], "\\n")
}

/// `YYYYMMDDTHHMMSSZ` in UTC, fractional seconds dropped
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Folds a content line into chunks of at most 75 octets, continuation
/// lines start with a single space. Never splits a UTF-8 character.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;
    // The leading space of continuation lines counts towards their length
    let mut limit = MAX_LINE_OCTETS;
    for c in line.chars() {
        let len = c.len_utf8();
        if current_len + len > limit {
            folded.push_str(CRLF);
            folded.push(' ');
            current_len = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        folded.push(c);
        current_len += len;
    }
    folded
}

fn write_line(out: &mut String, name: &str, value: &str) -> fmt::Result {
    let line = format!("{}:{}", name, value);
    write!(out, "{}{}", fold_line(&line), CRLF)
}

fn try_encode(event: &Event, now: DateTime<Utc>) -> Result<String, fmt::Error> {
    let start = event.resolve_start().unwrap_or(now);
    let end = event.resolve_end(start);
    let title = escape_text(event.display_title());

    let mut out = String::with_capacity(512);
    write_line(&mut out, "BEGIN", "VCALENDAR")?;
    write_line(&mut out, "VERSION", "2.0")?;
    write_line(&mut out, "PRODID", PRODUCT_ID)?;
    write_line(&mut out, "CALSCALE", "GREGORIAN")?;
    write_line(&mut out, "METHOD", "PUBLISH")?;
    write_line(&mut out, "BEGIN", "VEVENT")?;
    write_line(
        &mut out,
        "UID",
        &format!("{}@{}", escape_text(event.id.as_str()), UID_DOMAIN),
    )?;
    write_line(&mut out, "DTSTAMP", &format_timestamp(&now))?;
    write_line(&mut out, "DTSTART", &format_timestamp(&start))?;
    write_line(&mut out, "DTEND", &format_timestamp(&end))?;
    write_line(&mut out, "SUMMARY", &title)?;
    if let Some(details) = event.details() {
        write_line(&mut out, "DESCRIPTION", &escape_text(details))?;
    }
    if let Some(location) = event.location() {
        write_line(&mut out, "LOCATION", &escape_text(location))?;
    }
    if let Some(event_type) = event.event_type.as_deref().filter(|t| !t.trim().is_empty()) {
        write_line(&mut out, "CATEGORIES", &escape_text(&event_type.to_uppercase()))?;
    }
    write_line(&mut out, "BEGIN", "VALARM")?;
    write_line(&mut out, "ACTION", "DISPLAY")?;
    write_line(&mut out, "TRIGGER", ALARM_TRIGGER)?;
    write_line(&mut out, "DESCRIPTION", &format!("Reminder: {}", title))?;
    write_line(&mut out, "END", "VALARM")?;
    write_line(&mut out, "END", "VEVENT")?;
    write_line(&mut out, "END", "VCALENDAR")?;
    Ok(out)
}

/// Minimal valid calendar used when an event could not be encoded
pub fn fallback_document(now: DateTime<Utc>) -> String {
    let stamp = format_timestamp(&now);
    let end = format_timestamp(
        &now
            .checked_add_signed(chrono::Duration::hours(1))
            .unwrap_or(now),
    );
    [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODUCT_ID),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@{}", crate::ID::new(), UID_DOMAIN),
        format!("DTSTAMP:{}", stamp),
        format!("DTSTART:{}", stamp),
        format!("DTEND:{}", end),
        "SUMMARY:Event".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
        String::new(),
    ]
    .join(CRLF)
}

/// Encodes `event` as an iCalendar document. `now` is used for DTSTAMP
/// and for every timestamp the event does not provide.
pub fn encode(event: &Event, now: DateTime<Utc>) -> String {
    try_encode(event, now).unwrap_or_else(|_| fallback_document(now))
}

/// Download name of the exported file, `{title}.ics`
pub fn ics_filename(event: &Event) -> String {
    let name: String = event
        .title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if name.is_empty() {
        "event.ics".into()
    } else {
        format!("{}.ics", name)
    }
}
