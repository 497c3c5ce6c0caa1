use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Format the feed timestamp in the es-AR medium style, local time.
///
/// Absent values render as `not_available`; values that are not RFC 3339
/// are shown as received.
pub fn format_last_updated(raw: Option<&str>, not_available: &str) -> String {
    format_last_updated_in(raw, not_available, &Local)
}

pub fn format_last_updated_in<Tz: TimeZone>(raw: Option<&str>, not_available: &str, tz: &Tz) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return not_available.to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => format_es_ar(&parsed.with_timezone(tz)),
        Err(_) => raw.to_string(),
    }
}

fn format_es_ar<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {} {}, {:02}:{:02}:{:02}",
        dt.day(),
        MONTHS_ES[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}
