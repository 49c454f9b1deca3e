use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Offset-carrying layouts tried after RFC 3339.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-time layouts without offset.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, tried in order. Month-first precedes day-first.
const DATE_FORMATS: [&str; 13] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%b. %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %b. %Y",
];

/// Parse a stored publish date into a timestamp.
///
/// Accepts text dates in common layouts, MongoDB extended JSON
/// (`{"$date": ...}`, `{"$numberLong": ...}`), and bare integers as epoch
/// milliseconds. Returns `None` for anything else.
pub fn parse_publish_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(text) => parse_date_text(text),
        Value::Number(number) => number.as_i64().and_then(from_epoch_millis),
        Value::Object(map) => {
            if let Some(inner) = map.get("$date") {
                return parse_publish_date(inner);
            }
            map.get("$numberLong")
                .and_then(Value::as_str)
                .and_then(|millis| millis.trim().parse::<i64>().ok())
                .and_then(from_epoch_millis)
        }
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    }
}

/// Parse a textual date with a permissive set of layouts.
///
/// Offsets are honored by keeping the wall-clock time they describe.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(text, format) {
            return Some(parsed.naive_local());
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}
