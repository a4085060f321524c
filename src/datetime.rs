use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Local calendar date as a date-input value, e.g. "2024-03-05".
pub fn date_string(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// Local clock time as a time-input value, e.g. "14:30".
pub fn time_string(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Merge a date-input value and a time-input value into one instant.
///
/// The time of day comes from `time`, the calendar day from `date`, both read
/// as local time. A blank or malformed half is taken from `fallback`. A local
/// time skipped by a DST change yields `fallback` unchanged.
pub fn combine(date: &str, time: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let local = fallback.with_timezone(&Local);
    let day = parse_date(date).unwrap_or_else(|| local.date_naive());
    let clock = parse_time(time).unwrap_or_else(|| local.time());

    match Local.from_local_datetime(&NaiveDateTime::new(day, clock)) {
        LocalResult::Single(ts) => ts.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => fallback,
    }
}
