use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use rewards_admin::constants::NOT_AVAILABLE;
use time::{OffsetDateTime, UtcOffset};

pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-₹{:.2}", amount.abs())
    } else {
        format!("₹{:.2}", amount)
    }
}

pub fn format_signed(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }
    value
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn format_date(value: Option<&str>) -> String {
    match value {
        Some(v) => parse_datetime(v)
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| v.to_string()),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_datetime(value: Option<&str>) -> String {
    match value {
        Some(v) => parse_datetime(v)
            .map(|d| d.format("%d %b %Y, %H:%M").to_string())
            .unwrap_or_else(|| v.to_string()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Current time in the browser's offset, so "today" is the viewer's day.
pub fn now() -> OffsetDateTime {
    let local = Local::now();
    let utc = OffsetDateTime::from_unix_timestamp(local.timestamp()).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    match UtcOffset::from_whole_seconds(local.offset().local_minus_utc()) {
        Ok(offset) => utc.to_offset(offset),
        Err(_) => utc,
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "ACTIVE"
    } else {
        "INACTIVE"
    }
}
