use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve an explicit `YYYY-MM-DD` argument to a timestamp at midnight.
pub fn parse_date_to_datetime(s: &str) -> Option<NaiveDateTime> {
    parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}
