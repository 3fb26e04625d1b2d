use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `Tuesday, March 4, 2025`
pub fn long_date(dt: DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y").to_string()
}

/// `2:30 PM`
pub fn short_time(dt: DateTime<Utc>) -> String {
    dt.format("%-I:%M %p").to_string()
}
