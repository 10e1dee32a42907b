use chrono::prelude::Local;

pub fn get_utc_iso_datetime() -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    return timestamp;
}

pub fn get_local_datetime_with_format(format: &str) -> String {
    return Local::now().format(format).to_string();
}

/// Campaign start date in the bulk-template format (e.g. 20260829)
pub fn today_start_date() -> String {
    return get_local_datetime_with_format("%Y%m%d");
}
