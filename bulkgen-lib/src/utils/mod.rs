mod datetime;
mod string;

pub use datetime::{get_local_datetime_with_format, get_utc_iso_datetime, today_start_date};
pub use string::{column_letter, normalize_string};
