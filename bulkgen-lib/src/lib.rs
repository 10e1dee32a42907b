#![allow(clippy::needless_return)]

mod categories;
pub mod markets;
mod survey;
mod template;
pub mod utils;
mod writer;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use categories::{extract_categories, is_host_campaign, match_column, MatchKind};
pub use markets::{generate, GeneratedTemplate, Market};
pub use survey::{CampaignValues, DuplicateEntry, Survey, SurveyError};
pub use template::{defaults, entity, match_type, TemplateRow, TEMPLATE_COLUMNS};
pub use writer::{csv_output_filename, output_filename, write_template_csv, write_template_xlsx};

pub const ERRORS_LOG_FILE: &str = "errors.log";
use std::fs::OpenOptions;
use std::io::Write;

use crate::utils::get_utc_iso_datetime;

/// Centralized function to write error messages to the errors log file
///
/// # Arguments
/// * `error_type` - A description of the error type/category (e.g., "Keyword Duplicate Check Error")
/// * `error_message` - The actual error message content
pub fn write_error_to_log(error_type: &str, error_message: &str) {
    let timestamp = get_utc_iso_datetime();
    let log_entry = format!("\n[{}] {}:\n{}\n", timestamp, error_type, error_message);

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(ERRORS_LOG_FILE)
    {
        let _ = writeln!(file, "{}", log_entry);
    }
}
