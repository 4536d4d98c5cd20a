//! Weekday counting over a file of ISO dates.

use std::fs;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::store::DataStore;
use crate::tasks::TaskReport;
use crate::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Count the lines of `dates.txt` that fall on a Wednesday. Lines that do
/// not parse as `YYYY-MM-DD` are skipped, not reported.
pub(crate) fn count_wednesdays(store: &DataStore) -> Result<TaskReport> {
    let input = store.path("dates.txt");
    if !input.is_file() {
        return Ok(TaskReport::error("File not found"));
    }

    let content = match fs::read_to_string(&input) {
        Ok(content) => content,
        Err(err) => return Ok(TaskReport::error(err.to_string())),
    };

    let count = content
        .lines()
        .filter_map(|line| NaiveDate::parse_from_str(line.trim(), DATE_FORMAT).ok())
        .filter(|date| date.weekday() == Weekday::Wed)
        .count() as u64;

    Ok(TaskReport::count(count))
}
