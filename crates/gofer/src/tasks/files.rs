//! Plain-file tasks: sender extraction, log collection, markdown conversion.

use std::ffi::OsString;
use std::fs;

use crate::store::DataStore;
use crate::tasks::TaskReport;
use crate::Result;

const LAST_LOG_LINES: usize = 10;

/// Copy the first line of `email.txt` into `email-sender.txt`.
pub(crate) fn extract_sender_email(store: &DataStore) -> Result<TaskReport> {
    let input = store.path("email.txt");
    if !input.is_file() {
        return Ok(TaskReport::error("File not found"));
    }

    let content = fs::read_to_string(&input)?;
    let sender = content.lines().next().unwrap_or_default().trim();
    fs::write(store.path("email-sender.txt"), sender)?;

    Ok(TaskReport::success("Email extracted"))
}

/// Copy the last lines of the lexicographically-last file under `logs/`
/// into `logs-recent.txt`, line terminators preserved.
pub(crate) fn extract_logs(store: &DataStore) -> Result<TaskReport> {
    let logs_dir = store.path("logs");
    if !logs_dir.is_dir() {
        return Ok(TaskReport::error("Logs directory not found"));
    }

    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(&logs_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name());
        }
    }
    names.sort();

    let latest = match names.pop() {
        Some(name) => name,
        None => return Ok(TaskReport::error("No logs available")),
    };

    let content = fs::read_to_string(logs_dir.join(latest))?;
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let start = lines.len().saturating_sub(LAST_LOG_LINES);
    fs::write(store.path("logs-recent.txt"), lines[start..].concat())?;

    Ok(TaskReport::success("Logs extracted"))
}

/// Wrap `format.md` in an HTML shell, turning newlines into `<br>` tags.
pub(crate) fn convert_markdown_to_html(store: &DataStore) -> Result<TaskReport> {
    let input = store.path("format.md");
    if !input.is_file() {
        return Ok(TaskReport::error("File not found"));
    }

    let markdown = fs::read_to_string(&input)?;
    let html = format!("<html><body>{}</body></html>", markdown.replace('\n', "<br>"));
    fs::write(store.path("converted.html"), html)?;

    Ok(TaskReport::success("Markdown converted to HTML"))
}
