//! Ticket-sales reporting against the local SQLite database.

use std::path::Path;

use rusqlite::Connection;

use crate::store::DataStore;
use crate::tasks::TaskReport;
use crate::Result;

const GOLD_COUNT_SQL: &str = "SELECT COUNT(*) FROM sales WHERE ticket_type = 'Gold'";

/// Count the Gold rows in `ticket-sales.db`. Query failures (missing
/// table, corrupt file) are reported with the database's own message.
pub(crate) fn gold_ticket_sales(store: &DataStore) -> Result<TaskReport> {
    let db_path = store.path("ticket-sales.db");
    if !db_path.is_file() {
        return Ok(TaskReport::error("Database not found"));
    }

    match query_gold_count(&db_path) {
        Ok(count) => Ok(TaskReport::gold_ticket_sales(count)),
        Err(err) => {
            tracing::error!(error = %err, "gold ticket query failed");
            Ok(TaskReport::error(err.to_string()))
        }
    }
}

fn query_gold_count(db_path: &Path) -> rusqlite::Result<u64> {
    let conn = Connection::open(db_path)?;
    let count: i64 = conn.query_row(GOLD_COUNT_SQL, [], |row| row.get(0))?;
    Ok(count as u64)
}
