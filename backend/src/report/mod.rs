//! Tabular projection of the result set
//!
//! One row per client with a fixed column order. External exporters (CSV,
//! spreadsheets) depend on this order and field set; do not reorder.

use crate::models::ServedRecord;
use serde::{Deserialize, Serialize};

/// Column headers, in output order
pub const TABLE_COLUMNS: [&str; 8] = [
    "id",
    "class",
    "arrival",
    "service_duration",
    "server",
    "service_start",
    "service_end",
    "wait",
];

/// One table row; time values are rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: usize,
    pub class: String,
    pub arrival: f64,
    pub service_duration: f64,
    pub server: usize,
    pub service_start: f64,
    pub service_end: f64,
    pub wait: f64,
}

impl TableRow {
    pub fn from_record(record: &ServedRecord) -> Self {
        let display = record.display();
        Self {
            id: record.id(),
            class: record.priority_class().label().to_string(),
            arrival: display.arrival,
            service_duration: display.service,
            server: record.server_id(),
            service_start: display.start,
            service_end: display.end,
            wait: display.wait,
        }
    }

    /// Cell values in `TABLE_COLUMNS` order
    pub fn cells(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.class.clone(),
            format!("{:.1}", self.arrival),
            format!("{:.1}", self.service_duration),
            self.server.to_string(),
            format!("{:.1}", self.service_start),
            format!("{:.1}", self.service_end),
            format!("{:.1}", self.wait),
        ]
    }
}

/// Project records into rows, ordered by client id
///
/// # Example
/// ```
/// use queue_simulator_core_rs::report::table_rows;
/// use queue_simulator_core_rs::{Client, ServedRecord};
///
/// let records = vec![
///     ServedRecord::new(Client::new(2, 3.0, 1.0), 1, 4.0),
///     ServedRecord::new(Client::new(1, 1.0, 3.0), 1, 1.0),
/// ];
/// let rows = table_rows(&records);
/// assert_eq!(rows[0].id, 1);
/// assert_eq!(rows[1].wait, 1.0);
/// ```
pub fn table_rows(records: &[ServedRecord]) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = records.iter().map(TableRow::from_record).collect();
    rows.sort_by_key(|row| row.id);
    rows
}
