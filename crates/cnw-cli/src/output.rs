// crates/cnw-cli/src/output.rs
//
// Output formatting utilities for the cnw CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use cnw_core::events::CollectionEvent;
use cnw_mint::Batch;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// One row of the batch table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BatchRow {
    #[tabled(rename = "Batch")]
    pub index: usize,
    #[tabled(rename = "Capacity")]
    pub capacity: u64,
    #[tabled(rename = "Tokens")]
    pub tokens: String,
    #[tabled(rename = "Metadata URI")]
    pub metadata_uri: String,
}

/// Build batch rows with each batch's token index range.
///
/// Total capacity may reach `u64::MAX`, so the range arithmetic never steps
/// past the last index.
pub fn batch_rows(batches: &[Batch]) -> Vec<BatchRow> {
    let mut next_first: Option<u64> = Some(1);
    batches
        .iter()
        .enumerate()
        .map(|(index, batch)| {
            let tokens = match next_first {
                Some(first) => {
                    let last = first.saturating_add(batch.capacity.saturating_sub(1));
                    next_first = last.checked_add(1);
                    format!("{}..={}", first, last)
                }
                None => "-".to_string(),
            };
            BatchRow {
                index,
                capacity: batch.capacity,
                tokens,
                metadata_uri: batch.metadata_uri.clone(),
            }
        })
        .collect()
}

/// One row of the event table.
#[derive(Debug, Clone, Tabled)]
pub struct EventRow {
    #[tabled(rename = "#")]
    pub seq: usize,
    #[tabled(rename = "Event")]
    pub event: String,
}

pub fn event_rows(events: &[CollectionEvent]) -> Vec<EventRow> {
    events
        .iter()
        .enumerate()
        .map(|(seq, event)| EventRow {
            seq,
            event: event.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_rows_ranges() {
        let batches = vec![
            Batch::new(5, "ipfs://abc").unwrap(),
            Batch::new(10, "ipfs://xyz").unwrap(),
        ];
        let rows = batch_rows(&batches);
        assert_eq!(rows[0].tokens, "1..=5");
        assert_eq!(rows[1].tokens, "6..=15");
        assert_eq!(rows[1].metadata_uri, "ipfs://xyz");
    }

    #[test]
    fn test_batch_rows_at_maximum_capacity() {
        let batches = vec![
            Batch::new(u64::MAX - 1, "ipfs://abc").unwrap(),
            Batch::new(1, "ipfs://xyz").unwrap(),
        ];
        let rows = batch_rows(&batches);
        assert_eq!(rows[0].tokens, format!("1..={}", u64::MAX - 1));
        assert_eq!(rows[1].tokens, format!("{}..={}", u64::MAX, u64::MAX));
    }

    #[test]
    fn test_format_table_contains_headers() {
        let rows = batch_rows(&[Batch::new(3, "ipfs://abc").unwrap()]);
        let table = format_table(&rows);
        assert!(table.contains("Metadata URI"));
        assert!(table.contains("ipfs://abc"));
    }

    #[test]
    fn test_format_json() {
        let rows = batch_rows(&[Batch::new(3, "ipfs://abc").unwrap()]);
        let json = format_json(&rows);
        assert!(json.contains("\"capacity\": 3"));
    }
}
