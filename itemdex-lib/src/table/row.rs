//! Sparse row cells keyed by column ordinal

use std::collections::BTreeMap;

use serde::Serialize;

/// Cell values for one row, keyed by column ordinal.
///
/// Rows are sparse: an item that lacks an attribute has no entry for
/// that ordinal and renders as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<usize, String>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a cell value under `ordinal`, replacing any previous
    /// value.
    pub fn set(&mut self, ordinal: usize, value: impl Into<String>) {
        self.cells.insert(ordinal, value.into());
    }

    /// Cell text under `ordinal`, empty for absent cells.
    pub fn cell(&self, ordinal: usize) -> &str {
        self.cells.get(&ordinal).map(String::as_str).unwrap_or("")
    }

    /// Cell value under `ordinal`, if the row carries one.
    pub fn get(&self, ordinal: usize) -> Option<&str> {
        self.cells.get(&ordinal).map(String::as_str)
    }

    /// Occupied cells in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cells.iter().map(|(ordinal, value)| (*ordinal, value.as_str()))
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cells_render_empty() {
        let mut row = Row::new();
        row.set(2, "10");
        assert_eq!(row.cell(2), "10");
        assert_eq!(row.cell(1), "");
        assert_eq!(row.get(1), None);
    }

    #[test]
    fn test_set_replaces_existing_cell() {
        let mut row = Row::new();
        row.set(1, "a");
        row.set(1, "b");
        assert_eq!(row.cell(1), "b");
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_iter_walks_ordinals_in_order() {
        let mut row = Row::new();
        row.set(3, "c");
        row.set(1, "a");
        let cells: Vec<(usize, &str)> = row.iter().collect();
        assert_eq!(cells, [(1, "a"), (3, "c")]);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut row = Row::new();
        row.set(1, "10");
        row.set(4, "fire");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"1": "10", "4": "fire"}));
    }
}
