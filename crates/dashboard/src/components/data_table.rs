//! Data table component types.
//!
//! These types define the header row of the shoe table.

use crate::storage::COLUMNS;

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether cells are right-aligned numbers.
    pub numeric: bool,
}

impl TableColumn {
    /// Create a new text column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            numeric: false,
        }
    }

    /// Mark the column as numeric.
    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

/// Columns of the shoe table, labelled with the data file's column names.
#[must_use]
pub fn shoe_columns() -> Vec<TableColumn> {
    COLUMNS
        .iter()
        .map(|&key| {
            let column = TableColumn::new(key, key);
            if matches!(key, "size_eu" | "price_idr") {
                column.numeric()
            } else {
                column
            }
        })
        .collect()
}
