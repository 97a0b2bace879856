use crate::store::backend::{Grid, SheetBackend};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

/// Adapter over the tabular backend: create-with-header, full-scan read,
/// append, delete-by-key. Column positions are never assumed; every lookup
/// goes through the header row by name, so reordering columns in a sheet
/// does not break reads or writes.
///
/// Backend failures never escape this layer: they are logged and collapsed
/// to `false` / empty results, and the router turns those into
/// `success:false` envelopes.
#[derive(Clone)]
pub struct SheetStore {
    backend: Arc<dyn SheetBackend>,
}

impl SheetStore {
    pub fn new(backend: Arc<dyn SheetBackend>) -> Self {
        Self { backend }
    }

    /// Creates the sheet with its header row if it does not exist yet.
    pub fn ensure_table(&self, name: &str, header: &[&str]) -> bool {
        match self.backend.grid(name) {
            Ok(Some(_)) => true,
            Ok(None) => match self.backend.create_sheet(name, header) {
                Ok(()) => true,
                Err(e) => {
                    error!(error = %e, sheet = name, "Failed to create sheet");
                    false
                }
            },
            Err(e) => {
                error!(error = %e, sheet = name, "Failed to inspect sheet");
                false
            }
        }
    }

    /// Header row of the sheet, if the sheet exists.
    pub fn header(&self, name: &str) -> Option<Vec<Value>> {
        match self.backend.grid(name) {
            Ok(Some(grid)) => grid.into_iter().next(),
            Ok(None) => None,
            Err(e) => {
                error!(error = %e, sheet = name, "Failed to read sheet header");
                None
            }
        }
    }

    /// Full grid including the header row. A missing sheet or a sheet with
    /// only its header reads as an empty result set, never an error.
    pub fn read_all(&self, name: &str) -> Grid {
        match self.backend.grid(name) {
            Ok(Some(grid)) if grid.len() > 1 => grid,
            Ok(_) => Vec::new(),
            Err(e) => {
                error!(error = %e, sheet = name, "Failed to read sheet");
                Vec::new()
            }
        }
    }

    /// Linear search of the header row. Callers treat a missing non-key
    /// column as "skip this field"; only key columns abort an operation.
    pub fn column_index(header: &[Value], column: &str) -> Option<usize> {
        header.iter().position(|cell| cell.as_str() == Some(column))
    }

    /// Appends one row. No uniqueness or type validation is performed here;
    /// duplicate keys are a caller-level concern the source system never had.
    pub fn append(&self, name: &str, row: Vec<Value>) -> bool {
        match self.backend.append_row(name, row) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, sheet = name, "Failed to append row");
                false
            }
        }
    }

    /// Scans data rows top-down and removes the FIRST row whose key column
    /// equals `key_value` exactly. Returns whether a row was removed. A
    /// sheet without the key column is a failure, not a scan over garbage.
    pub fn delete_by_key(&self, name: &str, key_column: &str, key_value: &str) -> bool {
        let grid = match self.backend.grid(name) {
            Ok(Some(grid)) if grid.len() > 1 => grid,
            Ok(_) => return false,
            Err(e) => {
                error!(error = %e, sheet = name, "Failed to read sheet for delete");
                return false;
            }
        };

        let Some(key_index) = Self::column_index(&grid[0], key_column) else {
            error!(sheet = name, column = key_column, "Key column missing, aborting delete");
            return false;
        };

        for (row_index, row) in grid.iter().enumerate().skip(1) {
            if row.get(key_index).and_then(Value::as_str) == Some(key_value) {
                return match self.backend.delete_row(name, row_index) {
                    Ok(()) => true,
                    Err(e) => {
                        error!(error = %e, sheet = name, "Failed to delete row");
                        false
                    }
                };
            }
        }

        false
    }
}
