//! Typed mapping between [`StaffRecord`] and rows of the `employees` sheet.
//!
//! Writes place each field by looking the column up in the live header, so a
//! reordered sheet keeps working. Reads skip columns that have been dropped
//! from the sheet, except `employeeId`: without the key column the rows are
//! not addressable and the whole read is abandoned.

use crate::model::staff_record::StaffRecord;
use crate::store::cell::{
    cell_date, cell_optional_text, cell_text, format_sheet_date, optional_text,
};
use crate::store::sheet::SheetStore;
use serde_json::Value;
use tracing::error;

pub const SHEET: &str = "employees";
pub const KEY_COLUMN: &str = "employeeId";

const HEADER: [&str; 7] = [
    "employeeId",
    "name",
    "phone",
    "email",
    "department",
    "position",
    "hireDate",
];

fn field_cell(record: &StaffRecord, column: &str) -> Option<Value> {
    match column {
        "employeeId" => Some(Value::String(record.employee_id.clone())),
        "name" => Some(Value::String(record.name.clone())),
        "phone" => Some(optional_text(record.phone.as_deref())),
        "email" => Some(optional_text(record.email.as_deref())),
        "department" => Some(Value::String(record.department.clone())),
        "position" => Some(Value::String(record.position.clone())),
        "hireDate" => Some(match record.hire_date {
            Some(date) => Value::String(format_sheet_date(date)),
            None => Value::String(String::new()),
        }),
        _ => None,
    }
}

/// Appends one staff record, creating the sheet on first use. No uniqueness
/// check is made against existing rows.
pub fn add(store: &SheetStore, record: &StaffRecord) -> bool {
    if !store.ensure_table(SHEET, &HEADER) {
        return false;
    }
    let Some(header) = store.header(SHEET) else {
        return false;
    };

    let mut row = vec![Value::Null; header.len()];
    for (index, column) in header.iter().enumerate() {
        let Some(column) = column.as_str() else { continue };
        if let Some(cell) = field_cell(record, column) {
            row[index] = cell;
        }
    }

    store.append(SHEET, row)
}

/// Full scan of the `employees` sheet.
pub fn list(store: &SheetStore) -> Vec<StaffRecord> {
    let grid = store.read_all(SHEET);
    let Some((header, rows)) = grid.split_first() else {
        return Vec::new();
    };

    let Some(id_index) = SheetStore::column_index(header, KEY_COLUMN) else {
        error!(sheet = SHEET, column = KEY_COLUMN, "Key column missing, abandoning read");
        return Vec::new();
    };
    let name_index = SheetStore::column_index(header, "name");
    let phone_index = SheetStore::column_index(header, "phone");
    let email_index = SheetStore::column_index(header, "email");
    let department_index = SheetStore::column_index(header, "department");
    let position_index = SheetStore::column_index(header, "position");
    let hire_date_index = SheetStore::column_index(header, "hireDate");

    rows.iter()
        .map(|row| StaffRecord {
            employee_id: cell_text(row, Some(id_index)),
            name: cell_text(row, name_index),
            phone: cell_optional_text(row, phone_index),
            email: cell_optional_text(row, email_index),
            department: cell_text(row, department_index),
            position: cell_text(row, position_index),
            hire_date: cell_date(row, hire_date_index),
        })
        .collect()
}

/// First record with the given id, via full scan.
pub fn find(store: &SheetStore, employee_id: &str) -> Option<StaffRecord> {
    list(store).into_iter().find(|record| record.employee_id == employee_id)
}

/// Removes the first row with the given id; `false` if nothing matched.
pub fn delete(store: &SheetStore, employee_id: &str) -> bool {
    store.delete_by_key(SHEET, KEY_COLUMN, employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemorySheetBackend;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Arc;

    fn store() -> SheetStore {
        SheetStore::new(Arc::new(MemorySheetBackend::default()))
    }

    fn sample() -> StaffRecord {
        StaffRecord {
            employee_id: "emp100".to_string(),
            name: "Hanako Sato".to_string(),
            phone: Some("090-1234-5678".to_string()),
            email: None,
            department: "Field Operations".to_string(),
            position: "Surveyor".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2024, 4, 1),
        }
    }

    #[test]
    fn add_then_list_round_trips_the_record() {
        let store = store();
        assert!(add(&store, &sample()));

        let records = list(&store);
        assert_eq!(records, vec![sample()]);
    }

    #[test]
    fn hire_date_is_stored_as_slash_formatted_text() {
        let store = store();
        add(&store, &sample());

        let grid = store.read_all(SHEET);
        let hire_index = SheetStore::column_index(&grid[0], "hireDate").unwrap();
        assert_eq!(grid[1][hire_index], json!("2024/04/01"));
    }

    #[test]
    fn absent_optionals_are_empty_cells_and_read_back_absent() {
        let store = store();
        let record = StaffRecord { phone: None, hire_date: None, ..sample() };
        add(&store, &record);

        let grid = store.read_all(SHEET);
        let phone_index = SheetStore::column_index(&grid[0], "phone").unwrap();
        assert_eq!(grid[1][phone_index], json!(""));

        let read_back = &list(&store)[0];
        assert_eq!(read_back.phone, None);
        assert_eq!(read_back.hire_date, None);
    }

    #[test]
    fn reordered_columns_still_read_and_write_correctly() {
        let store = store();
        // A sheet whose operator dragged the columns around.
        store.ensure_table(SHEET, &["name", "hireDate", "employeeId", "department", "position"]);
        assert!(add(&store, &sample()));

        let records = list(&store);
        assert_eq!(records[0].employee_id, "emp100");
        assert_eq!(records[0].name, "Hanako Sato");
        assert_eq!(records[0].hire_date, NaiveDate::from_ymd_opt(2024, 4, 1));
        // Columns the sheet no longer carries read as absent, not as errors.
        assert_eq!(records[0].phone, None);
    }

    #[test]
    fn find_and_delete_address_rows_by_id() {
        let store = store();
        add(&store, &sample());
        add(&store, &StaffRecord { employee_id: "emp101".to_string(), ..sample() });

        assert_eq!(find(&store, "emp100").unwrap().employee_id, "emp100");
        assert!(find(&store, "emp999").is_none());

        assert!(delete(&store, "emp100"));
        assert!(!delete(&store, "emp100"));
        assert_eq!(list(&store).len(), 1);
    }
}
