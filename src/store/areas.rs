//! Typed mapping between [`CircularGeoFence`] and rows of the `areas` sheet.

use crate::model::geofence::{CircularGeoFence, LatLng};
use crate::store::cell::{cell_number, cell_text};
use crate::store::sheet::SheetStore;
use serde_json::Value;
use tracing::error;

pub const SHEET: &str = "areas";
pub const KEY_COLUMN: &str = "id";

const HEADER: [&str; 7] = [
    "id",
    "name",
    "centerLat",
    "centerLng",
    "radius",
    "description",
    "color",
];

fn field_cell(area: &CircularGeoFence, column: &str) -> Option<Value> {
    match column {
        "id" => Some(Value::String(area.id.clone())),
        "name" => Some(Value::String(area.name.clone())),
        "centerLat" => Some(Value::from(area.center.lat)),
        "centerLng" => Some(Value::from(area.center.lng)),
        "radius" => Some(Value::from(area.radius)),
        "description" => Some(Value::String(area.description.clone())),
        "color" => Some(Value::String(area.color.clone())),
        _ => None,
    }
}

pub fn add(store: &SheetStore, area: &CircularGeoFence) -> bool {
    if !store.ensure_table(SHEET, &HEADER) {
        return false;
    }
    let Some(header) = store.header(SHEET) else {
        return false;
    };

    let mut row = vec![Value::Null; header.len()];
    for (index, column) in header.iter().enumerate() {
        let Some(column) = column.as_str() else { continue };
        if let Some(cell) = field_cell(area, column) {
            row[index] = cell;
        }
    }

    store.append(SHEET, row)
}

pub fn list(store: &SheetStore) -> Vec<CircularGeoFence> {
    let grid = store.read_all(SHEET);
    let Some((header, rows)) = grid.split_first() else {
        return Vec::new();
    };

    let Some(id_index) = SheetStore::column_index(header, KEY_COLUMN) else {
        error!(sheet = SHEET, column = KEY_COLUMN, "Key column missing, abandoning read");
        return Vec::new();
    };
    let name_index = SheetStore::column_index(header, "name");
    let lat_index = SheetStore::column_index(header, "centerLat");
    let lng_index = SheetStore::column_index(header, "centerLng");
    let radius_index = SheetStore::column_index(header, "radius");
    let description_index = SheetStore::column_index(header, "description");
    let color_index = SheetStore::column_index(header, "color");

    rows.iter()
        .map(|row| CircularGeoFence {
            id: cell_text(row, Some(id_index)),
            name: cell_text(row, name_index),
            center: LatLng {
                lat: cell_number(row, lat_index).unwrap_or(0.0),
                lng: cell_number(row, lng_index).unwrap_or(0.0),
            },
            radius: cell_number(row, radius_index).unwrap_or(0.0),
            description: cell_text(row, description_index),
            color: cell_text(row, color_index),
        })
        .collect()
}

pub fn delete(store: &SheetStore, area_id: &str) -> bool {
    store.delete_by_key(SHEET, KEY_COLUMN, area_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemorySheetBackend;
    use std::sync::Arc;

    fn store() -> SheetStore {
        SheetStore::new(Arc::new(MemorySheetBackend::default()))
    }

    fn north_fence() -> CircularGeoFence {
        CircularGeoFence {
            id: "a1".to_string(),
            name: "North".to_string(),
            center: LatLng { lat: 35.1, lng: 139.1 },
            radius: 50.0,
            description: String::new(),
            color: "#fff".to_string(),
        }
    }

    #[test]
    fn add_then_list_returns_the_exact_record() {
        let store = store();
        assert!(add(&store, &north_fence()));
        assert_eq!(list(&store), vec![north_fence()]);
    }

    #[test]
    fn delete_by_id_reports_whether_a_row_went_away() {
        let store = store();
        add(&store, &north_fence());

        assert!(!delete(&store, "a2"));
        assert_eq!(list(&store).len(), 1);

        assert!(delete(&store, "a1"));
        assert!(list(&store).is_empty());
    }

    #[test]
    fn numeric_cells_written_as_text_still_read() {
        let store = store();
        store.ensure_table(SHEET, &HEADER);
        store.append(
            SHEET,
            vec![
                serde_json::json!("a9"),
                serde_json::json!("South"),
                serde_json::json!("34.9"),
                serde_json::json!("139.0"),
                serde_json::json!("25"),
                serde_json::json!(""),
                serde_json::json!("#abc"),
            ],
        );

        let areas = list(&store);
        assert_eq!(areas[0].center.lat, 34.9);
        assert_eq!(areas[0].radius, 25.0);
    }
}
