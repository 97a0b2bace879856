//! Cell coercion helpers shared by the typed sheet mappings.
//!
//! Sheet cells are loosely typed: a column may hold strings, numbers or
//! empty values depending on how the row was written. Readers coerce rather
//! than fail, except where a caller decides a column is mandatory.

use chrono::NaiveDate;
use serde_json::Value;

/// Dates are stored in sheets as `yyyy/mm/dd` text, truncating time of day.
const SHEET_DATE_FORMAT: &str = "%Y/%m/%d";

pub fn format_sheet_date(date: NaiveDate) -> String {
    date.format(SHEET_DATE_FORMAT).to_string()
}

pub fn parse_sheet_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), SHEET_DATE_FORMAT).ok()
}

/// Absent optional values are written as an empty string, not a placeholder.
pub fn optional_text(value: Option<&str>) -> Value {
    Value::String(value.unwrap_or_default().to_string())
}

/// String view of a cell; missing columns and nulls read as empty.
pub fn cell_text(row: &[Value], index: Option<usize>) -> String {
    match index.and_then(|i| row.get(i)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Like [`cell_text`] but treats the empty string as absent.
pub fn cell_optional_text(row: &[Value], index: Option<usize>) -> Option<String> {
    let text = cell_text(row, index);
    if text.is_empty() { None } else { Some(text) }
}

pub fn cell_number(row: &[Value], index: Option<usize>) -> Option<f64> {
    match index.and_then(|i| row.get(i)) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn cell_date(row: &[Value], index: Option<usize>) -> Option<NaiveDate> {
    cell_optional_text(row, index).and_then(|s| parse_sheet_date(&s))
}
