use anyhow::{Result, anyhow};
use derive_more::Display;
use serde_json::Value;
#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rectangular value grid; row 0 is the header row.
pub type Grid = Vec<Vec<Value>>;

#[derive(Debug, Display)]
pub enum SheetError {
    #[display(fmt = "sheet '{}' does not exist", _0)]
    Missing(String),
    #[display(fmt = "sheet '{}' already exists", _0)]
    AlreadyExists(String),
    #[display(fmt = "row {} out of range in sheet '{}'", _0, _1)]
    RowOutOfRange(usize, String),
}

impl std::error::Error for SheetError {}

/// The tabular persistence collaborator: a store addressed by sheet name,
/// exposing exactly the four primitives the adapter layer needs. The first
/// row of every grid is the header naming its columns.
pub trait SheetBackend: Send + Sync {
    /// Full grid of the named sheet, `None` if the sheet was never created.
    fn grid(&self, sheet: &str) -> Result<Option<Grid>>;

    /// Creates the sheet with its header row. Fails if it already exists.
    fn create_sheet(&self, sheet: &str, header: &[&str]) -> Result<()>;

    fn append_row(&self, sheet: &str, row: Vec<Value>) -> Result<()>;

    /// Removes the row at `index` (header is index 0 and is never removed
    /// through this path; callers pass data-row indices only).
    fn delete_row(&self, sheet: &str, index: usize) -> Result<()>;
}

fn header_row(header: &[&str]) -> Vec<Value> {
    header.iter().map(|h| Value::String((*h).to_string())).collect()
}

/// One JSON grid file per sheet under a data directory. Every operation
/// reads or rewrites the whole grid, matching the fully-materialized access
/// pattern of the spreadsheet service it stands in for.
pub struct JsonSheetBackend {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonSheetBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{sheet}.json"))
    }

    fn read_grid(path: &Path) -> Result<Grid> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_grid(path: &Path, grid: &Grid) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(grid)?)?;
        Ok(())
    }
}

impl SheetBackend for JsonSheetBackend {
    fn grid(&self, sheet: &str) -> Result<Option<Grid>> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::read_grid(&path)?))
    }

    fn create_sheet(&self, sheet: &str, header: &[&str]) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        let path = self.sheet_path(sheet);
        if path.exists() {
            return Err(SheetError::AlreadyExists(sheet.to_string()).into());
        }
        fs::create_dir_all(&self.dir)?;
        Self::write_grid(&path, &vec![header_row(header)])
    }

    fn append_row(&self, sheet: &str, row: Vec<Value>) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(SheetError::Missing(sheet.to_string()).into());
        }
        let mut grid = Self::read_grid(&path)?;
        grid.push(row);
        Self::write_grid(&path, &grid)
    }

    fn delete_row(&self, sheet: &str, index: usize) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(SheetError::Missing(sheet.to_string()).into());
        }
        let mut grid = Self::read_grid(&path)?;
        if index == 0 || index >= grid.len() {
            return Err(SheetError::RowOutOfRange(index, sheet.to_string()).into());
        }
        grid.remove(index);
        Self::write_grid(&path, &grid)
    }
}

/// In-memory backend with the same contract, used by the test suites.
#[cfg(test)]
#[derive(Default)]
pub struct MemorySheetBackend {
    sheets: Mutex<HashMap<String, Grid>>,
}

#[cfg(test)]
impl SheetBackend for MemorySheetBackend {
    fn grid(&self, sheet: &str) -> Result<Option<Grid>> {
        let sheets = self.sheets.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        Ok(sheets.get(sheet).cloned())
    }

    fn create_sheet(&self, sheet: &str, header: &[&str]) -> Result<()> {
        let mut sheets = self.sheets.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        if sheets.contains_key(sheet) {
            return Err(SheetError::AlreadyExists(sheet.to_string()).into());
        }
        sheets.insert(sheet.to_string(), vec![header_row(header)]);
        Ok(())
    }

    fn append_row(&self, sheet: &str, row: Vec<Value>) -> Result<()> {
        let mut sheets = self.sheets.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        let grid = sheets
            .get_mut(sheet)
            .ok_or_else(|| SheetError::Missing(sheet.to_string()))?;
        grid.push(row);
        Ok(())
    }

    fn delete_row(&self, sheet: &str, index: usize) -> Result<()> {
        let mut sheets = self.sheets.lock().map_err(|_| anyhow!("sheet lock poisoned"))?;
        let grid = sheets
            .get_mut(sheet)
            .ok_or_else(|| SheetError::Missing(sheet.to_string()))?;
        if index == 0 || index >= grid.len() {
            return Err(SheetError::RowOutOfRange(index, sheet.to_string()).into());
        }
        grid.remove(index);
        Ok(())
    }
}
