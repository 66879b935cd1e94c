//! File-backed storage under the application data directory. The ledger is
//! persisted in its encoded sheet form; the detail logs and the attendance
//! register are plain serde collections. Every write stages to a temporary
//! file and renames over the target.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    domain::{AttendanceRecord, ExpenseEntry, LedgerRow, SalesEntry},
    errors::{CashbookError, Result},
    storage::{
        sheet::{self, SheetRow},
        AttendanceStore, EntryLog, LedgerRowPatch, LedgerStore,
    },
    utils::{app_data_dir, ensure_dir},
};

const LEDGER_FILE: &str = "ledger.json";
const EXPENSES_FILE: &str = "expenses.json";
const SALES_FILE: &str = "sales.json";
const ATTENDANCE_FILE: &str = "attendance.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn ledger_path(&self) -> PathBuf {
        self.root.join(LEDGER_FILE)
    }

    fn read_sheet(&self) -> Result<Vec<SheetRow>> {
        read_collection(&self.ledger_path())
    }

    fn write_sheet(&self, rows: &[SheetRow]) -> Result<()> {
        write_collection(&self.ledger_path(), rows)
    }

    fn log_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}

impl LedgerStore for JsonStorage {
    fn read_all(&self) -> Result<Vec<LedgerRow>> {
        self.read_sheet()?
            .iter()
            .map(|row| sheet::decode_row(row))
            .collect()
    }

    fn append(&mut self, row: &LedgerRow) -> Result<()> {
        let mut rows = self.read_sheet()?;
        rows.push(sheet::encode_row(row));
        self.write_sheet(&rows)
    }

    fn update_fields(&mut self, date: NaiveDate, patch: &LedgerRowPatch) -> Result<()> {
        let mut rows = self.read_sheet()?;
        for raw in rows.iter_mut() {
            let mut row = sheet::decode_row(raw)?;
            if row.date == date {
                patch.apply(&mut row);
                *raw = sheet::encode_row(&row);
                return self.write_sheet(&rows);
            }
        }
        Err(CashbookError::NotFound(format!(
            "no ledger row for {}",
            sheet::format_date(date)
        )))
    }
}

impl EntryLog<ExpenseEntry> for JsonStorage {
    fn append(&mut self, entry: &ExpenseEntry) -> Result<()> {
        append_to_log(&self.log_path(EXPENSES_FILE), entry)
    }

    fn read_all(&self) -> Result<Vec<ExpenseEntry>> {
        read_collection(&self.log_path(EXPENSES_FILE))
    }
}

impl EntryLog<SalesEntry> for JsonStorage {
    fn append(&mut self, entry: &SalesEntry) -> Result<()> {
        append_to_log(&self.log_path(SALES_FILE), entry)
    }

    fn read_all(&self) -> Result<Vec<SalesEntry>> {
        read_collection(&self.log_path(SALES_FILE))
    }
}

impl AttendanceStore for JsonStorage {
    fn read_all(&self) -> Result<Vec<AttendanceRecord>> {
        read_collection(&self.log_path(ATTENDANCE_FILE))
    }

    fn read_day(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let records: Vec<AttendanceRecord> = read_collection(&self.log_path(ATTENDANCE_FILE))?;
        Ok(records
            .into_iter()
            .filter(|record| record.date == date)
            .collect())
    }

    fn upsert_day(&mut self, date: NaiveDate, records: &[AttendanceRecord]) -> Result<()> {
        let path = self.log_path(ATTENDANCE_FILE);
        let mut all: Vec<AttendanceRecord> = read_collection(&path)?;
        for incoming in records {
            match all
                .iter_mut()
                .find(|existing| existing.date == date && existing.employee == incoming.employee)
            {
                Some(existing) => *existing = incoming.clone(),
                None => all.push(incoming.clone()),
            }
        }
        all.retain(|record| {
            record.date != date
                || records
                    .iter()
                    .any(|incoming| incoming.employee == record.employee)
        });
        write_collection(&path, &all)
    }
}

fn append_to_log<T: Serialize + DeserializeOwned + Clone>(path: &Path, entry: &T) -> Result<()> {
    let mut entries: Vec<T> = read_collection(path)?;
    entries.push(entry.clone());
    write_collection(path, &entries)
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_row(day: u32) -> LedgerRow {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        LedgerRow::new(date, 0.0, 100.0, 20.0, date.and_hms_opt(20, 0, 0).unwrap())
    }

    #[test]
    fn append_and_read_roundtrip() {
        let (mut storage, _guard) = storage_with_temp_dir();
        LedgerStore::append(&mut storage, &sample_row(1)).expect("append row");
        let rows = LedgerStore::read_all(&storage).expect("read rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].closing_balance, 80.0);
    }

    #[test]
    fn update_missing_row_is_not_found() {
        let (mut storage, _guard) = storage_with_temp_dir();
        let missing = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let err = storage
            .update_fields(missing, &LedgerRowPatch::default())
            .unwrap_err();
        assert!(matches!(err, CashbookError::NotFound(_)));
    }
}
