//! In-memory backend used by tests and demos. Ledger rows are held in their
//! encoded sheet form so every read and write goes through the same codec as
//! a real sheet, and storage order is insertion order, not date order.

use chrono::NaiveDate;

use crate::{
    domain::{AttendanceRecord, ExpenseEntry, LedgerRow, SalesEntry},
    errors::{CashbookError, Result},
    storage::{
        sheet::{self, SheetRow},
        AttendanceStore, EntryLog, LedgerRowPatch, LedgerStore,
    },
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    ledger: Vec<SheetRow>,
    expenses: Vec<ExpenseEntry>,
    sales: Vec<SalesEntry>,
    attendance: Vec<AttendanceRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw sheet rows, exposed for tests that assert on the external shape.
    pub fn raw_ledger_rows(&self) -> &[SheetRow] {
        &self.ledger
    }
}

impl LedgerStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<LedgerRow>> {
        self.ledger.iter().map(|row| sheet::decode_row(row)).collect()
    }

    fn append(&mut self, row: &LedgerRow) -> Result<()> {
        self.ledger.push(sheet::encode_row(row));
        Ok(())
    }

    fn update_fields(&mut self, date: NaiveDate, patch: &LedgerRowPatch) -> Result<()> {
        for raw in self.ledger.iter_mut() {
            let mut row = sheet::decode_row(raw)?;
            if row.date == date {
                patch.apply(&mut row);
                *raw = sheet::encode_row(&row);
                return Ok(());
            }
        }
        Err(CashbookError::NotFound(format!(
            "no ledger row for {}",
            sheet::format_date(date)
        )))
    }
}

impl EntryLog<ExpenseEntry> for MemoryStore {
    fn append(&mut self, entry: &ExpenseEntry) -> Result<()> {
        self.expenses.push(entry.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<ExpenseEntry>> {
        Ok(self.expenses.clone())
    }
}

impl EntryLog<SalesEntry> for MemoryStore {
    fn append(&mut self, entry: &SalesEntry) -> Result<()> {
        self.sales.push(entry.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<SalesEntry>> {
        Ok(self.sales.clone())
    }
}

impl AttendanceStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<AttendanceRecord>> {
        Ok(self.attendance.clone())
    }

    fn read_day(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        Ok(self
            .attendance
            .iter()
            .filter(|record| record.date == date)
            .cloned()
            .collect())
    }

    fn upsert_day(&mut self, date: NaiveDate, records: &[AttendanceRecord]) -> Result<()> {
        for incoming in records {
            match self
                .attendance
                .iter_mut()
                .find(|existing| existing.date == date && existing.employee == incoming.employee)
            {
                Some(existing) => *existing = incoming.clone(),
                None => self.attendance.push(incoming.clone()),
            }
        }
        self.attendance.retain(|record| {
            record.date != date
                || records
                    .iter()
                    .any(|incoming| incoming.employee == record.employee)
        });
        Ok(())
    }
}
