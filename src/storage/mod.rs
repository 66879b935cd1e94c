pub mod json_backend;
pub mod memory;
pub mod sheet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    domain::{AttendanceRecord, LedgerRow},
    errors::Result,
};

/// Partial update applied to an existing ledger row. `post_delta` only ever
/// patches the running totals; `opening_balance` is additionally rewritten by
/// the explicit re-chaining pass.
#[derive(Debug, Clone, Default)]
pub struct LedgerRowPatch {
    pub opening_balance: Option<f64>,
    pub total_sales: Option<f64>,
    pub total_expense: Option<f64>,
    pub closing_balance: Option<f64>,
    pub last_updated: Option<NaiveDateTime>,
}

impl LedgerRowPatch {
    pub fn apply(&self, row: &mut LedgerRow) {
        if let Some(value) = self.opening_balance {
            row.opening_balance = value;
        }
        if let Some(value) = self.total_sales {
            row.total_sales = value;
        }
        if let Some(value) = self.total_expense {
            row.total_expense = value;
        }
        if let Some(value) = self.closing_balance {
            row.closing_balance = value;
        }
        if let Some(value) = self.last_updated {
            row.last_updated = value;
        }
    }
}

/// Abstraction over the ledger table. Backends surface transport failures as
/// `CashbookError::Storage` (or `Io` for local files) and never retry; a
/// retried write would double-post a delta.
pub trait LedgerStore {
    /// Returns every row in storage order, which is not guaranteed to be
    /// sorted by date. Callers sort.
    fn read_all(&self) -> Result<Vec<LedgerRow>>;
    fn append(&mut self, row: &LedgerRow) -> Result<()>;
    /// Partial in-place update keyed by date. Fails with `NotFound` if the
    /// row has disappeared since it was read.
    fn update_fields(&mut self, date: NaiveDate, patch: &LedgerRowPatch) -> Result<()>;
}

/// Append-only detail log for expense and sales entries.
pub trait EntryLog<T> {
    fn append(&mut self, entry: &T) -> Result<()>;
    fn read_all(&self) -> Result<Vec<T>>;
}

/// The attendance register. A day's submission replaces that day's records
/// as a keyed upsert, never via delete-then-reinsert.
pub trait AttendanceStore {
    fn read_all(&self) -> Result<Vec<AttendanceRecord>>;
    fn read_day(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>>;
    /// Makes `records` the complete attendance set for `date`: matching
    /// `(date, employee)` rows are rewritten in place, new employees are
    /// appended, and stale rows for the date are dropped in the same write.
    fn upsert_day(&mut self, date: NaiveDate, records: &[AttendanceRecord]) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStore;
