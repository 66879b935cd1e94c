use crate::{
    domain::{LedgerRow, SalesEntry},
    errors::{CashbookError, Result},
    ledger,
    storage::{EntryLog, LedgerStore},
};

pub struct SalesService;

impl SalesService {
    /// Appends the sales entry to its detail log, then posts its amount to
    /// the daily ledger as a sales delta.
    pub fn record<S, L>(ledger_store: &mut S, log: &mut L, entry: SalesEntry) -> Result<LedgerRow>
    where
        S: LedgerStore + ?Sized,
        L: EntryLog<SalesEntry> + ?Sized,
    {
        if entry.amount <= 0.0 {
            return Err(CashbookError::Validation(
                "sales amount must be greater than 0".into(),
            ));
        }
        log.append(&entry)?;
        tracing::info!(date = %entry.date, amount = entry.amount, "sales recorded");
        ledger::post_delta(ledger_store, entry.date, entry.amount, 0.0, entry.entered_at)
    }
}
