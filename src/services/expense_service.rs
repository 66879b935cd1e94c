use crate::{
    domain::{ExpenseEntry, LedgerRow},
    errors::{CashbookError, Result},
    ledger,
    storage::{EntryLog, LedgerStore},
};

pub struct ExpenseService;

impl ExpenseService {
    /// Appends the expense to the detail log, then posts its amount to the
    /// daily ledger as an expense delta. Returns the resulting ledger row.
    pub fn record<S, L>(ledger_store: &mut S, log: &mut L, entry: ExpenseEntry) -> Result<LedgerRow>
    where
        S: LedgerStore + ?Sized,
        L: EntryLog<ExpenseEntry> + ?Sized,
    {
        if entry.amount <= 0.0 {
            return Err(CashbookError::Validation(
                "expense amount must be greater than 0".into(),
            ));
        }
        log.append(&entry)?;
        tracing::info!(date = %entry.date, amount = entry.amount, category = %entry.category, "expense recorded");
        ledger::post_delta(ledger_store, entry.date, 0.0, entry.amount, entry.entered_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::PaymentMode, storage::MemoryStore};
    use chrono::NaiveDate;

    fn entry(amount: f64) -> ExpenseEntry {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        ExpenseEntry::new(
            date,
            date.and_hms_opt(11, 0, 0).unwrap(),
            "Vegetables",
            None,
            amount,
            PaymentMode::Cash,
            "RK",
        )
    }

    #[test]
    fn records_log_entry_and_ledger_delta() {
        let mut store = MemoryStore::new();
        let mut log = MemoryStore::new();
        let row = ExpenseService::record(&mut store, &mut log, entry(150.0)).unwrap();
        assert_eq!(row.total_expense, 150.0);
        assert_eq!(row.closing_balance, -150.0);
        let logged = EntryLog::<ExpenseEntry>::read_all(&log).unwrap();
        assert_eq!(logged.len(), 1);
    }

    #[test]
    fn zero_amount_is_rejected_before_writing() {
        let mut store = MemoryStore::new();
        let mut log = MemoryStore::new();
        let err = ExpenseService::record(&mut store, &mut log, entry(0.0)).unwrap_err();
        assert!(matches!(err, CashbookError::Validation(_)));
        assert!(EntryLog::<ExpenseEntry>::read_all(&log).unwrap().is_empty());
        assert!(LedgerStore::read_all(&store).unwrap().is_empty());
    }
}
