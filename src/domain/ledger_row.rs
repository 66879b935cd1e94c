use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the daily cash ledger. At most one row exists per calendar
/// date; `opening_balance` is fixed when the row is created and chains from
/// the nearest earlier row's closing balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub date: NaiveDate,
    pub opening_balance: f64,
    pub total_sales: f64,
    pub total_expense: f64,
    pub closing_balance: f64,
    pub last_updated: NaiveDateTime,
}

impl LedgerRow {
    pub fn new(
        date: NaiveDate,
        opening_balance: f64,
        total_sales: f64,
        total_expense: f64,
        last_updated: NaiveDateTime,
    ) -> Self {
        let mut row = Self {
            date,
            opening_balance,
            total_sales,
            total_expense,
            closing_balance: 0.0,
            last_updated,
        };
        row.recompute_closing();
        row
    }

    /// Adds the deltas to the day's running totals and refreshes the derived
    /// closing balance. The opening balance is never touched here.
    pub fn apply_delta(&mut self, delta_sales: f64, delta_expense: f64, at: NaiveDateTime) {
        self.total_sales += delta_sales;
        self.total_expense += delta_expense;
        self.last_updated = at;
        self.recompute_closing();
    }

    /// Restores the `closing = opening + sales - expense` identity.
    pub fn recompute_closing(&mut self) {
        self.closing_balance = self.opening_balance + self.total_sales - self.total_expense;
    }
}
