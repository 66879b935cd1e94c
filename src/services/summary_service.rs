use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ExpenseEntry, Shift},
    errors::Result,
    ledger,
    storage::{AttendanceStore, EntryLog, LedgerStore},
};

/// Cash position of a single date as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub opening_balance: f64,
    pub total_sales: f64,
    pub total_expense: f64,
    pub closing_balance: f64,
}

/// Per-employee shift counts over a reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTally {
    pub present_shifts: u32,
    pub absent_shifts: u32,
}

pub struct SummaryService;

impl SummaryService {
    /// Summary for any date, whether or not a ledger row exists yet. A day
    /// with no row inherits the nearest prior closing balance and shows zero
    /// movement.
    pub fn daily_summary<S: LedgerStore + ?Sized>(
        store: &S,
        date: NaiveDate,
    ) -> Result<DailySummary> {
        let rows = store.read_all()?;
        if let Some(row) = rows.iter().find(|row| row.date == date) {
            return Ok(DailySummary {
                date,
                opening_balance: row.opening_balance,
                total_sales: row.total_sales,
                total_expense: row.total_expense,
                closing_balance: row.closing_balance,
            });
        }
        let opening = ledger::opening_balance_for(store, date)?;
        Ok(DailySummary {
            date,
            opening_balance: opening,
            total_sales: 0.0,
            total_expense: 0.0,
            closing_balance: opening,
        })
    }

    /// Expense totals grouped by category over an inclusive date window.
    pub fn expense_totals_by_category<L>(
        log: &L,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<BTreeMap<String, f64>>
    where
        L: EntryLog<ExpenseEntry> + ?Sized,
    {
        let mut totals = BTreeMap::new();
        for entry in log.read_all()? {
            if entry.date >= from && entry.date <= to {
                *totals.entry(entry.category).or_insert(0.0) += entry.amount;
            }
        }
        Ok(totals)
    }

    /// Present/absent shift counts per employee over an inclusive window.
    pub fn attendance_tallies<S>(
        store: &S,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<BTreeMap<String, AttendanceTally>>
    where
        S: AttendanceStore + ?Sized,
    {
        let mut tallies: BTreeMap<String, AttendanceTally> = BTreeMap::new();
        for record in store.read_all()? {
            if record.date < from || record.date > to {
                continue;
            }
            let tally = tallies.entry(record.employee.clone()).or_default();
            for shift in Shift::ALL {
                if record.presence(shift).is_present() {
                    tally.present_shifts += 1;
                } else {
                    tally.absent_shifts += 1;
                }
            }
        }
        Ok(tallies)
    }
}
