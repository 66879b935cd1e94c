//! The daily ledger balancer: applies sales/expense deltas to the one-row-
//! per-date cash ledger while keeping the opening/closing balance chain
//! intact.
//!
//! Chaining uses the nearest prior row, so sparse dates carry the last known
//! closing balance forward rather than zero-filling missing days. Backdating
//! a delta before existing rows does not rewrite later rows' opening
//! balances; run [`rechain`] explicitly to repair the chain afterwards.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    domain::LedgerRow,
    errors::{CashbookError, Result},
    storage::{LedgerRowPatch, LedgerStore},
};

/// Applies one signed delta to the ledger, creating or updating the row for
/// `target_date`, and returns the row as persisted.
///
/// Storage failures propagate untouched and are never retried: the store has
/// no idempotency key, so a retry could double-post the delta.
pub fn post_delta<S: LedgerStore + ?Sized>(
    store: &mut S,
    target_date: NaiveDate,
    delta_sales: f64,
    delta_expense: f64,
    posted_at: NaiveDateTime,
) -> Result<LedgerRow> {
    if delta_sales < 0.0 || delta_expense < 0.0 {
        return Err(CashbookError::Validation(
            "deltas must not be negative".into(),
        ));
    }
    if delta_sales == 0.0 && delta_expense == 0.0 {
        return Err(CashbookError::Validation(
            "at least one of sales or expense must be non-zero".into(),
        ));
    }

    let rows = store.read_all()?;

    if let Some(existing) = rows.iter().find(|row| row.date == target_date) {
        let mut updated = existing.clone();
        updated.apply_delta(delta_sales, delta_expense, posted_at);
        let patch = LedgerRowPatch {
            total_sales: Some(updated.total_sales),
            total_expense: Some(updated.total_expense),
            closing_balance: Some(updated.closing_balance),
            last_updated: Some(updated.last_updated),
            ..LedgerRowPatch::default()
        };
        store.update_fields(target_date, &patch)?;
        tracing::debug!(date = %target_date, closing = updated.closing_balance, "ledger row updated");
        return Ok(updated);
    }

    let opening = nearest_prior_closing(&rows, target_date);
    let row = LedgerRow::new(target_date, opening, delta_sales, delta_expense, posted_at);
    store.append(&row)?;
    tracing::debug!(date = %target_date, opening, closing = row.closing_balance, "ledger row created");
    Ok(row)
}

/// Closing balance of the nearest row strictly before `target_date`, or 0 if
/// none exists. Pure read; lets the dashboard show a day's opening position
/// before anything has been posted for it.
pub fn opening_balance_for<S: LedgerStore + ?Sized>(
    store: &S,
    target_date: NaiveDate,
) -> Result<f64> {
    let rows = store.read_all()?;
    Ok(nearest_prior_closing(&rows, target_date))
}

/// Rewrites every row's opening balance from its predecessor's closing, in
/// date order, and returns the rows that changed. This is the explicit
/// repair pass for discontinuities left behind by backdated posts; nothing
/// runs it automatically.
pub fn rechain<S: LedgerStore + ?Sized>(store: &mut S) -> Result<Vec<LedgerRow>> {
    let mut rows = store.read_all()?;
    rows.sort_by_key(|row| row.date);

    let mut repaired = Vec::new();
    let mut expected_opening = 0.0;
    for row in rows.iter() {
        if row.opening_balance != expected_opening {
            let mut fixed = row.clone();
            fixed.opening_balance = expected_opening;
            fixed.recompute_closing();
            let patch = LedgerRowPatch {
                opening_balance: Some(fixed.opening_balance),
                closing_balance: Some(fixed.closing_balance),
                ..LedgerRowPatch::default()
            };
            store.update_fields(fixed.date, &patch)?;
            tracing::info!(date = %fixed.date, opening = fixed.opening_balance, "ledger row re-chained");
            expected_opening = fixed.closing_balance;
            repaired.push(fixed);
        } else {
            expected_opening = row.closing_balance;
        }
    }
    Ok(repaired)
}

fn nearest_prior_closing(rows: &[LedgerRow], target_date: NaiveDate) -> f64 {
    rows.iter()
        .filter(|row| row.date < target_date)
        .max_by_key(|row| row.date)
        .map(|row| row.closing_balance)
        .unwrap_or(0.0)
}
