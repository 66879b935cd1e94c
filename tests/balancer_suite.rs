use cashbook_core::{
    errors::CashbookError,
    ledger::{opening_balance_for, post_delta},
    storage::{LedgerStore, MemoryStore},
};
use chrono::{NaiveDate, NaiveDateTime};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn ts(day: u32) -> NaiveDateTime {
    date(day).and_hms_opt(21, 0, 0).unwrap()
}

#[test]
fn first_post_against_empty_storage_opens_at_zero() {
    let mut store = MemoryStore::new();
    let row = post_delta(&mut store, date(1), 1000.0, 200.0, ts(1)).unwrap();
    assert_eq!(row.opening_balance, 0.0);
    assert_eq!(row.total_sales, 1000.0);
    assert_eq!(row.total_expense, 200.0);
    assert_eq!(row.closing_balance, 800.0);
}

#[test]
fn consecutive_days_chain_opening_to_prior_closing() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(1), 1000.0, 200.0, ts(1)).unwrap();
    let day2 = post_delta(&mut store, date(2), 500.0, 100.0, ts(2)).unwrap();
    assert_eq!(day2.opening_balance, 800.0);
    assert_eq!(day2.closing_balance, 1200.0);
}

#[test]
fn continuity_holds_across_a_run_of_posts() {
    let mut store = MemoryStore::new();
    let deltas = [
        (1, 900.0, 350.0),
        (2, 1200.0, 80.0),
        (4, 760.0, 410.0),
        (7, 1500.0, 0.0),
        (8, 0.0, 620.0),
    ];
    for (day, sales, expense) in deltas {
        post_delta(&mut store, date(day), sales, expense, ts(day)).unwrap();
    }

    let mut rows = LedgerStore::read_all(&store).unwrap();
    rows.sort_by_key(|row| row.date);
    for pair in rows.windows(2) {
        assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
    }
    for row in &rows {
        assert_eq!(
            row.closing_balance,
            row.opening_balance + row.total_sales - row.total_expense
        );
    }
}

#[test]
fn same_date_posts_accumulate_into_one_row() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(5), 100.0, 0.0, ts(5)).unwrap();
    let row = post_delta(&mut store, date(5), 0.0, 30.0, ts(5)).unwrap();

    let rows = LedgerStore::read_all(&store).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(row.total_sales, 100.0);
    assert_eq!(row.total_expense, 30.0);
    assert_eq!(row.closing_balance, row.opening_balance + 70.0);
}

#[test]
fn accumulation_keeps_the_original_opening_balance() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(1), 400.0, 0.0, ts(1)).unwrap();
    post_delta(&mut store, date(2), 100.0, 0.0, ts(2)).unwrap();
    let updated = post_delta(&mut store, date(2), 50.0, 0.0, ts(2)).unwrap();
    assert_eq!(updated.opening_balance, 400.0);
    assert_eq!(updated.closing_balance, 550.0);
}

#[test]
fn backdated_insert_chains_from_the_nearest_prior_row() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(1), 500.0, 0.0, ts(1)).unwrap();
    post_delta(&mut store, date(3), 300.0, 0.0, ts(3)).unwrap();

    let day2 = post_delta(&mut store, date(2), 200.0, 50.0, ts(2)).unwrap();
    assert_eq!(day2.opening_balance, 500.0);
    assert_eq!(day2.closing_balance, 650.0);

    // Later rows are deliberately left untouched; only the explicit rechain
    // pass repairs them.
    let rows = LedgerStore::read_all(&store).unwrap();
    let day3 = rows.iter().find(|row| row.date == date(3)).unwrap();
    assert_eq!(day3.opening_balance, 500.0);
}

#[test]
fn post_earlier_than_all_rows_opens_at_zero() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(10), 100.0, 0.0, ts(10)).unwrap();
    let earlier = post_delta(&mut store, date(2), 60.0, 10.0, ts(2)).unwrap();
    assert_eq!(earlier.opening_balance, 0.0);
    assert_eq!(earlier.closing_balance, 50.0);
}

#[test]
fn zero_delta_pair_is_rejected() {
    let mut store = MemoryStore::new();
    let err = post_delta(&mut store, date(1), 0.0, 0.0, ts(1)).unwrap_err();
    assert!(matches!(err, CashbookError::Validation(_)));
    assert!(LedgerStore::read_all(&store).unwrap().is_empty());
}

#[test]
fn opening_balance_query_uses_nearest_prior_closing() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(1), 1000.0, 200.0, ts(1)).unwrap();
    post_delta(&mut store, date(5), 100.0, 0.0, ts(5)).unwrap();

    assert_eq!(opening_balance_for(&store, date(3)).unwrap(), 800.0);
    assert_eq!(opening_balance_for(&store, date(6)).unwrap(), 900.0);
    assert_eq!(opening_balance_for(&store, date(1)).unwrap(), 0.0);
}

#[test]
fn rows_keep_their_external_sheet_shape() {
    let mut store = MemoryStore::new();
    post_delta(&mut store, date(3), 100.0, 0.0, ts(3)).unwrap();
    post_delta(&mut store, date(1), 50.0, 0.0, ts(1)).unwrap();

    // Storage order is insertion order, not date order, and dates are the
    // canonical slash format.
    let raw = store.raw_ledger_rows();
    assert_eq!(raw[0][0], "03/01/2024");
    assert_eq!(raw[1][0], "01/01/2024");
    assert_eq!(raw[0].len(), 6);
}

#[test]
fn end_to_end_two_day_scenario() {
    let mut store = MemoryStore::new();

    let day1 = post_delta(&mut store, date(1), 1000.0, 200.0, ts(1)).unwrap();
    assert_eq!(day1.opening_balance, 0.0);
    assert_eq!(day1.total_sales, 1000.0);
    assert_eq!(day1.total_expense, 200.0);
    assert_eq!(day1.closing_balance, 800.0);

    let day2 = post_delta(&mut store, date(2), 500.0, 100.0, ts(2)).unwrap();
    assert_eq!(day2.opening_balance, 800.0);
    assert_eq!(day2.total_sales, 500.0);
    assert_eq!(day2.total_expense, 100.0);
    assert_eq!(day2.closing_balance, 1200.0);
}
