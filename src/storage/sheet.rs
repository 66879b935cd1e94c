//! The single encode/decode boundary between typed ledger rows and their
//! external spreadsheet shape: six printable fields per row,
//! `[date, opening, sales, expense, closing, timestamp]`.
//!
//! Dates are written as `DD/MM/YYYY` and timestamps as `DD/MM/YYYY HH:MM`.
//! Older sheets used dashes instead of slashes, so the parsers accept both;
//! the encoder always writes slashes.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    domain::LedgerRow,
    errors::{CashbookError, Result},
};

pub const LEDGER_FIELD_COUNT: usize = 6;

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_FORMAT_DASHED: &str = "%d-%m-%Y";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";
const TIMESTAMP_FORMAT_DASHED: &str = "%d-%m-%Y %H:%M";

/// A row as the external store sees it.
pub type SheetRow = Vec<String>;

pub fn encode_row(row: &LedgerRow) -> SheetRow {
    vec![
        format_date(row.date),
        format_amount(row.opening_balance),
        format_amount(row.total_sales),
        format_amount(row.total_expense),
        format_amount(row.closing_balance),
        format_timestamp(row.last_updated),
    ]
}

pub fn decode_row(fields: &[String]) -> Result<LedgerRow> {
    if fields.len() != LEDGER_FIELD_COUNT {
        return Err(CashbookError::Storage(format!(
            "ledger row has {} fields, expected {}",
            fields.len(),
            LEDGER_FIELD_COUNT
        )));
    }
    Ok(LedgerRow {
        date: parse_date(&fields[0])?,
        opening_balance: parse_amount(&fields[1])?,
        total_sales: parse_amount(&fields[2])?,
        total_expense: parse_amount(&fields[3])?,
        closing_balance: parse_amount(&fields[4])?,
        last_updated: parse_timestamp(&fields[5])?,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT_DASHED))
        .map_err(|_| CashbookError::Storage(format!("unreadable ledger date `{}`", raw)))
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT_DASHED))
        .map_err(|_| CashbookError::Storage(format!("unreadable ledger timestamp `{}`", raw)))
}

pub fn format_amount(value: f64) -> String {
    // Plain numbers, no currency symbol or grouping: `800`, `812.5`.
    format!("{}", value)
}

pub fn parse_amount(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CashbookError::Storage(format!("unreadable ledger amount `{}`", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> LedgerRow {
        LedgerRow::new(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            800.0,
            500.0,
            100.0,
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(21, 15, 0)
                .unwrap(),
        )
    }

    #[test]
    fn encodes_canonical_slash_dates() {
        let fields = encode_row(&sample_row());
        assert_eq!(fields[0], "02/01/2024");
        assert_eq!(fields[1], "800");
        assert_eq!(fields[4], "1200");
        assert_eq!(fields[5], "02/01/2024 21:15");
    }

    #[test]
    fn decodes_its_own_encoding() {
        let row = sample_row();
        let decoded = decode_row(&encode_row(&row)).unwrap();
        assert_eq!(decoded, row);
    }

    #[test]
    fn accepts_dashed_dates_from_older_sheets() {
        let fields = vec![
            "02-01-2024".to_string(),
            "800".to_string(),
            "512.5".to_string(),
            "100".to_string(),
            "1212.5".to_string(),
            "02-01-2024 21:15".to_string(),
        ];
        let row = decode_row(&fields).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(row.total_sales, 512.5);
    }

    #[test]
    fn rejects_short_rows() {
        let fields = vec!["02/01/2024".to_string()];
        assert!(matches!(
            decode_row(&fields),
            Err(CashbookError::Storage(_))
        ));
    }

    #[test]
    fn rejects_garbage_amounts() {
        let mut fields = encode_row(&sample_row());
        fields[2] = "five hundred".into();
        assert!(matches!(
            decode_row(&fields),
            Err(CashbookError::Storage(_))
        ));
    }
}
