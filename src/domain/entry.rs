use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How an amount changed hands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMode {
    Cash,
    Upi,
    Cheque,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 3] = [PaymentMode::Cash, PaymentMode::Upi, PaymentMode::Cheque];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Cheque => "Cheque",
        }
    }
}

/// A single expense recorded through the entry form. These accumulate in an
/// append-only detail log; only the amount flows into the daily ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: Uuid,
    /// Business date the expense belongs to (may be backdated).
    pub date: NaiveDate,
    /// When the operator submitted the form.
    pub entered_at: NaiveDateTime,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    /// Initials of the person who paid.
    pub entered_by: String,
}

impl ExpenseEntry {
    pub fn new(
        date: NaiveDate,
        entered_at: NaiveDateTime,
        category: impl Into<String>,
        sub_category: Option<String>,
        amount: f64,
        payment_mode: PaymentMode,
        entered_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            entered_at,
            category: category.into(),
            sub_category,
            amount,
            payment_mode,
            entered_by: entered_by.into(),
        }
    }
}

/// A sales total recorded for a business date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub entered_at: NaiveDateTime,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    pub entered_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SalesEntry {
    pub fn new(
        date: NaiveDate,
        entered_at: NaiveDateTime,
        amount: f64,
        payment_mode: PaymentMode,
        entered_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            entered_at,
            amount,
            payment_mode,
            entered_by: entered_by.into(),
            notes: None,
        }
    }
}
