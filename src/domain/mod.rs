pub mod attendance;
pub mod entry;
pub mod ledger_row;

pub use attendance::{AttendanceRecord, Presence, Shift};
pub use entry::{ExpenseEntry, PaymentMode, SalesEntry};
pub use ledger_row::LedgerRow;
