use chrono::NaiveDate;

use crate::{
    domain::AttendanceRecord,
    errors::{CashbookError, Result},
    storage::AttendanceStore,
};

pub struct AttendanceService;

impl AttendanceService {
    /// Overwrites a day's attendance with the submitted roster. Records are
    /// upserted by `(date, employee)` so the date never passes through an
    /// empty state, unlike the old scan-delete-append flow.
    pub fn submit_day<S>(store: &mut S, date: NaiveDate, records: Vec<AttendanceRecord>) -> Result<usize>
    where
        S: AttendanceStore + ?Sized,
    {
        if records.is_empty() {
            return Err(CashbookError::Validation(
                "attendance submission must cover at least one employee".into(),
            ));
        }
        if let Some(stray) = records.iter().find(|record| record.date != date) {
            return Err(CashbookError::Validation(format!(
                "attendance record for {} does not match submission date {}",
                stray.employee, date
            )));
        }
        let count = records.len();
        store.upsert_day(date, &records)?;
        tracing::info!(%date, employees = count, "attendance saved");
        Ok(count)
    }
}
