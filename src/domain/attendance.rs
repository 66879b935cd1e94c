use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The three service shifts tracked per working day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

impl Presence {
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }
}

/// One employee's attendance for one date, keyed by `(date, employee)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub employee: String,
    pub morning: Presence,
    pub afternoon: Presence,
    pub night: Presence,
    pub entered_at: NaiveDateTime,
}

impl AttendanceRecord {
    pub fn new(
        date: NaiveDate,
        employee: impl Into<String>,
        morning: Presence,
        afternoon: Presence,
        night: Presence,
        entered_at: NaiveDateTime,
    ) -> Self {
        Self {
            date,
            employee: employee.into(),
            morning,
            afternoon,
            night,
            entered_at,
        }
    }

    pub fn presence(&self, shift: Shift) -> Presence {
        match shift {
            Shift::Morning => self.morning,
            Shift::Afternoon => self.afternoon,
            Shift::Night => self.night,
        }
    }
}
