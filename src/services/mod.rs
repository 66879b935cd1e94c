pub mod attendance_service;
pub mod expense_service;
pub mod sales_service;
pub mod summary_service;

pub use attendance_service::AttendanceService;
pub use expense_service::ExpenseService;
pub use sales_service::SalesService;
pub use summary_service::{AttendanceTally, DailySummary, SummaryService};
