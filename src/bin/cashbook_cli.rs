use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Select};

use cashbook_core::{
    cli::{forms, output},
    config::ConfigManager,
    errors::Result,
    services::{AttendanceService, ExpenseService, SalesService, SummaryService},
    session::Session,
    storage::JsonStorage,
};

const MENU: [&str; 5] = [
    "Record expense",
    "Record sales",
    "Attendance",
    "Daily summary",
    "Quit",
];

fn main() {
    cashbook_core::init();
    if let Err(err) = run() {
        output::error(&format!("cashbook: {}", err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = ConfigManager::new()?.load()?;
    let mut storage = JsonStorage::new_default()?;
    let mut session = Session::new();

    output::header("Cashbook");
    while !session.is_authenticated() {
        let pin = forms::prompt_pin()?;
        if session.login(&config, &pin)? {
            output::success("PIN accepted.");
        } else {
            output::error("Incorrect PIN.");
        }
    }

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&MENU)
            .default(0)
            .interact()
            .map_err(|err| match err {
                dialoguer::Error::IO(io) => cashbook_core::errors::CashbookError::Io(io),
            })?;

        let now = Local::now().naive_local();
        match choice {
            0 => {
                let entry = forms::expense_form(&config, now)?;
                // JsonStorage is a stateless handle on the data dir, so a
                // clone serves as the log half of the call.
                let mut log = storage.clone();
                let row = ExpenseService::record(&mut storage, &mut log, entry)?;
                output::success(&format!(
                    "Expense recorded. Closing balance for {}: {}",
                    row.date,
                    output::amount(&config.currency, row.closing_balance)
                ));
            }
            1 => {
                let entry = forms::sales_form(&config, now)?;
                let mut log = storage.clone();
                let row = SalesService::record(&mut storage, &mut log, entry)?;
                output::success(&format!(
                    "Sales recorded. Closing balance for {}: {}",
                    row.date,
                    output::amount(&config.currency, row.closing_balance)
                ));
            }
            2 => {
                let (date, records) = forms::attendance_form(&config, now)?;
                let count = AttendanceService::submit_day(&mut storage, date, records)?;
                output::success(&format!(
                    "Attendance saved for {} ({} employees, previous entries overwritten).",
                    date, count
                ));
            }
            3 => {
                let summary = SummaryService::daily_summary(&storage, now.date())?;
                output::header(&format!("Summary for {}", summary.date));
                output::info(&format!(
                    "Opening: {}",
                    output::amount(&config.currency, summary.opening_balance)
                ));
                output::info(&format!(
                    "Sales: {}",
                    output::amount(&config.currency, summary.total_sales)
                ));
                output::info(&format!(
                    "Expenses: {}",
                    output::amount(&config.currency, summary.total_expense)
                ));
                output::info(&format!(
                    "Closing: {}",
                    output::amount(&config.currency, summary.closing_balance)
                ));
            }
            _ => {
                output::info("Goodbye.");
                return Ok(());
            }
        }
    }
}
