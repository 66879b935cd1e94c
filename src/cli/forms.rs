//! Interactive entry forms. Each form collects and validates one submission
//! and hands back a typed record; nothing here touches storage.

use chrono::{NaiveDate, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Password, Select};

use crate::{
    cli::prompt_error,
    config::Config,
    domain::{AttendanceRecord, ExpenseEntry, PaymentMode, Presence, SalesEntry},
    errors::Result,
    storage::sheet,
};

pub fn prompt_pin() -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter PIN")
        .interact()
        .map_err(prompt_error)
}

pub fn expense_form(config: &Config, now: NaiveDateTime) -> Result<ExpenseEntry> {
    let date = prompt_date("Expense date", now.date())?;

    let categories = &config.expense_categories;
    let category_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .items(categories)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    let sub_category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Sub-category (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let amount = prompt_amount("Expense amount")?;
    let payment_mode = prompt_payment_mode()?;
    let entered_by = prompt_initials("Expense by")?;

    Ok(ExpenseEntry::new(
        date,
        date.and_time(now.time()),
        categories[category_idx].clone(),
        if sub_category.trim().is_empty() {
            None
        } else {
            Some(sub_category.trim().to_string())
        },
        amount,
        payment_mode,
        entered_by,
    ))
}

pub fn sales_form(_config: &Config, now: NaiveDateTime) -> Result<SalesEntry> {
    let date = prompt_date("Sales date", now.date())?;
    let amount = prompt_amount("Sales amount")?;
    let payment_mode = prompt_payment_mode()?;
    let entered_by = prompt_initials("Recorded by")?;

    Ok(SalesEntry::new(
        date,
        date.and_time(now.time()),
        amount,
        payment_mode,
        entered_by,
    ))
}

/// Collects a full day of attendance: one multi-select of absentees per
/// shift, everyone else marked present.
pub fn attendance_form(
    config: &Config,
    now: NaiveDateTime,
) -> Result<(NaiveDate, Vec<AttendanceRecord>)> {
    let date = prompt_date("Attendance date", now.date())?;
    let employees = &config.employees;

    let morning_absent = prompt_absentees("Morning absentees", employees)?;
    let afternoon_absent = prompt_absentees("Afternoon absentees", employees)?;
    let night_absent = prompt_absentees("Night absentees", employees)?;

    let records = employees
        .iter()
        .map(|employee| {
            AttendanceRecord::new(
                date,
                employee.clone(),
                presence(&morning_absent, employee),
                presence(&afternoon_absent, employee),
                presence(&night_absent, employee),
                now,
            )
        })
        .collect();
    Ok((date, records))
}

fn presence(absentees: &[String], employee: &str) -> Presence {
    if absentees.iter().any(|name| name == employee) {
        Presence::Absent
    } else {
        Presence::Present
    }
}

fn prompt_absentees(prompt: &str, employees: &[String]) -> Result<Vec<String>> {
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(employees)
        .interact()
        .map_err(prompt_error)?;
    Ok(picked.into_iter().map(|idx| employees[idx].clone()).collect())
}

fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (DD/MM/YYYY)", prompt))
        .default(sheet::format_date(default))
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            sheet::parse_date(input)
                .map(|_| ())
                .map_err(|_| "use DD/MM/YYYY".to_string())
        })
        .interact_text()
        .map_err(prompt_error)?;
    sheet::parse_date(&raw)
}

fn prompt_amount(prompt: &str) -> Result<f64> {
    let amount: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &f64| -> std::result::Result<(), String> {
            if *input > 0.0 {
                Ok(())
            } else {
                Err("amount must be greater than 0".into())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;
    Ok(amount)
}

fn prompt_payment_mode() -> Result<PaymentMode> {
    let labels: Vec<&str> = PaymentMode::ALL.iter().map(|mode| mode.label()).collect();
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Payment mode")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(PaymentMode::ALL[idx])
}

fn prompt_initials(prompt: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.trim().is_empty() {
                Err("cannot be empty".into())
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)
}
