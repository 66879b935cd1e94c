use colored::Colorize;

pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().underline());
}

pub fn info(text: &str) {
    println!("{}", text);
}

pub fn success(text: &str) {
    println!("{}", text.green());
}

pub fn warn(text: &str) {
    println!("{}", text.yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", text.red().bold());
}

/// Plain money rendering: `INR 1250`, `INR 812.5`.
pub fn amount(currency: &str, value: f64) -> String {
    format!("{} {}", currency, value)
}
