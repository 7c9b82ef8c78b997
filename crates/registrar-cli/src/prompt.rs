//! Prompt/parse boundary
//!
//! All interactive input funnels through here. Parse failures are reported
//! at this boundary and abort the current action without touching state;
//! a closed stdin reads as None and unwinds the menus.

use std::io::{self, Write};

use chrono::NaiveDate;

/// Date format accepted at the prompt (the data files use dd-MM-yyyy)
const PROMPT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Print a prompt and read one trimmed line; None when stdin is closed
pub fn read_reply(label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}

/// Prompt for an ISO date; reports a parse failure and returns the inner
/// None so the caller can abort the action
pub fn read_date(label: &str) -> Option<Option<NaiveDate>> {
    let raw = read_reply(label)?;
    match NaiveDate::parse_from_str(&raw, PROMPT_DATE_FORMAT) {
        Ok(date) => Some(Some(date)),
        Err(_) => {
            eprintln!("Error: Invalid date format. Please use YYYY-MM-DD.");
            Some(None)
        }
    }
}

/// Prompt for an integer; reports a parse failure and returns the inner
/// None so the caller can abort the action
pub fn read_u32(label: &str) -> Option<Option<u32>> {
    let raw = read_reply(label)?;
    match raw.parse() {
        Ok(value) => Some(Some(value)),
        Err(_) => {
            eprintln!("Error: Invalid number format.");
            Some(None)
        }
    }
}
