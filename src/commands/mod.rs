//! Command handlers for the front-desk menu.
//!
//! Every menu operation comes in two parts: a typed core function that
//! takes structured inputs and talks to the data access layer, and a
//! `run_*` wrapper that prompts the operator, parses the answers, and
//! renders the result. The typed cores are the testable seam; the
//! wrappers own the terminal dialogue.

pub mod records;
pub mod reports;

use crate::core::{DeskError, Result};
use crate::db::Db;
use chrono::NaiveDate;
use rusqlite::params;
use std::io::{self, BufRead, Write};

/// Prompts for one line of input and returns it trimmed.
pub(crate) fn prompt_line<R: BufRead>(input: &mut R, label: &str) -> Result<String> {
    println!("{label}:");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DeskError::Input("input stream closed".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Prompts for a whole number. A parse failure aborts the command.
pub(crate) fn prompt_i64<R: BufRead>(input: &mut R, label: &str) -> Result<i64> {
    let line = prompt_line(input, label)?;
    line.parse()
        .map_err(|_| DeskError::Input(format!("'{line}' is not a whole number")))
}

/// Prompts for a price-like decimal number.
pub(crate) fn prompt_f64<R: BufRead>(input: &mut R, label: &str) -> Result<f64> {
    let line = prompt_line(input, label)?;
    line.parse()
        .map_err(|_| DeskError::Input(format!("'{line}' is not a number")))
}

/// Prompts for a date in `YYYY-MM-DD` form. Dates are kept in ISO form
/// end to end so that text comparison in the backend orders correctly.
pub(crate) fn prompt_date<R: BufRead>(input: &mut R, label: &str) -> Result<NaiveDate> {
    let line = prompt_line(input, label)?;
    NaiveDate::parse_from_str(&line, "%Y-%m-%d")
        .map_err(|_| DeskError::Input(format!("'{line}' is not a date (expected YYYY-MM-DD)")))
}

/// Resolves a customer by first and last name to a surrogate id. Name
/// collisions resolve to the first matching row.
pub(crate) fn lookup_customer_id(db: &Db, first_name: &str, last_name: &str) -> Result<i64> {
    db.query_id(
        "SELECT customerID FROM Customer WHERE fName = ?1 AND lName = ?2",
        params![first_name, last_name],
    )?
    .ok_or_else(|| DeskError::Lookup(format!("no customer named {first_name} {last_name}")))
}

/// Resolves a maintenance company by name to a surrogate id.
pub(crate) fn lookup_company_id(db: &Db, name: &str) -> Result<i64> {
    db.query_id(
        "SELECT cmpID FROM MaintenanceCompany WHERE name = ?1",
        params![name],
    )?
    .ok_or_else(|| DeskError::Lookup(format!("no maintenance company named {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::hotel_db;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_trims() {
        let mut input = Cursor::new("  Jane  \n");
        assert_eq!(prompt_line(&mut input, "First name").unwrap(), "Jane");
    }

    #[test]
    fn test_prompt_line_on_closed_stream() {
        let mut input = Cursor::new("");
        match prompt_line(&mut input, "First name") {
            Err(DeskError::Input(msg)) => assert!(msg.contains("closed")),
            other => panic!("Expected Input error, got {:?}", other),
        }
    }

    #[test]
    fn test_prompt_i64_rejects_garbage() {
        let mut input = Cursor::new("twelve\n");
        match prompt_i64(&mut input, "Enter the hotel ID") {
            Err(DeskError::Input(msg)) => assert!(msg.contains("twelve")),
            other => panic!("Expected Input error, got {:?}", other),
        }
    }

    #[test]
    fn test_prompt_date_parses_iso() {
        let mut input = Cursor::new("2024-02-29\n");
        let date = prompt_date(&mut input, "Enter the booking date").unwrap();
        assert_eq!(date.to_string(), "2024-02-29");

        let mut bad = Cursor::new("02/29/2024\n");
        assert!(prompt_date(&mut bad, "Enter the booking date").is_err());
    }

    #[test]
    fn test_lookup_customer_first_match_on_collision() {
        let db = hotel_db().unwrap();
        db.execute(
            "INSERT INTO Customer (customerID, fName, lName) VALUES (1, 'Jane', 'Doe')",
            [],
        )
        .unwrap();
        db.execute(
            "INSERT INTO Customer (customerID, fName, lName) VALUES (2, 'Jane', 'Doe')",
            [],
        )
        .unwrap();

        assert_eq!(lookup_customer_id(&db, "Jane", "Doe").unwrap(), 1);
    }

    #[test]
    fn test_lookup_unknown_customer_is_lookup_error() {
        let db = hotel_db().unwrap();
        match lookup_customer_id(&db, "Nobody", "Here") {
            Err(DeskError::Lookup(msg)) => assert!(msg.contains("Nobody Here")),
            other => panic!("Expected Lookup error, got {:?}", other),
        }
    }
}
