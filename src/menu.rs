//! Interactive menu loop.
//!
//! The session has one state: awaiting a command. Each iteration prints
//! the menu, reads a choice, dispatches, and returns to the menu. Errors
//! raised inside a command are caught at the dispatch boundary, printed
//! to the error stream, and the session continues.

use crate::commands::{records, reports};
use crate::config::Config;
use crate::core::Result;
use crate::db::Db;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &str = "\
MAIN MENU
---------
1. Add new customer
2. Add new room
3. Add new maintenance company
4. Add new repair
5. Add new booking
6. Assign house cleaning staff to a room
7. Raise a repair request
8. Get number of available rooms
9. Get number of booked rooms
10. Get hotel bookings for a week
11. Get top k rooms with highest price for a date range
12. Get top k highest booking price for a customer
13. Get customer total cost for a given date range
14. List the repairs made by maintenance company
15. Get top k maintenance companies based on repair count
16. Get number of repairs occurred per year for a given hotel room
17. < EXIT";

/// Reads the operator's menu choice, re-prompting until a line parses as
/// a number. Returns `None` when the input stream is closed. Out-of-range
/// numbers are returned as-is; the dispatcher decides what to do with
/// them.
pub fn read_choice<R: BufRead>(input: &mut R) -> Result<Option<i32>> {
    loop {
        print!("Please make your choice: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<i32>() {
            Ok(choice) => return Ok(Some(choice)),
            Err(_) => println!("Your input is invalid!"),
        }
    }
}

/// Runs the command loop until the operator exits or the input stream
/// closes. Command-local failures are reported and the loop continues.
pub fn run<R: BufRead>(db: &mut Db, input: &mut R, config: &Config) -> Result<()> {
    loop {
        println!("{MENU}");
        let choice = match read_choice(input)? {
            Some(choice) => choice,
            None => break,
        };
        debug!("dispatching choice {}", choice);
        let outcome = match choice {
            1 => records::run_add_customer(db, input),
            2 => records::run_add_room(db, input),
            3 => records::run_add_maintenance_company(db, input),
            4 => records::run_add_repair(db, input),
            5 => records::run_book_room(db, input),
            6 => records::run_assign_housekeeping(db, input),
            7 => records::run_repair_request(db, input, &config.repair_request),
            8 => reports::run_available_rooms(db, input),
            9 => reports::run_booked_rooms(db, input),
            10 => reports::run_bookings_for_week(db, input),
            11 => reports::run_top_room_prices(db, input),
            12 => reports::run_top_customer_bookings(db, input),
            13 => reports::run_total_cost(db, input),
            14 => reports::run_repairs_by_company(db, input),
            15 => reports::run_top_maintenance_companies(db, input),
            16 => reports::run_repairs_per_year(db, input),
            17 => break,
            _ => {
                println!("Unrecognized choice!");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            eprintln!("{e}");
        }
    }
    Ok(())
}
