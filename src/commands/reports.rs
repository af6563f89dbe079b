//! Reporting commands: occupancy counts, booking listings, top-k
//! rankings, and repair statistics.
//!
//! Each report has a typed core returning the collected result table and
//! a `run_*` wrapper that prompts for the parameters and prints the table
//! in the tab-separated terminal format.

use super::{lookup_company_id, lookup_customer_id, prompt_date, prompt_i64, prompt_line};
use crate::core::Result;
use crate::db::{print_table, Db, QueryResult};
use chrono::{Duration, NaiveDate};
use rusqlite::params;
use std::io::BufRead;

/// Counts the rooms of a hotel that appear in no booking for that hotel.
pub fn available_rooms(db: &Db, hotel_id: i64) -> Result<QueryResult> {
    db.query(
        "SELECT COUNT(*) AS available
         FROM Room R
         WHERE R.hotelID = ?1
           AND R.roomNo NOT IN (SELECT B.roomNo FROM Booking B WHERE B.hotelID = ?1)",
        params![hotel_id],
    )
}

/// Counts the bookings recorded for a hotel.
pub fn booked_rooms(db: &Db, hotel_id: i64) -> Result<QueryResult> {
    db.query(
        "SELECT COUNT(*) AS booked FROM Booking WHERE hotelID = ?1",
        params![hotel_id],
    )
}

/// Lists the bookings of a hotel dated in `(start, start + 7 days]`.
/// The start date itself is excluded; the seventh day is included.
pub fn bookings_for_week(db: &Db, hotel_id: i64, start: NaiveDate) -> Result<QueryResult> {
    let end = start + Duration::days(7);
    db.query(
        "SELECT * FROM Booking
         WHERE hotelID = ?1 AND bookingDate > ?2 AND bookingDate <= ?3",
        params![hotel_id, start.to_string(), end.to_string()],
    )
}

/// Lists up to `k` bookings in the date range, highest price first.
pub fn top_room_prices(db: &Db, from: NaiveDate, to: NaiveDate, k: i64) -> Result<QueryResult> {
    db.query(
        "SELECT * FROM Booking
         WHERE bookingDate >= ?1 AND bookingDate <= ?2
         ORDER BY price DESC
         LIMIT ?3",
        params![from.to_string(), to.to_string(), k],
    )
}

/// Lists up to `k` bookings of the named customer, highest price first.
pub fn top_customer_bookings(
    db: &Db,
    first_name: &str,
    last_name: &str,
    k: i64,
) -> Result<QueryResult> {
    let customer_id = lookup_customer_id(db, first_name, last_name)?;
    db.query(
        "SELECT bID, price FROM Booking
         WHERE customer = ?1
         ORDER BY price DESC
         LIMIT ?2",
        params![customer_id, k],
    )
}

/// Sums the named customer's booking prices at one hotel over a date range.
pub fn total_cost(
    db: &Db,
    first_name: &str,
    last_name: &str,
    hotel_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<QueryResult> {
    let customer_id = lookup_customer_id(db, first_name, last_name)?;
    db.query(
        "SELECT SUM(price) AS total FROM Booking
         WHERE hotelID = ?1 AND customer = ?2
           AND bookingDate >= ?3 AND bookingDate <= ?4",
        params![hotel_id, customer_id, from.to_string(), to.to_string()],
    )
}

/// Lists the repairs made by the named company, highest hotel id first.
pub fn repairs_by_company(db: &Db, company_name: &str) -> Result<QueryResult> {
    let company_id = lookup_company_id(db, company_name)?;
    db.query(
        "SELECT rID, hotelID, roomNo, repairType FROM Repair
         WHERE mCompany = ?1
         ORDER BY hotelID DESC",
        params![company_id],
    )
}

/// Lists up to `k` maintenance companies by repair count, descending.
pub fn top_maintenance_companies(db: &Db, k: i64) -> Result<QueryResult> {
    db.query(
        "SELECT C.name, COUNT(R.rID) AS repairs
         FROM MaintenanceCompany C
         JOIN Repair R ON R.mCompany = C.cmpID
         GROUP BY C.name
         ORDER BY COUNT(R.rID) DESC
         LIMIT ?1",
        params![k],
    )
}

/// Counts a room's repairs grouped by the year of the repair date.
pub fn repairs_per_year(db: &Db, hotel_id: i64, room_no: i64) -> Result<QueryResult> {
    db.query(
        "SELECT strftime('%Y', repairDate) AS year, COUNT(rID) AS repairs
         FROM Repair
         WHERE hotelID = ?1 AND roomNo = ?2
         GROUP BY year
         ORDER BY year",
        params![hotel_id, room_no],
    )
}

pub fn run_available_rooms<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let hotel_id = prompt_i64(input, "Enter the hotel ID")?;
    print_table(&available_rooms(db, hotel_id)?);
    Ok(())
}

pub fn run_booked_rooms<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let hotel_id = prompt_i64(input, "Enter the hotel ID")?;
    print_table(&booked_rooms(db, hotel_id)?);
    Ok(())
}

pub fn run_bookings_for_week<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let hotel_id = prompt_i64(input, "Enter the hotel ID")?;
    let start = prompt_date(input, "Enter the starting date (YYYY-MM-DD)")?;
    print_table(&bookings_for_week(db, hotel_id, start)?);
    Ok(())
}

pub fn run_top_room_prices<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let from = prompt_date(input, "Enter the first date (YYYY-MM-DD)")?;
    let to = prompt_date(input, "Enter the second date (YYYY-MM-DD)")?;
    let k = prompt_i64(input, "Enter the maximum number of bookings to display")?;
    print_table(&top_room_prices(db, from, to, k)?);
    Ok(())
}

pub fn run_top_customer_bookings<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let first_name = prompt_line(input, "Enter the customer's first name")?;
    let last_name = prompt_line(input, "Enter the customer's last name")?;
    let k = prompt_i64(input, "Enter the maximum number of bookings to display")?;
    print_table(&top_customer_bookings(db, &first_name, &last_name, k)?);
    Ok(())
}

pub fn run_total_cost<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let first_name = prompt_line(input, "Enter the customer's first name")?;
    let last_name = prompt_line(input, "Enter the customer's last name")?;
    let hotel_id = prompt_i64(input, "Enter the hotel ID")?;
    let from = prompt_date(input, "Enter the start date (YYYY-MM-DD)")?;
    let to = prompt_date(input, "Enter the end date (YYYY-MM-DD)")?;
    print_table(&total_cost(db, &first_name, &last_name, hotel_id, from, to)?);
    Ok(())
}

pub fn run_repairs_by_company<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let name = prompt_line(input, "Enter the company's name")?;
    print_table(&repairs_by_company(db, &name)?);
    Ok(())
}

pub fn run_top_maintenance_companies<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let k = prompt_i64(input, "Enter the maximum number of companies to display")?;
    print_table(&top_maintenance_companies(db, k)?);
    Ok(())
}

pub fn run_repairs_per_year<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let hotel_id = prompt_i64(input, "Enter the hotel ID")?;
    let room_no = prompt_i64(input, "Enter the room number")?;
    print_table(&repairs_per_year(db, hotel_id, room_no)?);
    Ok(())
}
