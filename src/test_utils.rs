//! Test fixtures for the hotel schema.
//!
//! The client never creates or migrates schema in production; the tables
//! are owned by the backing store. These helpers exist so unit and
//! integration tests can stand up an in-memory database that looks like
//! the real one and seed it with rows.

use crate::commands::records::NewCustomer;
use crate::core::Result;
use crate::db::Db;
use rusqlite::params;

/// The hotel-management tables the client reads and writes.
pub const HOTEL_SCHEMA: &str = "
    CREATE TABLE Customer (
        customerID INTEGER PRIMARY KEY,
        fName TEXT NOT NULL,
        lName TEXT NOT NULL,
        Address TEXT,
        phNo INTEGER,
        DOB TEXT,
        gender TEXT
    );

    CREATE TABLE Room (
        hotelID INTEGER NOT NULL,
        roomNo INTEGER NOT NULL,
        roomType TEXT,
        PRIMARY KEY (hotelID, roomNo)
    );

    CREATE TABLE MaintenanceCompany (
        cmpID INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT,
        isCertified TEXT
    );

    CREATE TABLE Repair (
        rID INTEGER PRIMARY KEY,
        hotelID INTEGER,
        roomNo INTEGER,
        mCompany INTEGER,
        repairDate TEXT,
        description TEXT,
        repairType TEXT
    );

    CREATE TABLE Booking (
        bID INTEGER PRIMARY KEY,
        customer INTEGER,
        hotelID INTEGER,
        roomNo INTEGER,
        bookingDate TEXT,
        noOfPeople INTEGER,
        price REAL
    );

    CREATE TABLE Assigned (
        asgID INTEGER PRIMARY KEY,
        staffID INTEGER,
        hotelID INTEGER,
        roomNo INTEGER
    );

    CREATE TABLE Request (
        reqID INTEGER PRIMARY KEY,
        managerID INTEGER,
        repairID INTEGER,
        requestDate TEXT
    );
";

/// Opens an in-memory database carrying the hotel schema.
pub fn hotel_db() -> Result<Db> {
    let db = Db::open_in_memory()?;
    db.execute_batch(HOTEL_SCHEMA)?;
    Ok(db)
}

/// A customer field set with plausible values for the remaining fields.
pub fn sample_customer(first_name: &str, last_name: &str) -> NewCustomer {
    NewCustomer {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "1 Fixture Lane".to_string(),
        phone: 5550100,
        date_of_birth: "1980-01-15".parse().expect("fixture date"),
        gender: "Other".to_string(),
    }
}

pub fn seed_room(db: &Db, hotel_id: i64, room_no: i64, room_type: &str) -> Result<()> {
    db.execute(
        "INSERT INTO Room (hotelID, roomNo, roomType) VALUES (?1, ?2, ?3)",
        params![hotel_id, room_no, room_type],
    )?;
    Ok(())
}

pub fn seed_booking(
    db: &Db,
    booking_id: i64,
    customer_id: i64,
    hotel_id: i64,
    room_no: i64,
    booking_date: &str,
    price: f64,
) -> Result<()> {
    db.execute(
        "INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
        params![booking_id, customer_id, hotel_id, room_no, booking_date, price],
    )?;
    Ok(())
}

pub fn seed_company(db: &Db, company_id: i64, name: &str) -> Result<()> {
    db.execute(
        "INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified)
         VALUES (?1, ?2, '2 Fixture Way', 'TRUE')",
        params![company_id, name],
    )?;
    Ok(())
}

pub fn seed_repair(
    db: &Db,
    repair_id: i64,
    hotel_id: i64,
    room_no: i64,
    company_id: i64,
    repair_date: &str,
) -> Result<()> {
    db.execute(
        "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, description, repairType)
         VALUES (?1, ?2, ?3, ?4, ?5, 'fixture repair', 'general')",
        params![repair_id, hotel_id, room_no, company_id, repair_date],
    )?;
    Ok(())
}
