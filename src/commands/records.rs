//! Record-creating commands: customers, rooms, maintenance companies,
//! repairs, bookings, housekeeping assignments, and repair requests.
//!
//! Every insert derives its surrogate id by the max-plus-one convention
//! (room numbers are scoped to their hotel). The raise-repair-request
//! command is the one multi-statement operation; its two inserts share a
//! transaction so the request always references the repair it created.

use super::{lookup_customer_id, prompt_date, prompt_f64, prompt_i64, prompt_line};
use crate::config::RepairRequestConfig;
use crate::core::Result;
use crate::db::{self, Db};
use chrono::NaiveDate;
use rusqlite::params;
use std::io::BufRead;

/// Field set for a new customer row.
#[derive(Debug)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: i64,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

/// Field set for a new maintenance company row.
#[derive(Debug)]
pub struct NewCompany {
    pub name: String,
    pub address: String,
    /// Freeform certification flag, stored as entered.
    pub certified: String,
}

/// Field set for a new repair row.
#[derive(Debug)]
pub struct NewRepair {
    pub hotel_id: i64,
    pub room_no: i64,
    pub company_id: i64,
    pub repair_date: NaiveDate,
    pub description: String,
    pub repair_type: String,
}

/// Field set for a new booking row. The customer is referenced by name
/// and resolved to an id at insert time.
#[derive(Debug)]
pub struct NewBooking {
    pub hotel_id: i64,
    pub room_no: i64,
    pub first_name: String,
    pub last_name: String,
    pub booking_date: NaiveDate,
    pub party_size: i64,
    pub price: f64,
}

/// Field set for a housekeeping staff assignment row.
#[derive(Debug)]
pub struct NewAssignment {
    pub staff_id: i64,
    pub hotel_id: i64,
    pub room_no: i64,
}

/// Field set for a repair request raised by a staff member.
#[derive(Debug)]
pub struct RepairRequest {
    pub hotel_id: i64,
    pub staff_id: i64,
    pub room_no: i64,
    pub request_date: NaiveDate,
}

/// Inserts a customer row and returns its assigned id.
pub fn add_customer(db: &Db, customer: &NewCustomer) -> Result<i64> {
    let id = db.next_id("Customer", "customerID")?;
    db.execute(
        "INSERT INTO Customer (customerID, fName, lName, Address, phNo, DOB, gender)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id,
            customer.first_name,
            customer.last_name,
            customer.address,
            customer.phone,
            customer.date_of_birth.to_string(),
            customer.gender,
        ],
    )?;
    Ok(id)
}

/// Inserts a room row and returns the room number assigned within the hotel.
pub fn add_room(db: &Db, hotel_id: i64, room_type: &str) -> Result<i64> {
    let room_no = db.next_room_no(hotel_id)?;
    db.execute(
        "INSERT INTO Room (hotelID, roomNo, roomType) VALUES (?1, ?2, ?3)",
        params![hotel_id, room_no, room_type],
    )?;
    Ok(room_no)
}

/// Inserts a maintenance company row and returns its assigned id.
pub fn add_maintenance_company(db: &Db, company: &NewCompany) -> Result<i64> {
    let id = db.next_id("MaintenanceCompany", "cmpID")?;
    db.execute(
        "INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified)
         VALUES (?1, ?2, ?3, ?4)",
        params![id, company.name, company.address, company.certified],
    )?;
    Ok(id)
}

/// Inserts a repair row and returns its assigned id.
pub fn add_repair(db: &Db, repair: &NewRepair) -> Result<i64> {
    let id = db.next_id("Repair", "rID")?;
    db.execute(
        "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, description, repairType)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id,
            repair.hotel_id,
            repair.room_no,
            repair.company_id,
            repair.repair_date.to_string(),
            repair.description,
            repair.repair_type,
        ],
    )?;
    Ok(id)
}

/// Resolves the customer by name and inserts a booking row, returning
/// the booking's assigned id.
pub fn book_room(db: &Db, booking: &NewBooking) -> Result<i64> {
    let customer_id = lookup_customer_id(db, &booking.first_name, &booking.last_name)?;
    let id = db.next_id("Booking", "bID")?;
    db.execute(
        "INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id,
            customer_id,
            booking.hotel_id,
            booking.room_no,
            booking.booking_date.to_string(),
            booking.party_size,
            booking.price,
        ],
    )?;
    Ok(id)
}

/// Inserts a housekeeping assignment row and returns its assigned id.
pub fn assign_housekeeping(db: &Db, assignment: &NewAssignment) -> Result<i64> {
    let id = db.next_id("Assigned", "asgID")?;
    db.execute(
        "INSERT INTO Assigned (asgID, staffID, hotelID, roomNo) VALUES (?1, ?2, ?3, ?4)",
        params![id, assignment.staff_id, assignment.hotel_id, assignment.room_no],
    )?;
    Ok(id)
}

/// Raises a repair request: inserts a repair row carrying the configured
/// placeholder company and date, then a request row referencing it.
///
/// Both inserts run in one transaction, and the request references the
/// repair id computed for the insert itself rather than a re-queried
/// maximum, so sequential invocations always produce correctly linked
/// pairs. Returns the (repair id, request id) pair.
pub fn raise_repair_request(
    db: &mut Db,
    request: &RepairRequest,
    defaults: &RepairRequestConfig,
) -> Result<(i64, i64)> {
    let tx = db.transaction()?;

    let repair_id = db::next_id_on(&tx, "Repair", "rID")?;
    tx.execute(
        "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            repair_id,
            request.hotel_id,
            request.room_no,
            defaults.company_id,
            defaults.repair_date,
        ],
    )?;

    let request_id = db::next_id_on(&tx, "Request", "reqID")?;
    tx.execute(
        "INSERT INTO Request (reqID, managerID, repairID, requestDate)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            request_id,
            request.staff_id,
            repair_id,
            request.request_date.to_string(),
        ],
    )?;

    tx.commit()?;
    Ok((repair_id, request_id))
}

pub fn run_add_customer<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let customer = NewCustomer {
        first_name: prompt_line(input, "Enter the first name")?,
        last_name: prompt_line(input, "Enter the last name")?,
        address: prompt_line(input, "Enter the customer's address")?,
        phone: prompt_i64(input, "Enter the phone number")?,
        date_of_birth: prompt_date(input, "Enter the date of birth (YYYY-MM-DD)")?,
        gender: prompt_line(input, "Enter Male/Female/Other for gender")?,
    };
    let id = add_customer(db, &customer)?;
    println!("Added customer {id}");
    Ok(())
}

pub fn run_add_room<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let hotel_id = prompt_i64(input, "Enter the hotel ID")?;
    let room_type = prompt_line(input, "Enter the room type")?;
    let room_no = add_room(db, hotel_id, &room_type)?;
    println!("Added room {room_no} at hotel {hotel_id}");
    Ok(())
}

pub fn run_add_maintenance_company<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let company = NewCompany {
        name: prompt_line(input, "Enter the name of the company")?,
        address: prompt_line(input, "Enter the address of the company")?,
        certified: prompt_line(input, "Enter TRUE or FALSE if the company is certified")?,
    };
    let id = add_maintenance_company(db, &company)?;
    println!("Added maintenance company {id}");
    Ok(())
}

pub fn run_add_repair<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let repair = NewRepair {
        hotel_id: prompt_i64(input, "Enter the hotel ID")?,
        room_no: prompt_i64(input, "Enter the room number")?,
        company_id: prompt_i64(input, "Enter the maintenance company ID")?,
        repair_date: prompt_date(input, "Enter the repair date (YYYY-MM-DD)")?,
        description: prompt_line(input, "Enter a description")?,
        repair_type: prompt_line(input, "Enter the repair type")?,
    };
    let id = add_repair(db, &repair)?;
    println!("Added repair {id}");
    Ok(())
}

pub fn run_book_room<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let booking = NewBooking {
        hotel_id: prompt_i64(input, "Enter the hotel ID")?,
        room_no: prompt_i64(input, "Enter the room number")?,
        first_name: prompt_line(input, "Enter the customer's first name")?,
        last_name: prompt_line(input, "Enter the customer's last name")?,
        booking_date: prompt_date(input, "Enter the booking date (YYYY-MM-DD)")?,
        party_size: prompt_i64(input, "Enter the number of people")?,
        price: prompt_f64(input, "Enter the price")?,
    };
    let id = book_room(db, &booking)?;
    println!("Added booking {id}");
    Ok(())
}

pub fn run_assign_housekeeping<R: BufRead>(db: &Db, input: &mut R) -> Result<()> {
    let assignment = NewAssignment {
        staff_id: prompt_i64(input, "Enter the staff SSN")?,
        hotel_id: prompt_i64(input, "Enter the hotel ID")?,
        room_no: prompt_i64(input, "Enter the room number")?,
    };
    let id = assign_housekeeping(db, &assignment)?;
    println!("Added assignment {id}");
    Ok(())
}

pub fn run_repair_request<R: BufRead>(
    db: &mut Db,
    input: &mut R,
    defaults: &RepairRequestConfig,
) -> Result<()> {
    let request = RepairRequest {
        hotel_id: prompt_i64(input, "Enter the hotel ID")?,
        staff_id: prompt_i64(input, "Enter the staff SSN")?,
        room_no: prompt_i64(input, "Enter the room number")?,
        request_date: prompt_date(input, "Enter the request date (YYYY-MM-DD)")?,
    };
    let (repair_id, request_id) = raise_repair_request(db, &request, defaults)?;
    println!("Raised request {request_id} for repair {repair_id}");
    Ok(())
}
