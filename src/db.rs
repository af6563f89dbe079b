//! Data access layer: a thin wrapper over one SQLite connection.
//!
//! The command handlers speak to the backend exclusively through this
//! module: `execute` for statements that return no rows, `query` for
//! statements that do, and `run_query` for the interactive contract of
//! printing a result table to the terminal while returning the row count.
//! All operator-supplied values are bound as parameters; table and column
//! identifiers come from code constants only.

use crate::core::Result;
use rusqlite::{types::ValueRef, Connection, Params, Transaction};
use tracing::{debug, info};

/// Represents the result of a SQL query execution
#[derive(Debug)]
pub struct QueryResult {
    /// Column names from the query result
    pub columns: Vec<String>,
    /// Rows of data as string values
    pub rows: Vec<Vec<String>>,
    /// Number of rows returned
    pub row_count: usize,
}

impl QueryResult {
    /// Creates a new QueryResult from column names and row data
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        QueryResult {
            columns,
            rows,
            row_count,
        }
    }
}

/// One open database connection, held for the lifetime of the process.
#[derive(Debug)]
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Opens the database at `path`.
    pub fn open(path: &str) -> Result<Self> {
        info!("opening database at {}", path);
        let conn = Connection::open(path)?;
        Db::with_connection(conn)
    }

    /// Opens an in-memory database. Used by tests and fixtures.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Db::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Db { conn })
    }

    /// Executes a non-row-returning statement (INSERT, UPDATE, DELETE, DDL)
    /// and returns the number of rows affected.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        debug!("execute: {}", sql);
        let affected = self.conn.execute(sql, params)?;
        Ok(affected)
    }

    /// Executes a row-returning statement and collects the result table.
    ///
    /// Values are rendered to display text (see `format_value`); callers
    /// that need the terminal contract should use `run_query` instead.
    pub fn query<P: Params>(&self, sql: &str, params: P) -> Result<QueryResult> {
        debug!("query: {}", sql);
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params, |row| {
                let mut values = Vec::with_capacity(column_count);
                for i in 0..column_count {
                    values.push(format_value(row.get_ref(i)?));
                }
                Ok(values)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(QueryResult::new(columns, rows))
    }

    /// Executes a row-returning statement, prints the result table to the
    /// terminal (tab-separated header line, then one line per row), and
    /// returns the number of rows printed.
    pub fn run_query<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        let result = self.query(sql, params)?;
        print_table(&result);
        debug!("query returned {} rows", result.row_count);
        Ok(result.row_count)
    }

    /// Runs a batch of statements (fixture DDL, pragmas).
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Runs a single-value id lookup, returning `None` when no row matches.
    pub fn query_id<P: Params>(&self, sql: &str, params: P) -> Result<Option<i64>> {
        use rusqlite::OptionalExtension;
        debug!("query_id: {}", sql);
        let id = self.conn.query_row(sql, params, |row| row.get(0)).optional()?;
        Ok(id)
    }

    /// Computes the next surrogate id for `table`: current maximum of
    /// `id_column` plus one, or 1 for an empty table.
    ///
    /// Unsynchronized by design; the client assumes a single interactive
    /// operator issuing serialized commands.
    pub fn next_id(&self, table: &str, id_column: &str) -> Result<i64> {
        next_id_on(&self.conn, table, id_column)
    }

    /// Computes the next room number for a hotel: the maximum existing
    /// room number within that hotel plus one.
    pub fn next_room_no(&self, hotel_id: i64) -> Result<i64> {
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(roomNo) FROM Room WHERE hotelID = ?1",
            [hotel_id],
            |row| row.get(0),
        )?;
        Ok(max.unwrap_or(0) + 1)
    }

    /// Begins a transaction. Only the repair-request command needs one:
    /// its two dependent inserts must land atomically.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        let tx = self.conn.transaction()?;
        Ok(tx)
    }
}

/// Max-plus-one id derivation against any connection-like handle, so the
/// same helper works inside a transaction.
pub(crate) fn next_id_on(conn: &Connection, table: &str, id_column: &str) -> Result<i64> {
    let max: Option<i64> = conn.query_row(
        &format!("SELECT MAX({id_column}) FROM {table}"),
        [],
        |row| row.get(0),
    )?;
    Ok(max.unwrap_or(0) + 1)
}

/// Prints a result table: one tab-separated header line, then one
/// tab-separated line per row. Empty results still print the header.
pub fn print_table(result: &QueryResult) {
    println!("{}", result.columns.join("\t"));
    for row in &result.rows {
        println!("{}", row.join("\t"));
    }
}

/// Formats a SQLite value for display
fn format_value(value: ValueRef) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<BLOB: {} bytes>", b.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeskError;
    use rusqlite::params;

    fn test_db() -> Db {
        let db = Db::open_in_memory().unwrap();
        db.execute(
            "CREATE TABLE guests (id INTEGER PRIMARY KEY, name TEXT, balance REAL)",
            [],
        )
        .unwrap();
        db
    }

    #[test]
    fn test_execute_and_query() {
        let db = test_db();
        db.execute(
            "INSERT INTO guests (id, name, balance) VALUES (?1, ?2, ?3)",
            params![1, "Alice", 120.5],
        )
        .unwrap();
        db.execute(
            "INSERT INTO guests (id, name) VALUES (?1, ?2)",
            params![2, "Bob"],
        )
        .unwrap();

        let result = db.query("SELECT * FROM guests ORDER BY id", []).unwrap();
        assert_eq!(result.columns, vec!["id", "name", "balance"]);
        assert_eq!(result.row_count, 2);
        assert_eq!(result.rows[0], vec!["1", "Alice", "120.5"]);
        // NULL rendering
        assert_eq!(result.rows[1], vec!["2", "Bob", "NULL"]);
    }

    #[test]
    fn test_run_query_returns_row_count() {
        let db = test_db();
        for i in 1..=3 {
            db.execute("INSERT INTO guests (id) VALUES (?1)", [i]).unwrap();
        }
        let count = db.run_query("SELECT id FROM guests", []).unwrap();
        assert_eq!(count, 3);
        let none = db.run_query("SELECT id FROM guests WHERE id > 99", []).unwrap();
        assert_eq!(none, 0);
    }

    #[test]
    fn test_query_error_propagates() {
        let db = test_db();
        let result = db.query("SELECT * FROM no_such_table", []);
        match result {
            Err(DeskError::Database(_)) => {}
            other => panic!("Expected Database error, got {:?}", other),
        }
    }

    #[test]
    fn test_next_id_starts_at_one() {
        let db = test_db();
        assert_eq!(db.next_id("guests", "id").unwrap(), 1);
        db.execute("INSERT INTO guests (id) VALUES (41)", []).unwrap();
        assert_eq!(db.next_id("guests", "id").unwrap(), 42);
    }

    #[test]
    fn test_next_room_no_is_scoped_to_hotel() {
        let db = test_db();
        db.execute(
            "CREATE TABLE Room (hotelID INTEGER, roomNo INTEGER, roomType TEXT)",
            [],
        )
        .unwrap();
        db.execute("INSERT INTO Room VALUES (1, 7, 'Suite')", []).unwrap();
        db.execute("INSERT INTO Room VALUES (2, 3, 'Economy')", []).unwrap();

        assert_eq!(db.next_room_no(1).unwrap(), 8);
        assert_eq!(db.next_room_no(2).unwrap(), 4);
        // No rooms yet at hotel 3
        assert_eq!(db.next_room_no(3).unwrap(), 1);
    }
}
