/// Hoteldesk Error Module
///
/// This module defines the error types for the hoteldesk application.
/// It provides structured error handling with proper error propagation and
/// operator-friendly error messages.
use thiserror::Error;

/// Comprehensive error type for the hoteldesk application.
///
/// This enum covers the failure scenarios the front-desk client can hit:
/// - Database operations (connection, statements, transactions)
/// - Operator input that fails to parse
/// - Name-to-id lookups that match no row
/// - Configuration loading and validation
/// - Terminal I/O
#[derive(Error, Debug)]
pub enum DeskError {
    /// Database-related errors from the SQLite driver
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Operator input that could not be parsed, or a closed input stream
    #[error("Input error: {0}")]
    Input(String),

    /// A lookup (customer name, company name) that matched no row
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal and file system I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use DeskError as the error type.
///
/// This provides a consistent error type across the entire application
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, DeskError>;
