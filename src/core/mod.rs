/// Core Module for Hoteldesk
///
/// This module contains the fundamental components shared by the rest of
/// the application. It provides the common error type and result alias
/// used across the data access layer and the command handlers.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{DeskError, Result};
