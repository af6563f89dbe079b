// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod commands;
pub mod config;
pub mod db;
pub mod menu;

// Schema fixtures shared by unit and integration tests
pub mod test_utils;
