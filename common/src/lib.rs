pub mod database;

// expose database module

pub use database::{Database, DatabaseSettings, create_connection};
