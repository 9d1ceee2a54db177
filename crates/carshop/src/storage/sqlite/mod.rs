//! SQLite storage backend implementation.
//!
//! Implements the repository traits using `rusqlite` for the statements and
//! `tokio-rusqlite` to run them off the async runtime. A single connection
//! is opened at startup and shared by all three repositories.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
