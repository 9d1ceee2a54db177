//! In-memory storage backend for development and testing.
//!
//! Stores all rows in `BTreeMap`s behind a single `Arc<RwLock<_>>` and
//! emulates the store behaviors the service relies on: identity
//! assignment, foreign-key rejection, and inner-join order views.
//!
//! # Example
//!
//! ```rust,ignore
//! use carshop::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
