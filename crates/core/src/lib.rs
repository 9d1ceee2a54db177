//! Core domain types and storage contracts for carshop.
//!
//! Everything in this crate is pure: no database handles, no HTTP. Storage
//! backends live in the `carshop` binary and implement the traits in
//! [`storage`].

pub mod shop;
pub mod storage;
