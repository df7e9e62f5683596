//! Functional core for the user service.
//!
//! Pure domain types, validation rules and the storage ports. Nothing in this
//! crate performs I/O on its own; concrete backends live in the `usersvc` crate.

pub mod storage;
pub mod user;
