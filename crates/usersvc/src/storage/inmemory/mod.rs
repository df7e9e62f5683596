//! In-memory key-value backend.
//!
//! This module provides an implementation of the `KeyValueStore` port that
//! keeps every table in a `HashMap` wrapped in `Arc<RwLock<_>>`. It is used
//! by the handler tests and for running the service without AWS.
//!
//! # Example
//!
//! ```rust,ignore
//! use usersvc::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new("UserID");
//! // Hand it to a UserStore...
//! ```

mod store;

pub use store::InMemoryStore;
