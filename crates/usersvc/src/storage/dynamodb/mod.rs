//! DynamoDB key-value backend.
//!
//! This module provides a DynamoDB-based implementation of the `KeyValueStore`
//! port using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
