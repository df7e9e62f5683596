//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between the SDK's `AttributeValue` maps and
//! the backend-neutral `Item` from `usersvc_core`, and for building update
//! expressions. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;
use usersvc_core::storage::{AttributeValue, Item, RepositoryError};

/// An SDK attribute map.
pub type DynamoItem = HashMap<String, DynamoValue>;

/// The pieces of an `UpdateItem` request that set a group of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: DynamoItem,
}

// ============================================================================
// Value conversions
// ============================================================================

/// Convert a neutral attribute value to its SDK form.
pub fn to_dynamo_value(value: &AttributeValue) -> DynamoValue {
    match value {
        AttributeValue::S(s) => DynamoValue::S(s.clone()),
        AttributeValue::N(n) => DynamoValue::N(n.clone()),
        AttributeValue::Bool(b) => DynamoValue::Bool(*b),
        AttributeValue::Null => DynamoValue::Null(true),
    }
}

/// Convert an SDK attribute value to its neutral form.
///
/// Only scalar types are supported; sets, lists, maps and binaries are
/// rejected as invalid data.
pub fn from_dynamo_value(key: &str, value: &DynamoValue) -> Result<AttributeValue, RepositoryError> {
    match value {
        DynamoValue::S(s) => Ok(AttributeValue::S(s.clone())),
        DynamoValue::N(n) => Ok(AttributeValue::N(n.clone())),
        DynamoValue::Bool(b) => Ok(AttributeValue::Bool(*b)),
        DynamoValue::Null(_) => Ok(AttributeValue::Null),
        _ => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type for field: {}",
            key
        ))),
    }
}

// ============================================================================
// Item conversions
// ============================================================================

/// Convert a neutral item to an SDK attribute map.
pub fn to_dynamo_item(item: &Item) -> DynamoItem {
    item.iter()
        .map(|(k, v)| (k.clone(), to_dynamo_value(v)))
        .collect()
}

/// Convert an SDK attribute map to a neutral item.
pub fn from_dynamo_item(item: &DynamoItem) -> Result<Item, RepositoryError> {
    item.iter()
        .map(|(k, v)| from_dynamo_value(k, v).map(|value| (k.clone(), value)))
        .collect()
}

// ============================================================================
// Update expressions
// ============================================================================

/// Build a `SET` expression assigning every attribute in `updates`.
///
/// Attribute names always go through `#` placeholders, since several plain
/// field names (`Name` among them) are DynamoDB reserved words. Placeholders
/// are numbered in attribute-name order so the output is deterministic.
pub fn build_update_expression(updates: &Item) -> UpdateExpression {
    let mut attributes: Vec<_> = updates.iter().collect();
    attributes.sort_by(|a, b| a.0.cmp(b.0));

    let mut clauses = Vec::with_capacity(attributes.len());
    let mut names = HashMap::with_capacity(attributes.len());
    let mut values = HashMap::with_capacity(attributes.len());

    for (idx, (name, value)) in attributes.into_iter().enumerate() {
        let name_placeholder = format!("#a{idx}");
        let value_placeholder = format!(":v{idx}");

        clauses.push(format!("{name_placeholder} = {value_placeholder}"));
        names.insert(name_placeholder, name.clone());
        values.insert(value_placeholder, to_dynamo_value(value));
    }

    UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    }
}
